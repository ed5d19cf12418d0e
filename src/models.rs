use crate::error::ScrapeWarning;
use serde::{Deserialize, Serialize};

/// One reconciled episode. Immutable once emitted by the extractor.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Watch-page id segment of the URL, or the full URL when none exists.
    pub id: String,
    pub title: String,
    pub episode_number: u32,
    pub season_number: u32,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// Episodes of a single season, ordered by episode number.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub season_number: u32,
    pub episode_count: usize,
    pub episodes: Vec<Episode>,
}

/// Final output: seasons ordered ascending, unique canonical URLs across the
/// whole collection, unique (season, episode) pairs.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct EpisodeCollection {
    pub seasons: Vec<Season>,
}

impl EpisodeCollection {
    pub fn total_episodes(&self) -> usize {
        self.seasons.iter().map(|s| s.episodes.len()).sum()
    }

    pub fn episodes(&self) -> impl Iterator<Item = &Episode> {
        self.seasons.iter().flat_map(|s| s.episodes.iter())
    }
}

/// Result of a full multi-season run: the collection plus any non-fatal
/// conditions observed along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeOutcome {
    pub collection: EpisodeCollection,
    pub warnings: Vec<ScrapeWarning>,
}
