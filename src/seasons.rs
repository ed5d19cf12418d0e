//! Season partitioning: drive repeated extraction passes across season
//! navigation and assemble the final collection.
//!
//! Navigation itself (clicking the "next season" control, waiting for the
//! DOM to settle) belongs to the collaborator behind [`SeriesSource`]; this
//! module only decides when to stop, assigns season numbers from pass order
//! and guards the global uniqueness invariants.

use crate::error::{ScrapeError, ScrapeWarning};
use crate::extractor::EpisodeExtractor;
use crate::models::{Episode, EpisodeCollection, ScrapeOutcome, Season};
use std::collections::HashSet;

/// The navigation collaborator the partitioner drives.
///
/// `episode_links` must be a pure snapshot read of the currently displayed
/// season. `advance_to_next_season` returns `true` only when navigation
/// succeeded and the DOM already reflects the next season; any settle delay
/// is the implementor's responsibility.
pub trait SeriesSource {
    fn episode_links(&mut self) -> Result<Vec<crate::dom::LinkDescriptor>, ScrapeError>;
    fn advance_to_next_season(&mut self) -> Result<bool, ScrapeError>;
}

/// Combines per-season passes into an [`EpisodeCollection`].
#[derive(Debug)]
pub struct SeasonPartitioner {
    extractor: EpisodeExtractor,
    max_seasons: u32,
}

impl SeasonPartitioner {
    pub fn new(extractor: EpisodeExtractor) -> Self {
        let max_seasons = extractor.config().max_seasons;
        Self {
            extractor,
            max_seasons,
        }
    }

    /// Run extraction passes until the source reports exhaustion or the
    /// season cap is reached.
    ///
    /// Structural failures abort with the failing pass index attached.
    /// Empty passes and cross-pass URL overlaps are reported as warnings;
    /// overlapping URLs are kept once, last pass wins.
    pub fn run<S: SeriesSource>(&self, source: &mut S) -> Result<ScrapeOutcome, ScrapeError> {
        let mut seasons: Vec<Season> = Vec::new();
        let mut warnings: Vec<ScrapeWarning> = Vec::new();
        let mut seen_urls: HashSet<String> = HashSet::new();

        for pass in 1..=self.max_seasons {
            let links = source.episode_links().map_err(|e| e.in_pass(pass))?;
            let mut episodes = self.extractor.extract_pass(links, pass);

            if episodes.is_empty() {
                log::warn!("season pass {pass} yielded no episodes");
                warnings.push(ScrapeWarning::EmptyPass { pass });
            } else {
                let overlap = self.remove_overlap(&mut seasons, &episodes, &seen_urls);
                if !overlap.is_empty() {
                    log::warn!(
                        "season pass {pass} repeated {} URL(s); keeping the later pass",
                        overlap.len()
                    );
                    warnings.push(ScrapeWarning::OverlapDetected {
                        pass,
                        urls: overlap,
                    });
                }

                for episode in &episodes {
                    seen_urls.insert(episode.url.clone());
                }
                episodes.sort_by_key(|e| e.episode_number);
                seasons.push(Season {
                    season_number: pass,
                    episode_count: episodes.len(),
                    episodes,
                });
            }

            if pass == self.max_seasons {
                log::info!("season cap ({}) reached, stopping", self.max_seasons);
                break;
            }
            match source.advance_to_next_season() {
                Ok(true) => continue,
                Ok(false) => {
                    log::info!("season navigation exhausted after pass {pass}");
                    break;
                }
                Err(e) => return Err(e.in_pass(pass)),
            }
        }

        seasons.retain(|s| !s.episodes.is_empty());
        Ok(ScrapeOutcome {
            collection: EpisodeCollection { seasons },
            warnings,
        })
    }

    /// Drop earlier-pass episodes whose URL the new pass repeats, returning
    /// the overlapping URLs.
    fn remove_overlap(
        &self,
        seasons: &mut [Season],
        new_episodes: &[Episode],
        seen_urls: &HashSet<String>,
    ) -> Vec<String> {
        let mut overlap: Vec<String> = new_episodes
            .iter()
            .filter(|e| seen_urls.contains(&e.url))
            .map(|e| e.url.clone())
            .collect();
        overlap.sort();
        overlap.dedup();

        if !overlap.is_empty() {
            let overlapping: HashSet<&String> = overlap.iter().collect();
            for season in seasons.iter_mut() {
                season.episodes.retain(|e| !overlapping.contains(&e.url));
                season.episode_count = season.episodes.len();
            }
        }
        overlap
    }
}
