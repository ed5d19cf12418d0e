//! Episode title cleanup.
//!
//! Listing pages prefix titles with season/episode markers ("S1 E1 - ...",
//! "Episode 3 - ...") that are redundant here because those numbers live in
//! dedicated fields. The normalizer strips them and synthesizes a title when
//! nothing usable remains.

use crate::helpers::title_from_url_slug;
use regex::Regex;

/// Strips redundant season/episode prefixes from extracted titles.
///
/// Normalization is idempotent: applying it to an already-clean title is a
/// no-op.
#[derive(Debug)]
pub struct TitleNormalizer {
    season_episode_prefix: Regex,
    episode_prefix: Regex,
    ep_prefix: Regex,
}

impl Default for TitleNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleNormalizer {
    pub fn new() -> Self {
        Self {
            season_episode_prefix: Regex::new(r"(?i)^S\d+\s*E\d+\s*[-–]\s*")
                .expect("season/episode prefix pattern"),
            episode_prefix: Regex::new(r"(?i)^Episode\s*\d+\s*[-–]\s*")
                .expect("episode prefix pattern"),
            ep_prefix: Regex::new(r"(?i)^Ep\s*\d+\s*[-–]\s*").expect("ep prefix pattern"),
        }
    }

    /// Strip anchored season/episode prefixes. Prefixes are stripped until
    /// none applies, so stacked markers cannot survive one call and
    /// re-normalizing is a no-op.
    pub fn normalize(&self, title: &str) -> String {
        let mut current = title.trim().to_string();
        loop {
            let mut next = current.clone();
            for re in [
                &self.season_episode_prefix,
                &self.episode_prefix,
                &self.ep_prefix,
            ] {
                next = re.replace(&next, "").trim().to_string();
            }
            if next == current {
                return current;
            }
            current = next;
        }
    }

    /// Normalize and fall back when the result is unusable (shorter than 3
    /// characters): first a title derived from the URL slug, then
    /// `"Episode <N>"` from the episode's position.
    pub fn resolve(&self, title: &str, url: &str, episode_number: u32) -> String {
        let cleaned = self.normalize(title);
        if cleaned.len() >= 3 {
            return cleaned;
        }
        if let Some(from_slug) = title_from_url_slug(url) {
            let cleaned_slug = self.normalize(&from_slug);
            if cleaned_slug.len() >= 3 {
                return cleaned_slug;
            }
        }
        format!("Episode {episode_number}")
    }
}
