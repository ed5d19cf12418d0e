//! The per-pass pipeline: candidates in, reconciled episodes out.
//!
//! One invocation corresponds to one season's rendered DOM state. The season
//! number is supplied by the caller (ultimately the pass index); the pass
//! itself never infers it from page text.

use crate::collector::collect_candidates;
use crate::config::ExtractorConfig;
use crate::dom::LinkDescriptor;
use crate::helpers::{episode_id_from_url, extract_duration, extract_episode_number};
use crate::merge::{merge_candidates, EpisodeCandidate};
use crate::models::Episode;
use crate::thumbnail::resolve_thumbnail;
use crate::title::TitleNormalizer;
use std::collections::HashSet;

/// Runs the collection, merge and resolution stages for one season pass.
#[derive(Debug)]
pub struct EpisodeExtractor {
    config: ExtractorConfig,
    normalizer: TitleNormalizer,
}

impl EpisodeExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            normalizer: TitleNormalizer::new(),
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract the episodes visible in one page snapshot, all carrying the
    /// supplied season number. Output is ordered by episode number and
    /// unique in both URL and (season, episode) within the pass.
    pub fn extract_pass(&self, links: Vec<LinkDescriptor>, season_number: u32) -> Vec<Episode> {
        let candidates = collect_candidates(links, &self.config);
        let merged = merge_candidates(candidates, &self.config);
        log::info!(
            "pass S{}: {} unique episode candidates",
            season_number,
            merged.len()
        );

        let mut used_numbers: HashSet<u32> = HashSet::new();
        let mut episodes: Vec<Episode> = Vec::with_capacity(merged.len());

        for (position, candidate) in merged.iter().enumerate() {
            let position_number = (position + 1) as u32;
            let episode_number =
                self.assign_number(candidate, position_number, &mut used_numbers);

            let title = self
                .normalizer
                .resolve(&candidate.text, &candidate.href, episode_number);
            let thumbnail = resolve_thumbnail(candidate, &self.config);
            let duration = self.resolve_duration(candidate);

            episodes.push(Episode {
                id: episode_id_from_url(&candidate.href),
                title,
                episode_number,
                season_number,
                url: candidate.href.clone(),
                thumbnail,
                duration,
            });
        }

        episodes.sort_by_key(|e| e.episode_number);
        episodes
    }

    /// Explicit indicator wins over position, but a collision with an
    /// already-assigned number falls back to the next free position so the
    /// (season, episode) pair stays unique.
    fn assign_number(
        &self,
        candidate: &EpisodeCandidate,
        position_number: u32,
        used: &mut HashSet<u32>,
    ) -> u32 {
        let explicit = extract_episode_number(&[candidate.text.as_str(), candidate.href.as_str()]);
        let mut number = explicit.unwrap_or(position_number);
        if used.contains(&number) {
            number = position_number;
            while used.contains(&number) {
                number += 1;
            }
        }
        used.insert(number);
        number
    }

    fn resolve_duration(&self, candidate: &EpisodeCandidate) -> Option<String> {
        let mut sources: Vec<&str> = vec![candidate.text.as_str()];
        for link in
            std::iter::once(&candidate.primary).chain(candidate.alternates.iter())
        {
            sources.push(link.text.as_str());
            for container in &link.containers {
                sources.push(container.text.as_str());
            }
        }
        extract_duration(&sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ContainerSnapshot, ImageSnapshot};

    fn link(href: &str, text: &str) -> LinkDescriptor {
        LinkDescriptor {
            href: href.to_string(),
            text: text.to_string(),
            containers: vec![ContainerSnapshot {
                class_attr: "episode-card".to_string(),
                text: text.to_string(),
                images: vec![],
            }],
        }
    }

    fn thumb_link(href: &str, src: &str) -> LinkDescriptor {
        LinkDescriptor {
            href: href.to_string(),
            text: String::new(),
            containers: vec![ContainerSnapshot {
                class_attr: "playable-card".to_string(),
                text: String::new(),
                images: vec![ImageSnapshot {
                    class_attr: "playable-thumbnail".to_string(),
                    src: Some(src.to_string()),
                    ..Default::default()
                }],
            }],
        }
    }

    #[test]
    fn test_duplicate_anchor_contributes_thumbnail() {
        let extractor = EpisodeExtractor::new(ExtractorConfig::default());
        let url = "https://www.crunchyroll.com/watch/G1/intro";
        let clean = "https://imgsrv.crunchyroll.com/cdn/G1/thumb.jpg";

        let episodes = extractor.extract_pass(
            vec![link(url, "S1 E1 - Intro and more"), thumb_link(url, clean)],
            1,
        );

        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].title, "Intro and more");
        assert_eq!(episodes[0].thumbnail.as_deref(), Some(clean));
        assert_eq!(episodes[0].id, "G1");
    }

    #[test]
    fn test_explicit_numbers_win_over_position() {
        let extractor = EpisodeExtractor::new(ExtractorConfig::default());
        let episodes = extractor.extract_pass(
            vec![
                link("https://x/watch/A/a", "S1 E12 - Later episode"),
                link("https://x/watch/B/b", "S1 E3 - Early episode"),
            ],
            1,
        );
        let numbers: Vec<u32> = episodes.iter().map(|e| e.episode_number).collect();
        assert_eq!(numbers, vec![3, 12]);
    }

    #[test]
    fn test_position_numbering_without_indicators() {
        let extractor = EpisodeExtractor::new(ExtractorConfig::default());
        let episodes = extractor.extract_pass(
            vec![
                link("https://x/watch/AAA/first-one", "An opening - something"),
                link("https://x/watch/BBB/second-one", "The middle - something"),
                link("https://x/watch/CCC/third-one", "Closing act - something"),
            ],
            2,
        );
        let numbers: Vec<u32> = episodes.iter().map(|e| e.episode_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(episodes.iter().all(|e| e.season_number == 2));
    }

    #[test]
    fn test_colliding_explicit_numbers_stay_unique() {
        let extractor = EpisodeExtractor::new(ExtractorConfig::default());
        let episodes = extractor.extract_pass(
            vec![
                link("https://x/watch/A/a", "S1 E5 - First claimant"),
                link("https://x/watch/B/b", "S1 E5 - Second claimant"),
            ],
            1,
        );
        assert_eq!(episodes.len(), 2);
        let mut numbers: Vec<u32> = episodes.iter().map(|e| e.episode_number).collect();
        numbers.sort();
        numbers.dedup();
        assert_eq!(numbers.len(), 2);
    }

    #[test]
    fn test_duration_extracted_from_container_text() {
        let extractor = EpisodeExtractor::new(ExtractorConfig::default());
        let mut l = link("https://x/watch/A/a", "S1 E1 - With a badge");
        l.containers[0].text = "S1 E1 - With a badge 23m".to_string();
        let episodes = extractor.extract_pass(vec![l], 1);
        assert_eq!(episodes[0].duration.as_deref(), Some("23m"));
    }

    #[test]
    fn test_empty_pass_yields_empty_output() {
        let extractor = EpisodeExtractor::new(ExtractorConfig::default());
        assert!(extractor.extract_pass(vec![], 1).is_empty());
    }
}
