//! Candidate collection: the first pipeline stage.
//!
//! Takes the raw episode-like anchors found on the page and keeps only the
//! ones that actually point at a regular episode watch page, with their
//! visible text cleaned up. Music videos, movies and concerts share the
//! listing markup but are not episodes.

use crate::config::ExtractorConfig;
use crate::dom::LinkDescriptor;
use crate::helpers::{clean_text, normalize_url};

/// Filter raw link descriptors down to episode candidates.
///
/// An empty result is valid and simply means the current page state shows no
/// episodes.
pub fn collect_candidates(
    links: Vec<LinkDescriptor>,
    config: &ExtractorConfig,
) -> Vec<LinkDescriptor> {
    let total = links.len();
    let out: Vec<LinkDescriptor> = links
        .into_iter()
        .filter(|link| !link.href.is_empty())
        .map(|mut link| {
            link.href = normalize_url(&link.href, &config.base_url);
            link.text = clean_text(&link.text);
            link
        })
        .filter(|link| is_episode_url(&link.href, config))
        .collect();
    log::debug!("collector: {} of {} links are episode candidates", out.len(), total);
    out
}

fn is_episode_url(href: &str, config: &ExtractorConfig) -> bool {
    href.contains(&config.watch_path_marker)
        && !config
            .excluded_path_markers
            .iter()
            .any(|marker| href.contains(marker.as_str()))
}
