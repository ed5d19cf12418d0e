//! Deduplication and merge: collapse the anchors that point at the same
//! watch page into one candidate per episode.
//!
//! A rendered episode row typically produces three or four anchors with the
//! same href: the thumbnail link (no text, but the image lives in its
//! ancestry), the title link (good text, no image nearby) and assorted
//! overlay links. Naively keeping the last one seen loses whichever ancestry
//! held the thumbnail, so merging keeps the best title, promotes the
//! descriptor with a thumbnail-bearing ancestry to primary, and retains every
//! other representation as an alternate for the resolver's fallback chain.

use crate::config::ExtractorConfig;
use crate::dom::LinkDescriptor;
use regex::Regex;
use std::collections::HashMap;

/// How trustworthy a link's visible text is as an episode title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TitleQuality {
    /// Empty, a duration badge, a bare number, or a play-button placeholder.
    Poor,
    /// Title-shaped but short (over 10 chars).
    Good,
    /// Title-shaped and long enough to be the real episode title (over 15).
    Better,
}

/// One episode after deduplication, before thumbnail/title resolution.
#[derive(Debug, Clone)]
pub struct EpisodeCandidate {
    /// Canonical watch URL; unique within a pass after merging.
    pub href: String,
    /// Best text seen so far for this URL.
    pub text: String,
    pub quality: TitleQuality,
    /// The representation whose ancestry is most likely to hold the
    /// thumbnail.
    pub primary: LinkDescriptor,
    /// Every other representation of the same episode, in arrival order.
    pub alternates: Vec<LinkDescriptor>,
}

/// Classify link text per the title-shape rules: long enough, carries an
/// episode marker or hyphen, and is not a duration badge, bare number or
/// placeholder word.
pub fn classify_title(text: &str, config: &ExtractorConfig) -> TitleQuality {
    let duration_only = Regex::new(r"^\d+m$").expect("duration pattern");
    let number_only = Regex::new(r"^\d+$").expect("number pattern");

    let lower = text.to_lowercase();
    let title_shaped = !text.is_empty()
        && (text.contains('E') || text.contains("Ep") || text.contains('-'))
        && !duration_only.is_match(text)
        && !number_only.is_match(text)
        && !config
            .placeholder_markers
            .iter()
            .any(|w| lower.contains(w.as_str()));

    if title_shaped && text.len() > 15 {
        TitleQuality::Better
    } else if title_shaped && text.len() > 10 {
        TitleQuality::Good
    } else {
        TitleQuality::Poor
    }
}

/// Group candidates by canonical URL, first-seen order preserved.
///
/// No duplicate is discarded: every extra descriptor for a URL either becomes
/// the new primary (when it alone has a thumbnail-bearing ancestry) or an
/// alternate. The result is arrival-order independent in what it guarantees:
/// best title wins and the thumbnail-bearing representation is primary.
pub fn merge_candidates(
    links: Vec<LinkDescriptor>,
    config: &ExtractorConfig,
) -> Vec<EpisodeCandidate> {
    let mut order: Vec<EpisodeCandidate> = Vec::new();
    let mut by_url: HashMap<String, usize> = HashMap::new();

    for link in links {
        let quality = classify_title(&link.text, config);
        match by_url.get(&link.href).copied() {
            None => {
                by_url.insert(link.href.clone(), order.len());
                order.push(EpisodeCandidate {
                    href: link.href.clone(),
                    text: link.text.clone(),
                    quality,
                    primary: link,
                    alternates: Vec::new(),
                });
            }
            Some(idx) => {
                let existing = &mut order[idx];

                let stored_lower = existing.text.to_lowercase();
                let placeholder_stored = existing.text.is_empty()
                    || config
                        .placeholder_markers
                        .iter()
                        .any(|w| stored_lower.contains(w.as_str()));

                let replace_title = (quality == TitleQuality::Better
                    && existing.quality != TitleQuality::Better)
                    || (quality >= TitleQuality::Good && placeholder_stored)
                    || (link.text.len() > existing.text.len() && quality >= TitleQuality::Good);

                if replace_title {
                    log::debug!(
                        "merge: title for {} upgraded: {:?} -> {:?}",
                        existing.href,
                        existing.text,
                        link.text
                    );
                    existing.text = link.text.clone();
                    existing.quality = quality;
                }

                // Keep the representation with a thumbnail-bearing ancestry
                // as primary; the displaced one stays reachable as an
                // alternate.
                let new_bears = link.has_thumbnail_bearing_container(config);
                let stored_bears = existing.primary.has_thumbnail_bearing_container(config);
                if new_bears && !stored_bears {
                    let displaced = std::mem::replace(&mut existing.primary, link);
                    existing.alternates.push(displaced);
                } else {
                    existing.alternates.push(link);
                }
            }
        }
    }

    log::debug!("merge: {} unique episodes", order.len());
    order
}
