//! Thumbnail resolution over a merged candidate's container ancestry.
//!
//! The listing renders each thumbnail twice: a blurred low-resolution
//! preview first, then the real image later in the same node. The resolver
//! therefore prefers the *last* marker-class image in a container and
//! rejects any URL carrying the blur query marker. When the primary
//! ancestry yields nothing, the alternates retained by the merge engine are
//! searched with the same rules, so a clean image reachable through any
//! representation is always found before giving up.

use crate::config::ExtractorConfig;
use crate::dom::{ContainerSnapshot, ImageSnapshot, LinkDescriptor};
use crate::merge::EpisodeCandidate;
use regex::Regex;

/// Resolve the best thumbnail for a merged candidate. `None` is a valid
/// outcome, never an error; a blurred or placeholder image is never
/// returned.
pub fn resolve_thumbnail(candidate: &EpisodeCandidate, config: &ExtractorConfig) -> Option<String> {
    if let Some(url) = resolve_from_link(&candidate.primary, config) {
        return Some(url);
    }
    for alternate in &candidate.alternates {
        if let Some(url) = resolve_from_link(alternate, config) {
            log::debug!("thumbnail: {} resolved via alternate link", candidate.href);
            return Some(url);
        }
    }
    log::debug!("thumbnail: none found for {}", candidate.href);
    None
}

fn resolve_from_link(link: &LinkDescriptor, config: &ExtractorConfig) -> Option<String> {
    // Stage 1: marker-class images, nearest container first, last image in
    // the container preferred.
    for container in &link.containers {
        if let Some(url) = marker_class_image(container, config) {
            return Some(url);
        }
    }
    // Stage 2: any acceptable image, all source attributes considered.
    for container in &link.containers {
        if let Some(url) = any_clean_image(container, config) {
            return Some(url);
        }
    }
    None
}

fn marker_class_image(container: &ContainerSnapshot, config: &ExtractorConfig) -> Option<String> {
    let last_match = container
        .images
        .iter()
        .filter(|img| img.has_marker_class(&config.thumbnail_class_markers))
        .last()?;

    for src in last_match.candidate_sources() {
        if on_media_host(src, config) && !is_blurred(src, config) {
            return Some(src.trim().to_string());
        }
    }
    None
}

fn any_clean_image(container: &ContainerSnapshot, config: &ExtractorConfig) -> Option<String> {
    for img in &container.images {
        if let Some(url) = clean_source(img, config) {
            return Some(url);
        }
    }
    None
}

fn clean_source(img: &ImageSnapshot, config: &ExtractorConfig) -> Option<String> {
    let extension = Regex::new(r"(?i)\.(jpg|jpeg|png|webp)").expect("image extension pattern");
    for src in img.candidate_sources() {
        if on_media_host(src, config)
            && !is_blurred(src, config)
            && !config
                .rejected_image_markers
                .iter()
                .any(|m| src.contains(m.as_str()))
            && extension.is_match(src)
        {
            return Some(src.trim().to_string());
        }
    }
    None
}

fn on_media_host(src: &str, config: &ExtractorConfig) -> bool {
    config
        .media_host_markers
        .iter()
        .any(|m| src.contains(m.as_str()))
}

fn is_blurred(src: &str, config: &ExtractorConfig) -> bool {
    src.contains(&config.blur_marker)
}
