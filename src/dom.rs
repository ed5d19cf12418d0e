//! Point-in-time snapshots of the DOM elements the pipeline reasons about.
//!
//! The extractor never holds a live DOM handle. Whatever supplies the page
//! (a headless browser tab, a saved HTML file, a test fixture) materializes
//! each episode-like anchor into a [`LinkDescriptor`] carrying its ancestor
//! containers and their images, and the pipeline works on those values
//! alone. This keeps every stage pure and deterministic for a given
//! snapshot.

use crate::config::ExtractorConfig;

/// One anchor element pointing at a watch page, with the ancestry context
/// needed for thumbnail resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkDescriptor {
    /// Absolute href of the anchor.
    pub href: String,
    /// Visible text, whitespace-collapsed.
    pub text: String,
    /// Ancestor containers, nearest first.
    pub containers: Vec<ContainerSnapshot>,
}

/// An ancestor element of an anchor, with its images in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerSnapshot {
    /// Raw `class` attribute of the container element.
    pub class_attr: String,
    /// Text content of the container, whitespace-collapsed.
    pub text: String,
    pub images: Vec<ImageSnapshot>,
}

/// An `<img>` element with every attribute that may hold the real source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSnapshot {
    pub class_attr: String,
    pub src: Option<String>,
    pub data_src: Option<String>,
    pub data_lazy: Option<String>,
    pub data_original: Option<String>,
    pub srcset: Option<String>,
}

impl LinkDescriptor {
    /// Whether any ancestor looks likely to contain the episode's preview
    /// image: either its class carries a thumbnail-ish marker or it already
    /// holds images.
    pub fn has_thumbnail_bearing_container(&self, config: &ExtractorConfig) -> bool {
        self.containers.iter().any(|c| {
            c.has_marker_class(&config.container_class_markers) || !c.images.is_empty()
        })
    }
}

impl ContainerSnapshot {
    pub fn has_marker_class(&self, markers: &[String]) -> bool {
        let class = self.class_attr.to_lowercase();
        markers.iter().any(|m| class.contains(m.as_str()))
    }
}

impl ImageSnapshot {
    /// Source attributes in resolution-priority order: rendered src first,
    /// then the lazy-load attributes, then the first srcset entry.
    pub fn candidate_sources(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for src in [
            self.src.as_deref(),
            self.data_src.as_deref(),
            self.data_lazy.as_deref(),
            self.data_original.as_deref(),
        ]
        .into_iter()
        .flatten()
        {
            out.push(src);
        }
        if let Some(srcset) = self.srcset.as_deref() {
            if let Some(first) = srcset.split_whitespace().next() {
                out.push(first.trim_end_matches(','));
            }
        }
        out
    }

    pub fn has_marker_class(&self, markers: &[String]) -> bool {
        let class = self.class_attr.to_lowercase();
        markers.iter().any(|m| class.contains(m.as_str()))
    }
}
