//! The Page/DOM accessor: turn an HTML snapshot into [`LinkDescriptor`]s.
//!
//! Parsing happens once per snapshot with the `scraper` crate; the rest of
//! the pipeline only ever sees the extracted values. Ancestor enumeration
//! mirrors how the platform nests its episode rows: the nearest card-like
//! ancestor first, then up to three structural parents.

use crate::config::ExtractorConfig;
use crate::dom::{ContainerSnapshot, ImageSnapshot, LinkDescriptor};
use crate::helpers::clean_text;
use scraper::{ElementRef, Html, Selector};

/// How many plain ancestors (parent, grandparent, ...) are snapshotted per
/// anchor, matching the depth the thumbnail actually appears at.
const ANCESTOR_DEPTH: usize = 3;

/// A parsed, point-in-time HTML snapshot of the current page state.
pub struct HtmlPage {
    document: Html,
}

impl HtmlPage {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Enumerate every episode-like anchor with its ancestry context.
    ///
    /// Anchors without an href are skipped; filtering by content type is the
    /// collector's job, so every watch-ish link is returned as found.
    pub fn episode_links(&self, config: &ExtractorConfig) -> Vec<LinkDescriptor> {
        let anchor_selector = Selector::parse("a[href]").unwrap();
        let mut out = Vec::new();

        for anchor in self.document.select(&anchor_selector) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            if !href.contains(&config.watch_path_marker) {
                continue;
            }

            out.push(LinkDescriptor {
                href: href.to_string(),
                text: clean_text(&anchor.text().collect::<String>()),
                containers: self.containers_for(anchor, config),
            });
        }

        log::debug!("page: {} episode-like anchors", out.len());
        out
    }

    /// Container chain for an anchor: the nearest card-like ancestor (when
    /// one exists), then the direct ancestors nearest-first.
    fn containers_for(
        &self,
        anchor: ElementRef<'_>,
        config: &ExtractorConfig,
    ) -> Vec<ContainerSnapshot> {
        let mut elements: Vec<ElementRef<'_>> = Vec::new();

        if let Some(card) = self.card_ancestor(anchor, config) {
            elements.push(card);
        }

        // body/html see every episode's images at once and would bleed
        // thumbnails across rows.
        for ancestor in anchor
            .ancestors()
            .filter_map(ElementRef::wrap)
            .filter(|el| !matches!(el.value().name(), "body" | "html"))
            .take(ANCESTOR_DEPTH)
        {
            if !elements.iter().any(|e| e.id() == ancestor.id()) {
                elements.push(ancestor);
            }
        }

        elements.iter().map(|el| snapshot_container(*el)).collect()
    }

    /// Nearest ancestor whose class marks it as the episode card, or that
    /// declares `role="listitem"`.
    fn card_ancestor<'a>(
        &self,
        anchor: ElementRef<'a>,
        config: &ExtractorConfig,
    ) -> Option<ElementRef<'a>> {
        anchor
            .ancestors()
            .filter_map(ElementRef::wrap)
            .filter(|el| !matches!(el.value().name(), "body" | "html"))
            .find(|el| {
                let class = el.value().attr("class").unwrap_or("").to_lowercase();
                config
                    .episode_container_markers
                    .iter()
                    .any(|m| class.contains(m.as_str()))
                    || el.value().attr("role") == Some("listitem")
            })
    }
}

fn snapshot_container(element: ElementRef<'_>) -> ContainerSnapshot {
    let img_selector = Selector::parse("img").unwrap();
    let images = element
        .select(&img_selector)
        .map(|img| {
            let attr = |name: &str| img.value().attr(name).map(|v| v.to_string());
            ImageSnapshot {
                class_attr: img.value().attr("class").unwrap_or("").to_string(),
                src: attr("src"),
                data_src: attr("data-src"),
                data_lazy: attr("data-lazy"),
                data_original: attr("data-original"),
                srcset: attr("srcset"),
            }
        })
        .collect();

    ContainerSnapshot {
        class_attr: element.value().attr("class").unwrap_or("").to_string(),
        text: clean_text(&element.text().collect::<String>()),
        images,
    }
}
