//! End-to-end reconciliation over HTML fixtures: parse a snapshot the way a
//! live run would, then check the merged, season-partitioned output.

use rust_anime_scraper::config::ExtractorConfig;
use rust_anime_scraper::dom::LinkDescriptor;
use rust_anime_scraper::error::{ScrapeError, ScrapeWarning};
use rust_anime_scraper::extractor::EpisodeExtractor;
use rust_anime_scraper::page::HtmlPage;
use rust_anime_scraper::seasons::{SeasonPartitioner, SeriesSource};
use std::collections::HashSet;

const CLEAN_THUMB: &str = "https://imgsrv.crunchyroll.com/cdn/G1/full.jpg";
const BLURRED_THUMB: &str = "https://imgsrv.crunchyroll.com/cdn/G1/full.jpg?blur=30";

/// A listing row the way the platform renders it: one text anchor with the
/// title and duration, one separate thumbnail anchor for the same URL.
fn season_one_html() -> String {
    format!(
        r#"
        <html><body>
        <div role="listitem" class="playable-card">
          <a href="https://www.crunchyroll.com/watch/GRDV0019R/to-the-future">
            <img class="playable-thumbnail" src="{BLURRED_THUMB}">
            <img class="playable-thumbnail" src="{CLEAN_THUMB}">
          </a>
        </div>
        <div class="episode-row">
          <a href="https://www.crunchyroll.com/watch/GRDV0019R/to-the-future">S1 E1 - To the Future</a>
          <span>23m</span>
        </div>
        <div class="episode-row">
          <a href="https://www.crunchyroll.com/watch/GX9UQ5NW/plus-ultra">S1 E2 - Plus Ultra again</a>
        </div>
        <a href="https://www.crunchyroll.com/watch/musicvideo/MV1/opening">Opening theme</a>
        </body></html>
        "#
    )
}

struct HtmlPasses {
    passes: Vec<String>,
    current: usize,
}

impl SeriesSource for HtmlPasses {
    fn episode_links(&mut self) -> Result<Vec<LinkDescriptor>, ScrapeError> {
        let html = &self.passes[self.current];
        Ok(HtmlPage::parse(html).episode_links(&ExtractorConfig::default()))
    }

    fn advance_to_next_season(&mut self) -> Result<bool, ScrapeError> {
        if self.current + 1 < self.passes.len() {
            self.current += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

fn extractor() -> EpisodeExtractor {
    EpisodeExtractor::new(ExtractorConfig::default())
}

#[test]
fn duplicate_anchors_merge_into_one_episode_with_thumbnail() {
    let config = ExtractorConfig::default();
    let page = HtmlPage::parse(&season_one_html());
    let episodes = extractor().extract_pass(page.episode_links(&config), 1);

    assert_eq!(episodes.len(), 2);
    let first = &episodes[0];
    assert_eq!(first.episode_number, 1);
    assert_eq!(first.title, "To the Future");
    assert_eq!(first.id, "GRDV0019R");
    // The thumbnail came from the duplicate anchor's ancestry, and the
    // blurred variant lost to the later clean one.
    assert_eq!(first.thumbnail.as_deref(), Some(CLEAN_THUMB));
    // The duration badge sits next to the text anchor, which became an
    // alternate representation.
    assert_eq!(first.duration.as_deref(), Some("23m"));
}

#[test]
fn non_episode_content_is_filtered() {
    let config = ExtractorConfig::default();
    let page = HtmlPage::parse(&season_one_html());
    let episodes = extractor().extract_pass(page.episode_links(&config), 1);

    assert!(episodes.iter().all(|e| !e.url.contains("/musicvideo/")));
}

#[test]
fn single_season_run_when_navigation_exhausts_immediately() {
    let mut source = HtmlPasses {
        passes: vec![season_one_html()],
        current: 0,
    };
    let partitioner = SeasonPartitioner::new(extractor());
    let outcome = partitioner.run(&mut source).unwrap();

    assert_eq!(outcome.collection.seasons.len(), 1);
    assert_eq!(outcome.collection.seasons[0].season_number, 1);
    assert!(outcome.warnings.is_empty());
}

#[test]
fn repeated_pass_triggers_overlap_warning_without_duplicates() {
    let mut source = HtmlPasses {
        passes: vec![season_one_html(), season_one_html()],
        current: 0,
    };
    let partitioner = SeasonPartitioner::new(extractor());
    let outcome = partitioner.run(&mut source).unwrap();

    assert!(matches!(
        outcome.warnings.as_slice(),
        [ScrapeWarning::OverlapDetected { pass: 2, .. }]
    ));

    let urls: Vec<&str> = outcome.collection.episodes().map(|e| e.url.as_str()).collect();
    let unique: HashSet<&&str> = urls.iter().collect();
    assert_eq!(urls.len(), unique.len());
    assert_eq!(outcome.collection.total_episodes(), 2);
}

#[test]
fn two_distinct_seasons_partition_by_pass_order() {
    let season_two = r#"
        <html><body>
        <div class="episode-row">
          <a href="https://www.crunchyroll.com/watch/S2AAA/new-arc">S2 E1 - A brand new arc</a>
        </div>
        <div class="episode-row">
          <a href="https://www.crunchyroll.com/watch/S2BBB/deeper">S2 E2 - Deeper and deeper</a>
        </div>
        </body></html>
    "#
    .to_string();

    let mut source = HtmlPasses {
        passes: vec![season_one_html(), season_two],
        current: 0,
    };
    let partitioner = SeasonPartitioner::new(extractor());
    let outcome = partitioner.run(&mut source).unwrap();

    assert_eq!(outcome.collection.seasons.len(), 2);
    assert_eq!(outcome.collection.seasons[1].season_number, 2);
    assert_eq!(outcome.collection.seasons[1].episodes[0].title, "A brand new arc");

    // Global invariants
    let mut keys = HashSet::new();
    let mut urls = HashSet::new();
    for e in outcome.collection.episodes() {
        assert!(keys.insert((e.season_number, e.episode_number)));
        assert!(urls.insert(e.url.clone()));
    }
}

#[test]
fn json_output_surface() {
    let mut source = HtmlPasses {
        passes: vec![season_one_html()],
        current: 0,
    };
    let partitioner = SeasonPartitioner::new(extractor());
    let outcome = partitioner.run(&mut source).unwrap();

    let json = serde_json::to_value(&outcome.collection).unwrap();
    let season = &json[0];
    assert_eq!(season["seasonNumber"], 1);
    assert_eq!(season["episodeCount"], 2);
    let episode = &season["episodes"][0];
    assert_eq!(episode["id"], "GRDV0019R");
    assert_eq!(episode["episodeNumber"], 1);
    assert_eq!(episode["url"], "https://www.crunchyroll.com/watch/GRDV0019R/to-the-future");
}

#[test]
fn blurred_primary_falls_back_to_alternate_clean_image() {
    // Primary card only renders the blurred preview; a second representation
    // of the same episode holds the final image.
    let html = format!(
        r#"
        <html><body>
        <div role="listitem" class="playable-card">
          <a href="https://www.crunchyroll.com/watch/G77/shadows">
            <img class="playable-thumbnail" src="{BLURRED_THUMB}">
          </a>
        </div>
        <div class="episode-card">
          <a href="https://www.crunchyroll.com/watch/G77/shadows">S1 E4 - Full of Shadows</a>
          <img class="content-image" src="{CLEAN_THUMB}">
        </div>
        </body></html>
        "#
    );

    let config = ExtractorConfig::default();
    let page = HtmlPage::parse(&html);
    let episodes = extractor().extract_pass(page.episode_links(&config), 1);

    assert_eq!(episodes.len(), 1);
    assert_eq!(episodes[0].thumbnail.as_deref(), Some(CLEAN_THUMB));
}
