//! Episode metadata extraction and reconciliation for JavaScript-rendered
//! anime streaming pages.
//!
//! The heart of this crate is the reconciliation pipeline: a rendered episode
//! listing contains many anchor elements pointing at the same watch page
//! (thumbnail link, title link, duration badge link, ...), each carrying a
//! different slice of the episode's metadata. The pipeline collapses those
//! into one record per episode with the best available title and a
//! non-blurred thumbnail, then partitions records into seasons across
//! navigation passes.
//!
//! # Example
//!
//! ```
//! use rust_anime_scraper::config::ExtractorConfig;
//! use rust_anime_scraper::extractor::EpisodeExtractor;
//! use rust_anime_scraper::page::HtmlPage;
//!
//! let html = r#"<div class="episode-card">
//!   <a href="https://www.crunchyroll.com/watch/GRDV0019R/to-the-future">
//!     S1 E1 - To the Future</a></div>"#;
//!
//! let config = ExtractorConfig::default();
//! let page = HtmlPage::parse(html);
//! let extractor = EpisodeExtractor::new(config.clone());
//! let episodes = extractor.extract_pass(page.episode_links(&config), 1);
//! assert_eq!(episodes[0].title, "To the Future");
//! ```

pub mod browser;
pub mod collector;
pub mod config;
pub mod dom;
pub mod error;
pub mod extractor;
pub mod helpers;
pub mod merge;
pub mod models;
pub mod page;
pub mod seasons;
pub mod thumbnail;
pub mod title;
