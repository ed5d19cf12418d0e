//! Browser collaborators for live extraction.
//!
//! The reconciliation pipeline itself is pure; this module supplies its two
//! external contracts when running against the real site: a page source
//! (snapshot the rendered HTML of the current season) and a navigation
//! driver (click the "next season" control and wait for the DOM to settle).
//! Everything is built on headless Chrome.
//!
//! # Example
//!
//! ```no_run
//! use rust_anime_scraper::browser::{BrowserConfig, BrowserManager, Session};
//! use rust_anime_scraper::config::ExtractorConfig;
//! use rust_anime_scraper::extractor::EpisodeExtractor;
//! use rust_anime_scraper::seasons::SeasonPartitioner;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExtractorConfig::default();
//! let manager = BrowserManager::new(BrowserConfig::default())?;
//! let mut session = Session::open(&manager, config.clone())?;
//! session.navigate_to_series("https://www.crunchyroll.com/series/GYQ4MKDZ6/fire-force")?;
//!
//! let partitioner = SeasonPartitioner::new(EpisodeExtractor::new(config));
//! let outcome = partitioner.run(&mut session)?;
//! println!("{} episodes", outcome.collection.total_episodes());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod manager;
pub mod session;

pub use config::BrowserConfig;
pub use manager::{BrowserError, BrowserManager};
pub use session::Session;
