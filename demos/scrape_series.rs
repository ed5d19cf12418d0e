//! Live extraction demo: reconcile every season of a real series page.
//!
//! Requires a local Chrome/Chromium install. Run with:
//!
//! ```sh
//! RUST_LOG=info cargo run --example scrape_series -- <series-url>
//! ```

use rust_anime_scraper::browser::{BrowserConfig, BrowserManager, Session};
use rust_anime_scraper::config::ExtractorConfig;
use rust_anime_scraper::extractor::EpisodeExtractor;
use rust_anime_scraper::seasons::SeasonPartitioner;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://www.crunchyroll.com/series/GYQ4MKDZ6/fire-force".to_string());

    let config = ExtractorConfig::load();
    let manager = BrowserManager::new(BrowserConfig::default())?;
    let mut session = Session::open(&manager, config.clone())?;
    session.navigate_to_series(&url)?;

    let partitioner = SeasonPartitioner::new(EpisodeExtractor::new(config));
    let outcome = partitioner.run(&mut session)?;

    for warning in &outcome.warnings {
        eprintln!("warning: {warning}");
    }
    println!("{}", serde_json::to_string_pretty(&outcome.collection)?);
    Ok(())
}
