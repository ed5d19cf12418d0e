use super::config::BrowserConfig;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::sync::Arc;

/// Owns the Chrome process and hands out tabs. One manager is shared across
/// an entire scraping run; tabs are cheap, the browser is not.
pub struct BrowserManager {
    browser: Arc<Browser>,
    config: BrowserConfig,
}

impl BrowserManager {
    pub fn new(config: BrowserConfig) -> Result<Self, BrowserError> {
        let launch_options = Self::build_launch_options(&config)?;

        let browser = Browser::new(launch_options)
            .map_err(|e| BrowserError::Initialization(e.to_string()))?;

        Ok(Self {
            browser: Arc::new(browser),
            config,
        })
    }

    fn build_launch_options(config: &BrowserConfig) -> Result<LaunchOptions, BrowserError> {
        LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.window_size.0, config.window_size.1)))
            .build()
            .map_err(|e| BrowserError::Configuration(e.to_string()))
    }

    pub fn new_tab(&self) -> Result<Arc<Tab>, BrowserError> {
        self.browser
            .new_tab()
            .map_err(|e| BrowserError::TabCreation(e.to_string()))
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }
}

/// Errors from the browser collaborators.
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("browser initialization failed: {0}")]
    Initialization(String),

    #[error("browser configuration error: {0}")]
    Configuration(String),

    #[error("tab creation failed: {0}")]
    TabCreation(String),

    #[error("navigation error: {0}")]
    Navigation(String),

    #[error("timeout waiting for: {0}")]
    Timeout(String),

    #[error("JavaScript execution error: {0}")]
    JavaScript(String),

    #[error("HTML extraction error: {0}")]
    HtmlExtraction(String),
}
