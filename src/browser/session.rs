use super::manager::{BrowserError, BrowserManager};
use crate::config::ExtractorConfig;
use crate::dom::LinkDescriptor;
use crate::error::ScrapeError;
use crate::page::HtmlPage;
use crate::seasons::SeriesSource;
use headless_chrome::Tab;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// One browser tab bound to a series page, acting as both the page source
/// and the season-navigation driver for the partitioner.
///
/// Exclusive access during a pass is guaranteed by ownership: the
/// partitioner holds `&mut Session` for the whole run.
pub struct Session {
    tab: Arc<Tab>,
    config: ExtractorConfig,
    timeout: Duration,
}

impl Session {
    pub fn open(manager: &BrowserManager, config: ExtractorConfig) -> Result<Self, BrowserError> {
        let tab = manager.new_tab()?;
        Ok(Self {
            tab,
            config,
            timeout: manager.config().timeout(),
        })
    }

    /// Navigate to a series page and wait until episode anchors are
    /// rendered.
    pub fn navigate_to_series(&mut self, url: &str) -> Result<(), BrowserError> {
        log::info!("navigating to series page {}", url);
        self.tab
            .navigate_to(url)
            .map_err(|e| BrowserError::Navigation(format!("navigate to {url}: {e}")))?;
        self.tab
            .wait_until_navigated()
            .map_err(|e| BrowserError::Navigation(format!("navigation timeout for {url}: {e}")))?;

        let selector = format!("a[href*=\"{}\"]", self.config.watch_path_marker);
        self.wait_for_selector(&selector)?;
        self.settle();
        Ok(())
    }

    /// Snapshot the rendered HTML of the current page state.
    pub fn snapshot_html(&self) -> Result<String, BrowserError> {
        self.tab
            .get_content()
            .map_err(|e| BrowserError::HtmlExtraction(e.to_string()))
    }

    fn wait_for_selector(&self, selector: &str) -> Result<(), BrowserError> {
        let start = Instant::now();
        let script = format!(
            r#"document.querySelector('{}') !== null"#,
            selector.replace('\'', "\\'")
        );

        loop {
            if start.elapsed() > self.timeout {
                return Err(BrowserError::Timeout(format!("selector {selector}")));
            }
            if let Ok(result) = self.tab.evaluate(&script, false) {
                if result.value.and_then(|v| v.as_bool()) == Some(true) {
                    return Ok(());
                }
            }
            std::thread::sleep(Duration::from_millis(100));
        }
    }

    /// The settle contract: one uniform delay after any navigation action,
    /// long enough for the listing to re-render.
    fn settle(&self) {
        std::thread::sleep(Duration::from_millis(self.config.settle_ms));
    }

    /// Click the "next season" control when present and enabled.
    fn click_next_season(&self) -> Result<bool, BrowserError> {
        // Both locales the platform serves us in; the disabled attribute or
        // class marks the last season.
        let script = r#"
            (function() {
                const buttons = document.querySelectorAll('button, [role="button"]');
                for (const btn of buttons) {
                    const text = (btn.textContent || '').trim();
                    if (text.includes('Saison suivante') || text.includes('Next Season') ||
                        text.includes('Suivante')) {
                        if (btn.hasAttribute('disabled') || btn.classList.contains('disabled')) {
                            return false;
                        }
                        btn.click();
                        return true;
                    }
                }
                return false;
            })()
        "#;

        let result = self
            .tab
            .evaluate(script, false)
            .map_err(|e| BrowserError::JavaScript(format!("next-season click: {e}")))?;
        Ok(result.value.and_then(|v| v.as_bool()).unwrap_or(false))
    }
}

impl SeriesSource for Session {
    fn episode_links(&mut self) -> Result<Vec<LinkDescriptor>, ScrapeError> {
        let html = self.snapshot_html()?;
        let page = HtmlPage::parse(&html);
        Ok(page.episode_links(&self.config))
    }

    fn advance_to_next_season(&mut self) -> Result<bool, ScrapeError> {
        if self.click_next_season()? {
            log::info!("advanced to next season, settling");
            self.settle();
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
