use crate::browser::BrowserError;
use std::fmt;

/// Structural failures that abort a scraping run.
///
/// Per-episode resolution problems are never errors; they surface as a
/// `None` thumbnail or a synthesized title. Only the collaborators (browser
/// session, DOM access) can fail a run, and always with the season-pass
/// index at which they did.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("browser error: {0}")]
    Browser(#[from] BrowserError),

    #[error("DOM access failed: {0}")]
    Dom(String),

    #[error("season pass {pass} failed: {source}")]
    Pass {
        pass: u32,
        #[source]
        source: Box<ScrapeError>,
    },
}

impl ScrapeError {
    /// Wrap an error with the season pass it occurred in.
    pub fn in_pass(self, pass: u32) -> Self {
        ScrapeError::Pass {
            pass,
            source: Box::new(self),
        }
    }
}

/// Non-fatal conditions reported alongside a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeWarning {
    /// A season pass produced zero candidates. The caller may retry with a
    /// longer settle delay or treat it as end of data.
    EmptyPass { pass: u32 },

    /// Two passes yielded overlapping canonical URLs, usually because a
    /// season-navigation action silently no-opped. The output keeps each URL
    /// exactly once (last pass wins).
    OverlapDetected { pass: u32, urls: Vec<String> },
}

impl fmt::Display for ScrapeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeWarning::EmptyPass { pass } => {
                write!(f, "season pass {pass} yielded no episodes")
            }
            ScrapeWarning::OverlapDetected { pass, urls } => {
                write!(
                    f,
                    "season pass {pass} repeated {} URL(s) from earlier passes",
                    urls.len()
                )
            }
        }
    }
}
