use std::time::Duration;

/// Configuration for browser instances.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run browser in headless mode.
    pub headless: bool,

    /// Browser window size.
    pub window_size: (u32, u32),

    /// Navigation timeout in seconds.
    pub timeout_seconds: u64,

    /// Keep image loading enabled; thumbnails only get their final src once
    /// the image components render.
    pub load_images: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_size: (1920, 1080),
            timeout_seconds: 30,
            load_images: true,
        }
    }
}

impl BrowserConfig {
    /// Configuration for debugging (visible browser window).
    pub fn debug_mode() -> Self {
        Self {
            headless: false,
            ..Self::default()
        }
    }

    /// Get timeout as Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
