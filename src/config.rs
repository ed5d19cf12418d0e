use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Markers and limits driving candidate filtering, merge classification and
/// thumbnail resolution.
///
/// Defaults match the Crunchyroll markup the pipeline was built against;
/// every field can be overridden through `config.toml` so selector drift on
/// the site does not require a rebuild.
#[derive(Debug, Deserialize, Clone)]
pub struct ExtractorConfig {
    /// Substring identifying an episode watch URL.
    #[serde(default = "default_watch_marker")]
    pub watch_path_marker: String,

    /// URL substrings for non-episode content (music videos, movies,
    /// concerts) that must be filtered out.
    #[serde(default = "default_excluded_markers")]
    pub excluded_path_markers: Vec<String>,

    /// Lowercased words that mark link text as a play-button placeholder
    /// rather than a title.
    #[serde(default = "default_placeholder_markers")]
    pub placeholder_markers: Vec<String>,

    /// Class-name fragments unique to the platform's thumbnail image
    /// components.
    #[serde(default = "default_thumbnail_class_markers")]
    pub thumbnail_class_markers: Vec<String>,

    /// Class-name fragments marking an ancestor as thumbnail-bearing.
    #[serde(default = "default_container_class_markers")]
    pub container_class_markers: Vec<String>,

    /// Class-name fragments identifying the episode card ancestor.
    #[serde(default = "default_episode_container_markers")]
    pub episode_container_markers: Vec<String>,

    /// Substrings an image URL must contain to belong to the platform's
    /// media domain.
    #[serde(default = "default_media_host_markers")]
    pub media_host_markers: Vec<String>,

    /// Query-string fragment marking a blurred image variant.
    #[serde(default = "default_blur_marker")]
    pub blur_marker: String,

    /// URL substrings marking placeholder/icon/logo images.
    #[serde(default = "default_rejected_image_markers")]
    pub rejected_image_markers: Vec<String>,

    /// Base URL for resolving relative hrefs.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upper bound on season passes, guarding against a navigation
    /// collaborator that never reports exhaustion.
    #[serde(default = "default_max_seasons")]
    pub max_seasons: u32,

    /// Delay granted to the page after a season navigation, in milliseconds.
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
}

fn default_watch_marker() -> String {
    "/watch/".to_string()
}

fn default_excluded_markers() -> Vec<String> {
    vec![
        "/musicvideo/".to_string(),
        "/movie/".to_string(),
        "/concert/".to_string(),
    ]
}

fn default_placeholder_markers() -> Vec<String> {
    vec!["lecture".to_string(), "play".to_string()]
}

fn default_thumbnail_class_markers() -> Vec<String> {
    vec!["playable-thumbnail".to_string(), "content-image".to_string()]
}

fn default_container_class_markers() -> Vec<String> {
    vec![
        "playable".to_string(),
        "thumbnail".to_string(),
        "image".to_string(),
    ]
}

fn default_episode_container_markers() -> Vec<String> {
    vec![
        "episode".to_string(),
        "card".to_string(),
        "item".to_string(),
        "playable".to_string(),
    ]
}

fn default_media_host_markers() -> Vec<String> {
    vec!["crunchyroll".to_string(), "imgsrv".to_string()]
}

fn default_blur_marker() -> String {
    "blur=".to_string()
}

fn default_rejected_image_markers() -> Vec<String> {
    vec![
        "placeholder".to_string(),
        "icon".to_string(),
        "logo".to_string(),
    ]
}

fn default_base_url() -> String {
    "https://www.crunchyroll.com".to_string()
}

fn default_max_seasons() -> u32 {
    10
}

fn default_settle_ms() -> u64 {
    2500
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        // serde(default) and Default must agree; build through an empty doc.
        toml::from_str("").expect("empty config deserializes from defaults")
    }
}

impl ExtractorConfig {
    /// Load from `config.toml` in the working directory, falling back to
    /// defaults when the file is missing or malformed.
    pub fn load() -> Self {
        let path = Path::new("config.toml");
        if path.exists() {
            if let Ok(content) = fs::read_to_string(path) {
                match toml::from_str::<ExtractorConfig>(&content) {
                    Ok(cfg) => return cfg,
                    Err(e) => log::warn!("config.toml invalid, using defaults: {}", e),
                }
            }
        }
        Self::default()
    }
}
