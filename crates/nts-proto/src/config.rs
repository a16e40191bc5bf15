use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::platform;
use super::streams;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub streams: StreamsConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub art: ArtConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Upstream endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_live_url")]
    pub live_url: String,
    #[serde(default = "default_mixtapes_url")]
    pub mixtapes_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Live stream URL per broadcast channel, channel 1 first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamsConfig {
    #[serde(default = "default_channel_urls")]
    pub channel_urls: Vec<String>,
}

/// External media player used by `play` and `mixtape play`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_player_program")]
    pub program: String,
    /// Extra arguments placed before the stream URL.
    #[serde(default)]
    pub args: Vec<String>,
}

/// Cover art size in pixels (two pixel rows per terminal row).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtConfig {
    #[serde(default = "default_art_width")]
    pub width: u16,
    #[serde(default = "default_art_height")]
    pub height: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_color")]
    pub color: bool,
    /// Used when the terminal size cannot be queried (pipes, CI).
    #[serde(default = "default_fallback_width")]
    pub fallback_width: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            live_url: default_live_url(),
            mixtapes_url: default_mixtapes_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for StreamsConfig {
    fn default() -> Self {
        Self {
            channel_urls: default_channel_urls(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            program: default_player_program(),
            args: Vec::new(),
        }
    }
}

impl Default for ArtConfig {
    fn default() -> Self {
        Self {
            width: default_art_width(),
            height: default_art_height(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            fallback_width: default_fallback_width(),
        }
    }
}

fn default_live_url() -> String {
    "https://www.nts.live/api/v2/live".to_string()
}

fn default_mixtapes_url() -> String {
    "https://www.nts.live/api/v2/mixtapes".to_string()
}

fn default_user_agent() -> String {
    format!("nts-cli/{}", env!("CARGO_PKG_VERSION"))
}

fn default_channel_urls() -> Vec<String> {
    streams::DEFAULT_CHANNEL_STREAMS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_player_program() -> String {
    platform::player_binary_name().to_string()
}

fn default_art_width() -> u16 {
    80
}

fn default_art_height() -> u16 {
    40
}

fn default_color() -> bool {
    true
}

fn default_fallback_width() -> u16 {
    100
}

impl Config {
    /// Load from the default location, writing a default file on first run.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            let config = Self::default();
            config.save_to(&config_path)?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        platform::config_dir().join("config.toml")
    }
}
