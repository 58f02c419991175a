use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Client configuration loaded from `~/.config/storycast/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the video-creation backend (scheme, host, port).
    pub base_url: String,
    /// Path of the single-video creation endpoint (multipart form POST).
    pub create_endpoint: String,
    /// Path of the batch creation endpoint (JSON POST). Some deployments use `/create_batch`.
    pub batch_endpoint: String,
    /// Prefix used to build download references from returned file identifiers.
    pub download_prefix: String,
    /// Connect timeout in seconds for every request.
    pub connect_timeout_secs: u64,
    /// Optional total request timeout in seconds (None = wait for the backend indefinitely).
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:10000".to_string(),
            create_endpoint: "/create".to_string(),
            batch_endpoint: "/batch".to_string(),
            download_prefix: "/download".to_string(),
            connect_timeout_secs: 15,
            request_timeout_secs: None,
        }
    }
}

impl ClientConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Returns a copy with `base_url` replaced (used for the CLI `--base-url` override).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("storycast")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ClientConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ClientConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ClientConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
