use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::{default_headers, FetchOptions, Fetcher, DEFAULT_USER_AGENT};

/// Global configuration loaded from `~/.config/wallgrab/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallgrabConfig {
    /// User-Agent sent with every page and image request.
    pub user_agent: String,
    /// Worker count used when the command line does not give one.
    pub default_workers: usize,
    /// Seconds allowed for establishing a connection.
    pub connect_timeout_secs: u64,
    /// Optional deadline in seconds for a whole request (None = no limit).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Maximum number of redirects followed per request.
    pub max_redirections: u32,
    /// Additional request headers, e.g. `Referer` or `Cookie`.
    #[serde(default)]
    pub extra_headers: HashMap<String, String>,
}

impl Default for WallgrabConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_workers: 4,
            connect_timeout_secs: 30,
            timeout_secs: None,
            max_redirections: 10,
            extra_headers: HashMap::new(),
        }
    }
}

impl WallgrabConfig {
    /// Full header set: `extra_headers` plus `User-Agent` (which always wins).
    pub fn headers(&self) -> HashMap<String, String> {
        let mut headers: HashMap<String, String> = self
            .extra_headers
            .iter()
            .filter(|(k, _)| !k.eq_ignore_ascii_case("user-agent"))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        headers.extend(default_headers(&self.user_agent));
        headers
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: self.timeout_secs.map(Duration::from_secs),
            max_redirections: self.max_redirections,
        }
    }

    pub fn fetcher(&self) -> Fetcher {
        Fetcher::new(self.headers(), self.fetch_options())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wallgrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WallgrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WallgrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: WallgrabConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
