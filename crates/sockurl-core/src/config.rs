use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::merge::DEFAULT_SOCK_PATH;

/// Configuration loaded from `~/.config/sockurl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SockUrlConfig {
    /// Socket path used when the resource query carries no `sockPath`.
    #[serde(default = "default_sock_path")]
    pub default_sock_path: String,
    /// Page location used when none is given on the command line.
    #[serde(default)]
    pub location: Option<String>,
    /// Script source used when none is given on the command line.
    #[serde(default)]
    pub script_src: Option<String>,
}

fn default_sock_path() -> String {
    DEFAULT_SOCK_PATH.to_string()
}

impl Default for SockUrlConfig {
    fn default() -> Self {
        Self {
            default_sock_path: default_sock_path(),
            location: None,
            script_src: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sockurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SockUrlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SockUrlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<SockUrlConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: SockUrlConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
