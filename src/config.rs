use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// User configuration (`config.yaml`); every key is optional
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub vim_mode: bool,
    /// Command receiving copied text on stdin (e.g. `pbcopy`, `wl-copy`)
    #[serde(default)]
    pub clipboard_command: Option<String>,
    /// Where share-card PNGs are written
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Font used to rasterize share cards
    #[serde(default)]
    pub font_path: Option<PathBuf>,
    /// Replacement quotation file (YAML, or JSON by extension)
    #[serde(default)]
    pub quotes_path: Option<PathBuf>,
}

impl Config {
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}

/// Determine the config file path with fallback logic
///
/// Order: `--config` (must exist), `<config_dir>/quotui/config.yaml`,
/// `./config.yaml`. Returns None when no file is found; defaults apply then.
pub fn get_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/quotui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("quotui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}
