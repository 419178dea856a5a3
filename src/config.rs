use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV: &str = "PDFTEXT_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Retry with the lopdf backend when pdf-extract fails
    #[serde(default = "default_fallback")]
    pub fallback: bool,
    #[serde(default)]
    pub preprocess: PreprocessConfig,
}

fn default_fallback() -> bool {
    true
}

fn default_ghostscript() -> String {
    "gs".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_ghostscript")]
    pub ghostscript: String,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            ghostscript: default_ghostscript(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback: default_fallback(),
            preprocess: PreprocessConfig::default(),
        }
    }
}

impl Config {
    /// Get the configuration directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("pdftext");
        Ok(config_dir)
    }

    /// Get the configuration file path, honouring `PDFTEXT_CONFIG`
    pub fn config_path() -> Result<PathBuf> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            _ => Ok(Self::config_dir()?.join("config.toml")),
        }
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

        config.preprocess.ghostscript = expand_env_var(&config.preprocess.ghostscript);

        Ok(config)
    }
}

/// Resolve a `$VAR` or `${VAR}` reference; anything else is returned as is.
/// Unset variables resolve to an empty string.
fn expand_env_var(value: &str) -> String {
    let name = value
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
        .or_else(|| value.strip_prefix('$'));

    match name {
        Some(name) => std::env::var(name).unwrap_or_default(),
        None => value.to_string(),
    }
}
