use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Client configuration (`config.toml` in the cfclient config directory)
///
/// Everything is optional; command-line arguments override these values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse config file {:?}", path))
    }

    /// Load from the default location, `$XDG_CONFIG_HOME/cfclient/config.toml`
    pub fn load_default() -> Result<Self> {
        Self::load(&config_dir()?.join("config.toml"))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            toml::to_string_pretty(self).context("Failed to serialize cfclient config file")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file {:?}", path))?;
        Ok(())
    }
}

/// Get the config directory for cfclient
///
/// Returns `$XDG_CONFIG_HOME/cfclient` or `~/.config/cfclient` if not set
pub fn config_dir() -> Result<PathBuf> {
    let base = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            directories::BaseDirs::new()
                .expect("Failed to get home directory")
                .home_dir()
                .join(".config")
        });

    Ok(base.join("cfclient"))
}
