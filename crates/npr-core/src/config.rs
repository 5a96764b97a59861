use serde::Deserialize;
use std::path::{Path, PathBuf};

use npr_util::errors::NprError;

use crate::DEFAULT_PACKAGE_MANAGER;

/// User configuration loaded from `~/.npr/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_package_manager", rename = "package-manager")]
    pub package_manager: String,

    /// Print the command line before running it.
    #[serde(default = "default_echo")]
    pub echo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package_manager: default_package_manager(),
            echo: default_echo(),
        }
    }
}

fn default_package_manager() -> String {
    DEFAULT_PACKAGE_MANAGER.to_string()
}

fn default_echo() -> bool {
    true
}

impl Config {
    /// Load the configuration from `~/.npr/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load the configuration from an explicit path, falling back to defaults when absent.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| NprError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            NprError::Config {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Returns the default path to the config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Pick the package manager: an explicit override wins over the config file.
    pub fn resolve_package_manager(&self, override_: Option<&str>) -> String {
        match override_.map(str::trim) {
            Some(pm) if !pm.is_empty() => pm.to_string(),
            _ => self.package_manager.clone(),
        }
    }
}

/// Returns the path to the npr data directory (`~/.npr/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".npr")
}
