//! Configuration file support for tagline

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::language::Language;

pub const DEFAULT_COLOR: &str = "#9900FF";

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub style: Style,

    #[serde(default)]
    pub colors: Colors,

    #[serde(default)]
    pub language: Language,
}

/// Tag styling
///
/// Handed to the reporter by value; the reporter never reads settings
/// after construction.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Style {
    /// Tag color for `normal`. Validated when `normal` is called.
    #[serde(default = "default_color")]
    pub accent_color: String,

    /// Display name replacing the default tags of normal, success and info
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Tag color for success and info
    #[serde(default = "default_color")]
    pub status_color: String,
}

/// Color settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Colors {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Style {
    fn default() -> Self {
        Self {
            accent_color: default_color(),
            name: None,
            status_color: default_color(),
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

impl Settings {
    /// Load settings from file or return defaults
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from_file(&path).unwrap_or_else(|e| {
                crate::log_warn!("{:#}; using defaults", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        crate::log_debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Find config file in standard locations
    /// Priority:
    /// 1. .tagline.toml in current directory
    /// 2. ~/.config/tagline/config.toml (XDG config directory)
    pub fn config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from(".tagline.toml");
        if local_config.exists() {
            return Some(local_config);
        }

        Self::user_config_path().filter(|path| path.exists())
    }

    /// Location of the per-user config file, whether or not it exists
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tagline").join("config.toml"))
    }

    /// Save settings to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Apply command-line overrides on top of the loaded file
    pub fn with_overrides(
        mut self,
        accent_color: Option<String>,
        name: Option<String>,
        no_color: bool,
    ) -> Self {
        if let Some(color) = accent_color {
            self.style.accent_color = color;
        }
        if name.is_some() {
            self.style.name = name;
        }
        if no_color {
            self.colors.enabled = false;
        }
        self
    }

    /// Turn terminal colors on or off process-wide
    pub fn apply_colors(&self) {
        if !self.colors.enabled {
            colored::control::set_override(false);
        }
    }

    /// Generate example config file content
    pub fn example_config() -> String {
        let header = "# tagline configuration file\n\
                      # Place this file at ~/.config/tagline/config.toml or .tagline.toml in your project\n\n";

        let config = toml::to_string_pretty(&Settings::default()).unwrap_or_default();
        format!("{}{}", header, config)
    }
}
