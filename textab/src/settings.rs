//! Persisted default settings for the textab CLI.
//!
//! A saved settings file seeds the defaults of later invocations, so a
//! user who always generates, say, bold full-border tables only has to
//! spell that out once. The library itself never touches this store.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use textablib::{BorderStyle, FontStyle};

/// Directory under the user config root.
const APP_DIR: &str = "textab";

/// Settings file name.
const SETTINGS_FILE: &str = "settings.toml";

/// Persisted form of the generation options.
///
/// Row and column counts are stored as the raw strings the user supplied;
/// they are coerced back to integers by the same flag-parsing path a fresh
/// invocation goes through, so a stale or hand-edited value fails with the
/// same validation error a bad flag would.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Raw row count
    #[serde(default = "default_count")]
    pub rows: String,
    /// Raw column count
    #[serde(default = "default_count")]
    pub columns: String,
    /// Border style
    #[serde(default)]
    pub border: BorderStyle,
    /// Font style
    #[serde(default)]
    pub font: FontStyle,
    /// Include a header row
    #[serde(default)]
    pub header: bool,
    /// Include the row-number column
    #[serde(default)]
    pub number_rows: bool,
    /// Fill data cells with random numeric values
    #[serde(default)]
    pub numeric_cells: bool,
}

fn default_count() -> String {
    "3".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: default_count(),
            columns: default_count(),
            border: BorderStyle::default(),
            font: FontStyle::default(),
            header: false,
            number_rows: false,
            numeric_cells: false,
        }
    }
}

impl Settings {
    /// Path of the settings file under the user config directory.
    pub fn path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| anyhow!("could not determine the user config directory"))?
            .join(APP_DIR);
        Ok(dir.join(SETTINGS_FILE))
    }

    /// Load saved settings, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        match Self::path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::warn!("settings unavailable: {}", e);
                Self::default()
            }
        }
    }

    /// Load from an explicit path, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("failed to parse settings file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read settings file: {}", e);
                Self::default()
            }
        }
    }

    /// Save to the default settings path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save to an explicit path, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Remove the settings file. Returns whether a file was removed.
    pub fn clear() -> Result<bool> {
        let path = Self::path()?;
        if path.exists() {
            std::fs::remove_file(path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
