// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[carousel]` - Page transition duration and keyboard navigation
//!
//! The viewing position is deliberately absent: every launch starts on the
//! first exhibit.
//!
//! The file location is resolved by [`paths::config_dir`]. The application
//! only reads it; `art_space --init-config` writes a default file through
//! [`write_default_with_override`].
//!
//! # Examples
//!
//! ```no_run
//! use art_space::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("{} ms", config.carousel.transition().as_millis());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::ui::TransitionDuration;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when the config file cannot be read.
pub const CONFIG_LOAD_WARNING: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Carousel behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Page transition duration in milliseconds (`0` switches instantly).
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_ms: Option<u64>,

    /// Whether Left/Right arrow keys navigate.
    #[serde(
        default = "default_keyboard_navigation",
        skip_serializing_if = "Option::is_none"
    )]
    pub keyboard_navigation: Option<bool>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
            keyboard_navigation: default_keyboard_navigation(),
        }
    }
}

impl CarouselConfig {
    /// Returns the configured transition duration, clamped to its valid range.
    #[must_use]
    pub fn transition(&self) -> TransitionDuration {
        TransitionDuration::from_millis(self.transition_ms.unwrap_or(DEFAULT_TRANSITION_MS))
    }

    #[must_use]
    pub fn keyboard_navigation_enabled(&self) -> bool {
        self.keyboard_navigation
            .unwrap_or(DEFAULT_KEYBOARD_NAVIGATION)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Carousel behavior settings.
    #[serde(default)]
    pub carousel: CarouselConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_keyboard_navigation() -> Option<bool> {
    Some(DEFAULT_KEYBOARD_NAVIGATION)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded config");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to load config");
            (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()))
        }
    }
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Writes configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Writes a default `settings.toml` into the config directory unless one
/// already exists, and returns its path.
///
/// # Errors
///
/// Returns an error if no config directory can be determined or the file
/// cannot be written.
pub fn write_default_with_override(base_dir: Option<PathBuf>) -> Result<PathBuf> {
    let path = get_config_path_with_override(base_dir)
        .ok_or_else(|| Error::Io("no config directory available".to_string()))?;

    if path.exists() {
        tracing::info!(path = %path.display(), "config file already exists, leaving it untouched");
        return Ok(path);
    }

    save_to_path(&Config::default(), &path)?;
    tracing::info!(path = %path.display(), "wrote default config");
    Ok(path)
}
