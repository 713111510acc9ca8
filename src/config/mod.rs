// SPDX-License-Identifier: MPL-2.0
//! This module handles the client's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use scrapmarket_core::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.max_toasts = Some(5);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

mod defaults;

pub use defaults::{
    DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, DEFAULT_MAX_TOASTS, DEFAULT_TOAST_DURATION_MS,
    MAX_DIAGNOSTICS_BUFFER_CAPACITY, MIN_DIAGNOSTICS_BUFFER_CAPACITY,
};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ScrapMarket";

/// User-tunable settings. Every field is optional in the file; accessors
/// resolve the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub max_toasts: Option<usize>,
    #[serde(default)]
    pub default_toast_duration_ms: Option<u64>,
    #[serde(default)]
    pub diagnostics_buffer_capacity: Option<usize>,
}

impl Config {
    /// Toast capacity bound, defaulting to [`DEFAULT_MAX_TOASTS`].
    #[must_use]
    pub fn max_toasts(&self) -> usize {
        self.max_toasts.unwrap_or(DEFAULT_MAX_TOASTS).max(1)
    }

    /// Default toast duration in milliseconds.
    #[must_use]
    pub fn default_toast_duration_ms(&self) -> u64 {
        self.default_toast_duration_ms
            .unwrap_or(DEFAULT_TOAST_DURATION_MS)
    }

    /// Diagnostics buffer capacity, clamped to the accepted bounds.
    #[must_use]
    pub fn diagnostics_buffer_capacity(&self) -> usize {
        self.diagnostics_buffer_capacity
            .unwrap_or(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
            .clamp(
                MIN_DIAGNOSTICS_BUFFER_CAPACITY,
                MAX_DIAGNOSTICS_BUFFER_CAPACITY,
            )
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
