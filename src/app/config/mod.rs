// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[contact]` - EmailJS endpoint, service, template and public key
//! - `[carousel]` - Testimonial rotation interval
//! - `[navigation]` - Smooth scroll offset and duration
//!
//! Every key is optional; missing keys fall back to [`defaults`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` flag or `FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::app::config;
//!
//! let (config, warning) = config::load();
//! if let Some(message) = warning {
//!     eprintln!("{message}");
//! }
//! println!("carousel ticks every {:?}", config.carousel.interval());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::infrastructure::emailjs::EmailJsAccount;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Email relay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
    /// EmailJS send endpoint.
    pub endpoint: String,

    /// EmailJS service identifier.
    pub service_id: String,

    /// EmailJS template identifier.
    pub template_id: String,

    /// EmailJS public key.
    pub public_key: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_EMAILJS_ENDPOINT.to_string(),
            service_id: DEFAULT_EMAILJS_SERVICE_ID.to_string(),
            template_id: DEFAULT_EMAILJS_TEMPLATE_ID.to_string(),
            public_key: DEFAULT_EMAILJS_PUBLIC_KEY.to_string(),
        }
    }
}

impl ContactConfig {
    /// EmailJS identifiers for the relay.
    #[must_use]
    pub fn account(&self) -> EmailJsAccount {
        EmailJsAccount {
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            public_key: self.public_key.clone(),
        }
    }
}

/// Testimonial carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Time between automatic advances in milliseconds.
    #[serde(default = "default_carousel_interval_ms", skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_carousel_interval_ms(),
        }
    }
}

impl CarouselConfig {
    /// Returns the rotation period, clamped to the supported range.
    #[must_use]
    pub fn interval(&self) -> Duration {
        let ms = self
            .interval_ms
            .unwrap_or(DEFAULT_CAROUSEL_INTERVAL_MS)
            .clamp(MIN_CAROUSEL_INTERVAL_MS, MAX_CAROUSEL_INTERVAL_MS);
        Duration::from_millis(ms)
    }
}

/// Navigation bar scrolling settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Space kept above a scroll target, in logical pixels.
    #[serde(default = "default_scroll_offset", skip_serializing_if = "Option::is_none")]
    pub scroll_offset: Option<f32>,

    /// Smooth scroll duration in milliseconds.
    #[serde(default = "default_scroll_duration_ms", skip_serializing_if = "Option::is_none")]
    pub scroll_duration_ms: Option<u64>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_offset: default_scroll_offset(),
            scroll_duration_ms: default_scroll_duration_ms(),
        }
    }
}

impl NavigationConfig {
    /// Returns the scroll offset, clamped to `0..=MAX_SCROLL_OFFSET`.
    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        let offset = self.scroll_offset.unwrap_or(DEFAULT_SCROLL_OFFSET);
        if offset.is_finite() {
            offset.clamp(0.0, MAX_SCROLL_OFFSET)
        } else {
            DEFAULT_SCROLL_OFFSET
        }
    }

    /// Returns the smooth scroll duration, capped at `MAX_SCROLL_DURATION_MS`.
    #[must_use]
    pub fn scroll_duration(&self) -> Duration {
        let ms = self
            .scroll_duration_ms
            .unwrap_or(DEFAULT_SCROLL_DURATION_MS)
            .min(MAX_SCROLL_DURATION_MS);
        Duration::from_millis(ms)
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_carousel_interval_ms() -> Option<u64> {
    Some(DEFAULT_CAROUSEL_INTERVAL_MS)
}

fn default_scroll_offset() -> Option<f32> {
    Some(DEFAULT_SCROLL_OFFSET)
}

fn default_scroll_duration_ms() -> Option<u64> {
    Some(DEFAULT_SCROLL_DURATION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("ignoring {}: {err}", path.display())),
        ),
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
