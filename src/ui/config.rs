//! # Configuration Persistence
//!
//! Manages user configuration stored in `~/.config/henu/config.json`.
//!
//! ## Overview
//!
//! The [`Config`] struct is serialized to / deserialized from a JSON file in
//! the user's XDG config directory. It holds the selected theme name and the
//! [`AnimationConfig`] that parametrizes the IDE screen: which transition
//! style plays and how long every timer runs.
//!
//! ## File Location
//!
//! ```text
//! ~/.config/henu/config.json
//! ```
//!
//! The `directories` crate is used to resolve the platform-appropriate config
//! directory.
//!
//! ## Example
//!
//! ```json
//! {
//!   "theme": "Nord",
//!   "animation": { "style": "ripple", "transition_ms": 400 }
//! }
//! ```

use crate::ide::Timings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Which overlay plays while a transition runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionStyle {
    /// The HENU PS logo grows and glows in the middle of the screen.
    #[default]
    Logo,
    /// Concentric rings spread out from the centre.
    Ripple,
}

/// Timing and style options for the IDE screen. Every field has a default,
/// so partial objects are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    pub style: TransitionStyle,
    pub transition_ms: u64,
    pub ripple_ms: u64,
    pub wheel_debounce_ms: u64,
    pub chord_debounce_ms: u64,
    pub pinch_threshold_px: f32,
    pub reply_delay_ms: u64,
    pub glow_period_ms: u64,
    pub idle_timeout_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::from_timings(&Timings::default())
    }
}

impl AnimationConfig {
    fn from_timings(timings: &Timings) -> Self {
        fn ms(d: Duration) -> u64 {
            u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
        }

        Self {
            style: TransitionStyle::default(),
            transition_ms: ms(timings.transition),
            ripple_ms: ms(timings.ripple),
            wheel_debounce_ms: ms(timings.wheel_debounce),
            chord_debounce_ms: ms(timings.chord_debounce),
            pinch_threshold_px: timings.pinch_threshold,
            reply_delay_ms: ms(timings.reply_delay),
            glow_period_ms: ms(timings.glow_period),
            idle_timeout_ms: ms(timings.idle_timeout),
        }
    }

    pub fn timings(&self) -> Timings {
        Timings {
            transition: Duration::from_millis(self.transition_ms),
            ripple: Duration::from_millis(self.ripple_ms),
            wheel_debounce: Duration::from_millis(self.wheel_debounce_ms),
            chord_debounce: Duration::from_millis(self.chord_debounce_ms),
            pinch_threshold: self.pinch_threshold_px,
            reply_delay: Duration::from_millis(self.reply_delay_ms),
            glow_period: Duration::from_millis(self.glow_period_ms),
            idle_timeout: Duration::from_millis(self.idle_timeout_ms),
        }
    }
}

/// Persisted user configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The name of the selected theme (must match a built-in theme name).
    #[serde(default = "default_theme_name")]
    pub theme: String,

    #[serde(default)]
    pub animation: AnimationConfig,
}

fn default_theme_name() -> String {
    "Dracula".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            animation: AnimationConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from disk. Returns `Config::default()` if the file
    /// does not exist or cannot be parsed.
    pub fn load() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default config: {:#}", e);
            Self::default()
        })
    }

    /// Try to load configuration, returning an error on failure.
    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the current configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Return the path to the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "henu")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}
