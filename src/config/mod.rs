// SPDX-License-Identifier: MPL-2.0
//! This module handles the controller configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[auto_hide]` - Control-surface auto-hide behavior
//! - `[seek]` - Slider debounce and resolution
//! - `[tracks]` - Synthetic "off" entries in the track menus
//! - `[playback]` - Initial volume and mute state
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `TRANSPORT_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use playback_transport::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.auto_hide.delay_secs = Some(5);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::controller::ControllerSettings;
use crate::domain::ui::{HideDelay, SeekDebounce, SliderProfile, SliderScale};
use crate::domain::video::Volume;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "PlaybackTransport";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TRANSPORT_CONFIG_DIR";

// =============================================================================
// Enums
// =============================================================================

/// Seek slider resolution as written in the settings file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SliderResolution {
    #[default]
    Fine,
    Coarse,
}

impl From<SliderResolution> for SliderProfile {
    fn from(resolution: SliderResolution) -> Self {
        match resolution {
            SliderResolution::Fine => SliderProfile::Fine,
            SliderResolution::Coarse => SliderProfile::Coarse,
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Control-surface auto-hide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AutoHideConfig {
    /// Hide the controls after inactivity while playing.
    #[serde(default = "default_auto_hide_enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Inactivity delay before hiding (seconds).
    #[serde(default = "default_hide_delay_secs", skip_serializing_if = "Option::is_none")]
    pub delay_secs: Option<u32>,
}

impl Default for AutoHideConfig {
    fn default() -> Self {
        Self {
            enabled: default_auto_hide_enabled(),
            delay_secs: default_hide_delay_secs(),
        }
    }
}

/// Seek slider settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeekConfig {
    /// Quiet period after the last slider change before seeking (milliseconds).
    #[serde(default = "default_seek_debounce_ms", skip_serializing_if = "Option::is_none")]
    pub debounce_ms: Option<u64>,

    /// Slider resolution for the current input device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slider_profile: Option<SliderResolution>,
}

impl Default for SeekConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_seek_debounce_ms(),
            slider_profile: Some(SliderResolution::default()),
        }
    }
}

/// Track menu settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TracksConfig {
    /// Prepend an "off" entry to the subtitle menu.
    #[serde(default = "default_subtitle_off_entry", skip_serializing_if = "Option::is_none")]
    pub subtitle_off_entry: Option<bool>,

    /// Prepend an "off" entry to the audio menu.
    #[serde(default = "default_audio_off_entry", skip_serializing_if = "Option::is_none")]
    pub audio_off_entry: Option<bool>,
}

impl Default for TracksConfig {
    fn default() -> Self {
        Self {
            subtitle_off_entry: default_subtitle_off_entry(),
            audio_off_entry: default_audio_off_entry(),
        }
    }
}

/// Initial playback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Engine volume (0 to 100).
    #[serde(default = "default_volume", skip_serializing_if = "Option::is_none")]
    pub volume: Option<u8>,

    /// Whether audio starts muted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            muted: Some(false),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Controller configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub auto_hide: AutoHideConfig,

    #[serde(default)]
    pub seek: SeekConfig,

    #[serde(default)]
    pub tracks: TracksConfig,

    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl Config {
    /// Resolves optional fields into validated controller settings.
    #[must_use]
    pub fn settings(&self) -> ControllerSettings {
        let profile: SliderProfile = self.seek.slider_profile.unwrap_or_default().into();
        ControllerSettings {
            auto_hide_enabled: self.auto_hide.enabled.unwrap_or(DEFAULT_AUTO_HIDE_ENABLED),
            hide_delay: self
                .auto_hide
                .delay_secs
                .map_or_else(HideDelay::default, HideDelay::new),
            seek_debounce: self
                .seek
                .debounce_ms
                .map_or_else(SeekDebounce::default, SeekDebounce::new),
            slider_scale: SliderScale::for_profile(profile),
            subtitle_off_entry: self
                .tracks
                .subtitle_off_entry
                .unwrap_or(DEFAULT_SUBTITLE_OFF_ENTRY),
            audio_off_entry: self.tracks.audio_off_entry.unwrap_or(DEFAULT_AUDIO_OFF_ENTRY),
            volume: self
                .playback
                .volume
                .map_or_else(Volume::default, Volume::new),
            muted: self.playback.muted.unwrap_or(false),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_auto_hide_enabled() -> Option<bool> {
    Some(DEFAULT_AUTO_HIDE_ENABLED)
}

fn default_hide_delay_secs() -> Option<u32> {
    Some(DEFAULT_HIDE_DELAY_SECS)
}

fn default_seek_debounce_ms() -> Option<u64> {
    Some(DEFAULT_SEEK_DEBOUNCE_MS)
}

fn default_subtitle_off_entry() -> Option<bool> {
    Some(DEFAULT_SUBTITLE_OFF_ENTRY)
}

fn default_audio_off_entry() -> Option<bool> {
    Some(DEFAULT_AUDIO_OFF_ENTRY)
}

fn default_volume() -> Option<u8> {
    Some(DEFAULT_VOLUME)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory.
///
/// # Resolution Order
///
/// 1. `override_path` parameter (if `Some`) - most specific, for tests
/// 2. `TRANSPORT_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific config directory (with app name appended)
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
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
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable config {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some(format!("could not load {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, the config cannot be
/// serialized, or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::Mutex;
    use std::time::Duration;
    use tempfile::tempdir;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            auto_hide: AutoHideConfig {
                enabled: Some(false),
                delay_secs: Some(7),
            },
            seek: SeekConfig {
                debounce_ms: Some(400),
                slider_profile: Some(SliderResolution::Coarse),
            },
            tracks: TracksConfig {
                subtitle_off_entry: Some(false),
                audio_off_entry: Some(true),
            },
            playback: PlaybackConfig {
                volume: Some(40),
                muted: Some(true),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[seek\nbroken").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn missing_file_loads_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[auto_hide]\ndelay_secs = 9\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.auto_hide.delay_secs, Some(9));
        assert_eq!(loaded.auto_hide.enabled, Some(DEFAULT_AUTO_HIDE_ENABLED));
        assert_eq!(loaded.seek.debounce_ms, Some(DEFAULT_SEEK_DEBOUNCE_MS));
    }

    #[test]
    fn settings_clamp_out_of_range_values() {
        let mut config = Config::default();
        config.auto_hide.delay_secs = Some(500);
        config.seek.debounce_ms = Some(1);
        config.playback.volume = Some(200);

        let settings = config.settings();
        assert_eq!(settings.hide_delay.value(), MAX_HIDE_DELAY_SECS);
        assert_eq!(settings.seek_debounce.value(), MIN_SEEK_DEBOUNCE_MS);
        assert_eq!(settings.volume.value(), 100);
    }

    #[test]
    fn default_settings_match_defaults() {
        let settings = Config::default().settings();
        assert!(settings.auto_hide_enabled);
        assert_eq!(settings.seek_debounce.as_duration(), Duration::from_secs(1));
        assert_eq!(settings.slider_scale, SliderScale::for_profile(SliderProfile::Fine));
        assert!(settings.subtitle_off_entry);
        assert!(!settings.audio_off_entry);
    }

    #[test]
    fn env_var_overrides_platform_dir() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let temp_dir = tempdir().expect("failed to create temp dir");

        std::env::set_var(ENV_CONFIG_DIR, temp_dir.path());
        let resolved = config_dir_with_override(None);
        std::env::remove_var(ENV_CONFIG_DIR);

        assert_eq!(resolved, Some(temp_dir.path().to_path_buf()));
    }

    #[test]
    fn explicit_override_beats_env_var() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let explicit = PathBuf::from("/explicit/dir");

        std::env::set_var(ENV_CONFIG_DIR, "/from/env");
        let resolved = config_dir_with_override(Some(explicit.clone()));
        std::env::remove_var(ENV_CONFIG_DIR);

        assert_eq!(resolved, Some(explicit));
    }
}
