// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Auto-hide**: Control-surface inactivity delay
//! - **Seek**: Slider debounce window
//! - **Tracks**: Synthetic "off" entries per category
//! - **Volume**: Initial engine volume

use crate::domain::ui::newtypes::{hide_delay_bounds, seek_debounce_bounds};
use crate::domain::video::newtypes::volume_bounds;

// ==========================================================================
// Auto-hide Defaults
// ==========================================================================

/// Whether the control surface hides itself during playback.
pub const DEFAULT_AUTO_HIDE_ENABLED: bool = true;

/// Default auto-hide delay (in seconds).
pub const DEFAULT_HIDE_DELAY_SECS: u32 = hide_delay_bounds::DEFAULT_SECS;

/// Minimum auto-hide delay (in seconds).
pub const MIN_HIDE_DELAY_SECS: u32 = hide_delay_bounds::MIN_SECS;

/// Maximum auto-hide delay (in seconds).
pub const MAX_HIDE_DELAY_SECS: u32 = hide_delay_bounds::MAX_SECS;

// ==========================================================================
// Seek Defaults
// ==========================================================================

/// Default quiet period before a slider change is committed (in milliseconds).
pub const DEFAULT_SEEK_DEBOUNCE_MS: u64 = seek_debounce_bounds::DEFAULT_MS;

/// Minimum debounce window (in milliseconds).
pub const MIN_SEEK_DEBOUNCE_MS: u64 = seek_debounce_bounds::MIN_MS;

/// Maximum debounce window (in milliseconds).
pub const MAX_SEEK_DEBOUNCE_MS: u64 = seek_debounce_bounds::MAX_MS;

// ==========================================================================
// Track Menu Defaults
// ==========================================================================

/// Subtitle menus start with an "off" entry.
pub const DEFAULT_SUBTITLE_OFF_ENTRY: bool = true;

/// Audio menus have no "off" entry.
pub const DEFAULT_AUDIO_OFF_ENTRY: bool = false;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Initial engine volume (0 to 100).
pub const DEFAULT_VOLUME: u8 = volume_bounds::DEFAULT;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_HIDE_DELAY_SECS > 0);
    assert!(MAX_HIDE_DELAY_SECS >= MIN_HIDE_DELAY_SECS);
    assert!(DEFAULT_HIDE_DELAY_SECS >= MIN_HIDE_DELAY_SECS);
    assert!(DEFAULT_HIDE_DELAY_SECS <= MAX_HIDE_DELAY_SECS);

    assert!(MIN_SEEK_DEBOUNCE_MS > 0);
    assert!(MAX_SEEK_DEBOUNCE_MS >= MIN_SEEK_DEBOUNCE_MS);
    assert!(DEFAULT_SEEK_DEBOUNCE_MS >= MIN_SEEK_DEBOUNCE_MS);
    assert!(DEFAULT_SEEK_DEBOUNCE_MS <= MAX_SEEK_DEBOUNCE_MS);

    assert!(DEFAULT_VOLUME <= volume_bounds::MAX);
};
