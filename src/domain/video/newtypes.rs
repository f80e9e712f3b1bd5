// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for playback values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0 to 100, in percent as the engine expects it).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: u8 = 0;
    /// Maximum volume level.
    pub const MAX: u8 = 100;
    /// Default volume level.
    pub const DEFAULT: u8 = 100;
    /// Volume adjustment step per key press.
    pub const STEP: u8 = 5;
}

/// Volume level, guaranteed to be within valid range (0–100).
///
/// This newtype enforces validity at the type level, making it impossible
/// to send an out-of-range volume to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume(u8);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    #[must_use]
    pub fn new(volume: u8) -> Self {
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Returns the volume value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns true if the volume is silent.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 == volume_bounds::MIN
    }

    /// Increases volume by one step, clamping to maximum.
    #[must_use]
    pub fn increase(self) -> Self {
        Self::new(self.0.saturating_add(volume_bounds::STEP))
    }

    /// Decreases volume by one step, clamping to minimum.
    #[must_use]
    pub fn decrease(self) -> Self {
        Self::new(self.0.saturating_sub(volume_bounds::STEP))
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}
