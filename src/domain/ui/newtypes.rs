// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for control-surface timing and
//! slider values, ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// HideDelay
// =============================================================================

/// Auto-hide delay bounds (1 to 30 seconds).
pub mod hide_delay_bounds {
    /// Minimum delay in seconds.
    pub const MIN_SECS: u32 = 1;
    /// Maximum delay in seconds.
    pub const MAX_SECS: u32 = 30;
    /// Default delay in seconds.
    pub const DEFAULT_SECS: u32 = 3;
}

/// Inactivity delay before the control surface hides, in seconds.
///
/// # Example
///
/// ```
/// use playback_transport::domain::ui::HideDelay;
///
/// let delay = HideDelay::new(5);
/// assert_eq!(delay.value(), 5);
///
/// // Values outside range are clamped
/// assert_eq!(HideDelay::new(100).value(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideDelay(u32);

impl HideDelay {
    /// Creates a new delay, clamping to valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(hide_delay_bounds::MIN_SECS, hide_delay_bounds::MAX_SECS))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for HideDelay {
    fn default() -> Self {
        Self(hide_delay_bounds::DEFAULT_SECS)
    }
}

// =============================================================================
// SeekDebounce
// =============================================================================

/// Seek debounce window bounds (100 ms to 5 s).
pub mod seek_debounce_bounds {
    /// Minimum window in milliseconds.
    pub const MIN_MS: u64 = 100;
    /// Maximum window in milliseconds.
    pub const MAX_MS: u64 = 5_000;
    /// Default window in milliseconds.
    pub const DEFAULT_MS: u64 = 1_000;
}

/// Quiet period after the last slider change before a seek is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekDebounce(u64);

impl SeekDebounce {
    /// Creates a new debounce window, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(seek_debounce_bounds::MIN_MS, seek_debounce_bounds::MAX_MS))
    }

    /// Returns the window in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the window as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SeekDebounce {
    fn default() -> Self {
        Self(seek_debounce_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// SliderScale
// =============================================================================

/// Resolution of the seek slider, depending on the input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliderProfile {
    /// Mouse, touch and pen: fine-grained scale.
    #[default]
    Fine,
    /// Gamepad or remote: a reduced integer scale so each step is visible.
    Coarse,
}

/// Maximum value of the seek slider (its minimum is always 0).
///
/// The slider's normalized range `0..=max` maps linearly onto `[0, length]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderScale(f64);

impl SliderScale {
    /// Scale used by [`SliderProfile::Fine`].
    pub const FINE_MAX: f64 = 1_000.0;
    /// Scale used by [`SliderProfile::Coarse`].
    pub const COARSE_MAX: f64 = 100.0;

    /// Creates a scale with the given maximum. Non-positive or non-finite
    /// values fall back to the fine scale.
    #[must_use]
    pub fn new(max: f64) -> Self {
        if max.is_finite() && max > 0.0 {
            Self(max)
        } else {
            Self(Self::FINE_MAX)
        }
    }

    /// Returns the scale for an input profile.
    #[must_use]
    pub fn for_profile(profile: SliderProfile) -> Self {
        match profile {
            SliderProfile::Fine => Self(Self::FINE_MAX),
            SliderProfile::Coarse => Self(Self::COARSE_MAX),
        }
    }

    /// Returns the slider maximum.
    #[must_use]
    pub fn max(self) -> f64 {
        self.0
    }

    /// Clamps a raw slider value into `0..=max`.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, self.0)
        }
    }

    /// Converts a slider value into a fraction in `0..=1`.
    #[must_use]
    pub fn to_fraction(self, value: f64) -> f64 {
        self.clamp(value) / self.0
    }

    /// Converts a fraction in `0..=1` into a slider value.
    #[must_use]
    pub fn from_fraction(self, fraction: f64) -> f64 {
        self.clamp(fraction * self.0)
    }
}

impl Default for SliderScale {
    fn default() -> Self {
        Self::for_profile(SliderProfile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn hide_delay_clamps_to_valid_range() {
        assert_eq!(HideDelay::new(0).value(), hide_delay_bounds::MIN_SECS);
        assert_eq!(HideDelay::new(100).value(), hide_delay_bounds::MAX_SECS);
        assert_eq!(HideDelay::new(7).as_duration(), Duration::from_secs(7));
    }

    #[test]
    fn seek_debounce_defaults_to_one_second() {
        assert_eq!(SeekDebounce::default().as_duration(), Duration::from_secs(1));
        assert_eq!(SeekDebounce::new(1).value(), seek_debounce_bounds::MIN_MS);
    }

    #[test]
    fn slider_profiles_have_distinct_scales() {
        assert_ne!(
            SliderScale::for_profile(SliderProfile::Fine),
            SliderScale::for_profile(SliderProfile::Coarse)
        );
    }

    #[test]
    fn slider_scale_rejects_degenerate_max() {
        assert_abs_diff_eq!(SliderScale::new(0.0).max(), SliderScale::FINE_MAX);
        assert_abs_diff_eq!(SliderScale::new(f64::NAN).max(), SliderScale::FINE_MAX);
    }

    #[test]
    fn slider_fraction_conversions() {
        let scale = SliderScale::for_profile(SliderProfile::Coarse);
        assert_abs_diff_eq!(scale.to_fraction(25.0), 0.25);
        assert_abs_diff_eq!(scale.to_fraction(250.0), 1.0);
        assert_abs_diff_eq!(scale.from_fraction(0.5), 50.0);
        assert_abs_diff_eq!(scale.clamp(-3.0), 0.0);
    }
}
