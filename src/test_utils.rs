// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by the unit tests.
//!
//! Slider values and seek fractions are `f64`, so comparisons go through the
//! `approx` macros instead of `assert_eq!`.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Epsilon for slider values and seek fractions.
pub const F64_EPSILON: f64 = 1e-10;
