// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains control-surface value objects that are independent
//! of any presentation framework.

pub mod activity;
pub mod newtypes;
pub mod surface;

// Re-export commonly used types
pub use activity::{ActivityKind, ActivitySignal, PointerKind};
pub use newtypes::{HideDelay, SeekDebounce, SliderProfile, SliderScale};
pub use surface::{Region, ViewMode, ViewModeTransition, Visibility};
