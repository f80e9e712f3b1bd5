// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains playback-related value objects and enums that are
//! independent of any presentation or engine concerns.

pub mod newtypes;
pub mod playback;
pub mod tracks;

// Re-export commonly used types
pub use newtypes::Volume;
pub use playback::PlaybackState;
pub use tracks::{TrackCategory, TrackEntry, TrackId};
