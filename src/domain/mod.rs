// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with no I/O.
//!
//! This module contains pure value objects and business rules for the
//! transport controller. The only external crate it touches is `iced_core`,
//! for its `Point`/`Size`/`Rectangle` geometry primitives.
//!
//! # Modules
//!
//! - [`ui`]: Control-surface values ([`Visibility`](ui::Visibility),
//!   [`HideDelay`](ui::HideDelay), [`SliderScale`](ui::SliderScale),
//!   [`ViewMode`](ui::ViewMode))
//! - [`video`]: Playback values ([`PlaybackState`](video::PlaybackState),
//!   [`Volume`](video::Volume), [`TrackEntry`](video::TrackEntry))

pub mod ui;
pub mod video;
