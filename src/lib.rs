// SPDX-License-Identifier: MPL-2.0
//! `playback_transport` is a reusable playback-transport controller.
//!
//! It sits between a media playback engine and a control surface: it decides
//! when the controls auto-hide, keeps the seek slider and the engine position
//! from fighting each other, keeps the audio/subtitle menus consistent with
//! the engine's track list, and negotiates view-mode changes with listeners
//! that may veto or defer them.
//!
//! Rendering, decoding and the engine itself stay outside; they plug in
//! through the traits in [`application::port`].

#![doc(html_root_url = "https://docs.rs/playback_transport/0.3.0")]

pub mod application;
pub mod config;
pub mod controller;
pub mod controls;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod runtime;

#[cfg(test)]
mod test_utils;

pub use controller::{ControllerSettings, Input, Output, SurfaceDirective, TransportController};
pub use error::{Error, Result};
