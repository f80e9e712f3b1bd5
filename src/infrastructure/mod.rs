// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`channel_engine`]: Forwards engine commands over a tokio channel
//!   (implements [`PlaybackEngine`])
//! - [`fixed_view_mode_host`]: Headless view-mode host (implements
//!   [`ViewModeHost`])
//!
//! [`PlaybackEngine`]: crate::application::port::PlaybackEngine
//! [`ViewModeHost`]: crate::application::port::ViewModeHost

pub mod channel_engine;
pub mod fixed_view_mode_host;

// Re-export main types for convenience
pub use channel_engine::ChannelEngine;
pub use fixed_view_mode_host::FixedViewModeHost;
