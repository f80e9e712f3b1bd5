// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the interfaces the host application implements so the
//! controller can stay independent of any particular engine, toolkit or
//! window system.
//!
//! # Available Ports
//!
//! - [`engine`]: Playback engine commands and notifications
//! - [`surface`]: Control-surface bounds for pointer hit testing
//! - [`view_mode`]: Environment-level view-mode switching
//!
//! # Design Notes
//!
//! - Traits are `Send` so a controller can be moved onto the runtime task
//! - Methods are not `async`; asynchronous listener decisions are modelled
//!   with deferrals in [`crate::controls::view_mode`]
//! - Methods return `Result` with port-specific error types
//!
//! # Example
//!
//! ```ignore
//! use playback_transport::application::port::{EngineCommand, EngineError, PlaybackEngine};
//!
//! struct MyEngine { /* ... */ }
//!
//! impl PlaybackEngine for MyEngine {
//!     fn send(&mut self, command: EngineCommand) -> Result<(), EngineError> {
//!         // forward to the real player
//!         Ok(())
//!     }
//! }
//! ```

pub mod engine;
pub mod surface;
pub mod view_mode;

// Re-export main types for convenience
pub use engine::{EngineCommand, EngineError, EngineEvent, PlaybackEngine};
pub use surface::{SharedSurface, SurfaceProbe};
pub use view_mode::{ViewModeError, ViewModeHost};
