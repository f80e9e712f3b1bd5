// SPDX-License-Identifier: MPL-2.0
//! Playback engine port definition.
//!
//! The engine itself (decoding, output, track enumeration) lives outside this
//! crate. The controller talks to it in two directions:
//!
//! - [`EngineEvent`]: typed notifications the engine pushes in
//! - [`EngineCommand`]: commands the controller sends out through
//!   [`PlaybackEngine::send`]

use crate::domain::video::{PlaybackState, TrackCategory, TrackId, Volume};
use std::time::Duration;
use thiserror::Error;

/// Notification pushed by the playback engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Current playback position.
    Position(Duration),
    /// Total media length. Zero when unknown.
    Length(Duration),
    /// Playback state changed.
    State(PlaybackState),
    /// Whether the current media supports seeking.
    Seekable(bool),
    /// Engine-side mute state.
    Muted(bool),
    /// A track became available.
    TrackAdded {
        category: TrackCategory,
        id: TrackId,
        name: String,
    },
    /// The engine switched tracks. `None` means the category was turned off.
    TrackSelected {
        category: TrackCategory,
        id: Option<TrackId>,
    },
    /// A track disappeared.
    TrackDeleted {
        category: TrackCategory,
        id: TrackId,
    },
    /// Playback error. `None` (an empty message) clears the error.
    Error(Option<String>),
}

/// Command sent to the playback engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    Play,
    Pause,
    Stop,
    /// Seek to a position expressed as a fraction of the media length (0..=1).
    Seek { fraction: f64 },
    SetMuted(bool),
    SetVolume(Volume),
    /// Switch the active track of a category. `None` turns the category off.
    SelectTrack {
        category: TrackCategory,
        id: Option<TrackId>,
    },
}

/// Errors reported when a command cannot be delivered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("playback engine is not running")]
    Disconnected,

    #[error("playback engine rejected the command: {0}")]
    Rejected(String),
}

/// Port for sending commands to the playback engine.
///
/// Implementations must tolerate idempotent commands (for example two seeks
/// to the same fraction in a row).
pub trait PlaybackEngine: Send {
    /// Delivers a command to the engine.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] if the engine is gone or refuses the
    /// command. The controller logs and drops such failures.
    fn send(&mut self, command: EngineCommand) -> Result<(), EngineError>;
}
