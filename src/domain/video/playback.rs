// SPDX-License-Identifier: MPL-2.0
//! Playback state reported by the media engine.
//!
//! The controller never drives this state itself; it only reacts to the
//! values the engine pushes in.

/// Represents the current playback state of the media engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// No media loaded, nothing happening yet.
    #[default]
    NothingSpecial,
    /// Media is being opened.
    Opening,
    /// Engine is filling its buffers.
    Buffering,
    /// Media is actively playing.
    Playing,
    /// Playback is paused at the current position.
    Paused,
    /// Playback was stopped.
    Stopped,
    /// Playback reached the end of the media.
    Ended,
    /// Playback failed.
    Error,
}

impl PlaybackState {
    /// Returns true if the media is actively playing.
    ///
    /// This is the only state in which the control surface may auto-hide.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the engine is busy getting ready (opening or buffering).
    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Opening | Self::Buffering)
    }

    /// Returns true if the state forbids user seeking regardless of media
    /// seekability.
    #[must_use]
    pub fn blocks_seeking(self) -> bool {
        matches!(self, Self::Ended | Self::Stopped | Self::Error)
    }

    /// Returns true if the engine reported a failure.
    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}
