// SPDX-License-Identifier: MPL-2.0
//! Channel-backed engine adapter.
//!
//! Forwards every [`EngineCommand`] over an unbounded tokio channel to
//! whatever task actually drives the media engine.

use crate::application::port::{EngineCommand, EngineError, PlaybackEngine};
use tokio::sync::mpsc;

/// Handle for sending commands to the engine task.
/// This is cloneable so several controllers can share one engine task.
#[derive(Clone)]
pub struct ChannelEngine {
    tx: mpsc::UnboundedSender<EngineCommand>,
}

impl ChannelEngine {
    /// Creates an adapter and the receiving end for the engine task.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<EngineCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Returns true once the engine task dropped its receiver.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl PlaybackEngine for ChannelEngine {
    fn send(&mut self, command: EngineCommand) -> Result<(), EngineError> {
        self.tx.send(command).map_err(|_| EngineError::Disconnected)
    }
}

impl std::fmt::Debug for ChannelEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelEngine")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}
