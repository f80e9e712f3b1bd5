// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Controller operations themselves never fail: engine delivery problems and
//! stale events are logged and dropped. Errors surface only from the edges:
//! configuration I/O and the runtime handle.

use crate::application::port::{EngineError, ViewModeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("could not serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    ViewMode(#[from] ViewModeError),

    #[error("controller task is no longer running")]
    ControllerClosed,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::ViewMode;

    #[test]
    fn io_errors_convert() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "I/O error: missing");
    }

    #[test]
    fn port_errors_are_transparent() {
        let err: Error = ViewModeError::Unsupported(ViewMode::FullScreen).into();
        assert_eq!(err.to_string(), "view mode 'full-screen' is not supported");

        let err: Error = EngineError::Disconnected.into();
        assert_eq!(err.to_string(), "playback engine is not running");
    }
}
