// SPDX-License-Identifier: MPL-2.0
//! Window view-mode port definition.
//!
//! The hosting environment (window manager, compositor, platform shell) owns
//! the actual presentation switch. It may not support every mode, and it may
//! refuse a switch it does support.

use crate::domain::ui::ViewMode;
use thiserror::Error;

/// Errors reported by the environment when switching view modes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ViewModeError {
    #[error("view mode '{0}' is not supported")]
    Unsupported(ViewMode),

    #[error("view mode change was denied: {0}")]
    Denied(String),
}

/// Port for the environment-level view-mode switch.
pub trait ViewModeHost: Send {
    /// Returns true if the environment can present the given mode at all.
    fn is_supported(&self, mode: ViewMode) -> bool {
        let _ = mode;
        true
    }

    /// Attempts to switch the presentation to `mode`.
    ///
    /// # Errors
    ///
    /// Returns a [`ViewModeError`] if the mode is unsupported or the switch
    /// was denied.
    fn try_switch(&mut self, mode: ViewMode) -> Result<(), ViewModeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn ViewModeHost) {}

    struct FullScreenOnly;

    impl ViewModeHost for FullScreenOnly {
        fn is_supported(&self, mode: ViewMode) -> bool {
            mode != ViewMode::CompactOverlay
        }

        fn try_switch(&mut self, mode: ViewMode) -> Result<(), ViewModeError> {
            if self.is_supported(mode) {
                Ok(())
            } else {
                Err(ViewModeError::Unsupported(mode))
            }
        }
    }

    #[test]
    fn unsupported_mode_is_reported() {
        let mut host = FullScreenOnly;
        assert!(host.try_switch(ViewMode::FullScreen).is_ok());
        let err = host.try_switch(ViewMode::CompactOverlay).unwrap_err();
        assert_eq!(err.to_string(), "view mode 'compact overlay' is not supported");
    }
}
