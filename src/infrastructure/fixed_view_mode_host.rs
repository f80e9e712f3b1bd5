// SPDX-License-Identifier: MPL-2.0
//! View-mode host with a fixed set of supported modes.
//!
//! Useful for headless embeddings (tests, kiosk builds) where no window
//! system is available to ask.

use crate::application::port::{ViewModeError, ViewModeHost};
use crate::domain::ui::ViewMode;

/// Accepts switches to a fixed set of modes and records the active one.
#[derive(Debug, Clone)]
pub struct FixedViewModeHost {
    supported: Vec<ViewMode>,
    active: ViewMode,
}

impl FixedViewModeHost {
    /// Creates a host that supports `supported` in addition to
    /// [`ViewMode::Default`].
    #[must_use]
    pub fn new(supported: impl IntoIterator<Item = ViewMode>) -> Self {
        let mut modes = vec![ViewMode::Default];
        for mode in supported {
            if !modes.contains(&mode) {
                modes.push(mode);
            }
        }
        Self {
            supported: modes,
            active: ViewMode::Default,
        }
    }

    /// Returns the mode the host last switched to.
    #[must_use]
    pub fn active(&self) -> ViewMode {
        self.active
    }
}

impl ViewModeHost for FixedViewModeHost {
    fn is_supported(&self, mode: ViewMode) -> bool {
        self.supported.contains(&mode)
    }

    fn try_switch(&mut self, mode: ViewMode) -> Result<(), ViewModeError> {
        if !self.is_supported(mode) {
            return Err(ViewModeError::Unsupported(mode));
        }
        self.active = mode;
        Ok(())
    }
}
