// SPDX-License-Identifier: MPL-2.0
//! Control-surface value types: visibility, regions and view modes.

/// Visibility of the transport control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Controls are shown.
    #[default]
    Visible,
    /// Controls were hidden after inactivity.
    Hidden,
}

impl Visibility {
    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Region an activity signal originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The primary control surface itself.
    ControlSurface,
    /// A child element layered over or inside the surface (buttons, menus,
    /// flyouts), identified by the host.
    Child(u32),
    /// Anything outside the player, e.g. the hosting window chrome.
    Outside,
}

/// Window presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Regular windowed presentation.
    #[default]
    Default,
    /// Full-screen presentation.
    FullScreen,
    /// Small always-on-top overlay window.
    CompactOverlay,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Default => write!(f, "default"),
            ViewMode::FullScreen => write!(f, "full-screen"),
            ViewMode::CompactOverlay => write!(f, "compact overlay"),
        }
    }
}

/// A requested view-mode change, as shown to listeners before it happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewModeTransition {
    pub from: ViewMode,
    pub to: ViewMode,
    /// Whether listeners may veto the change.
    pub cancelable: bool,
    /// Whether at least one listener asked the negotiator to wait.
    pub deferred: bool,
}

impl ViewModeTransition {
    /// Creates a cancelable, not yet deferred transition.
    #[must_use]
    pub fn new(from: ViewMode, to: ViewMode) -> Self {
        Self {
            from,
            to,
            cancelable: true,
            deferred: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_starts_visible() {
        assert!(Visibility::default().is_visible());
        assert!(!Visibility::Hidden.is_visible());
    }

    #[test]
    fn new_transition_is_cancelable() {
        let transition = ViewModeTransition::new(ViewMode::Default, ViewMode::CompactOverlay);
        assert!(transition.cancelable);
        assert!(!transition.deferred);
    }
}
