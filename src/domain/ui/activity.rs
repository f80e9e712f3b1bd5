// SPDX-License-Identifier: MPL-2.0
//! User activity signals fed to the auto-hide logic.

use super::surface::Region;
use iced_core::Point;

/// What the user did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    PointerMove,
    PointerEnter,
    PointerExit,
    Tap,
    KeyPress,
}

/// Device behind a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

/// A single activity event, ephemeral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivitySignal {
    pub kind: ActivityKind,
    /// Pointer position in surface coordinates, if the event has one.
    pub position: Option<Point>,
    /// Region that raised the event.
    pub source: Region,
    /// Pointer device, `None` for keyboard input.
    pub pointer: Option<PointerKind>,
}

impl ActivitySignal {
    /// Pointer event at `position`, raised by `source`.
    #[must_use]
    pub fn pointer(kind: ActivityKind, pointer: PointerKind, position: Point, source: Region) -> Self {
        Self {
            kind,
            position: Some(position),
            source,
            pointer: Some(pointer),
        }
    }

    /// Key press routed through `source`.
    #[must_use]
    pub fn key_press(source: Region) -> Self {
        Self {
            kind: ActivityKind::KeyPress,
            position: None,
            source,
            pointer: None,
        }
    }

    /// Synthetic signal for a direct interaction with the control surface
    /// (a button click, a slider change, a menu pick).
    #[must_use]
    pub fn surface_interaction() -> Self {
        Self {
            kind: ActivityKind::Tap,
            position: None,
            source: Region::ControlSurface,
            pointer: None,
        }
    }

    /// Returns true for a pointer exit that did not come from touch input.
    #[must_use]
    pub fn is_non_touch_exit(&self) -> bool {
        self.kind == ActivityKind::PointerExit && self.pointer != Some(PointerKind::Touch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_exit_is_not_a_non_touch_exit() {
        let touch = ActivitySignal::pointer(
            ActivityKind::PointerExit,
            PointerKind::Touch,
            Point::ORIGIN,
            Region::Outside,
        );
        let mouse = ActivitySignal {
            pointer: Some(PointerKind::Mouse),
            ..touch
        };
        assert!(!touch.is_non_touch_exit());
        assert!(mouse.is_non_touch_exit());
    }

    #[test]
    fn surface_interaction_comes_from_control_surface() {
        let signal = ActivitySignal::surface_interaction();
        assert_eq!(signal.source, Region::ControlSurface);
        assert!(signal.position.is_none());
        assert!(!signal.is_non_touch_exit());
    }
}
