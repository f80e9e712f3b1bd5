// SPDX-License-Identifier: MPL-2.0
//! Control-surface geometry port.
//!
//! The auto-hide logic needs the bounds of the control surface at the moment
//! it evaluates an activity signal. Layout may change between signals
//! (resizes, flyouts opening), so bounds are always queried, never cached.

use iced_core::Rectangle;
use std::sync::{Arc, Mutex, PoisonError};

/// Port answering "where is the control surface right now?".
pub trait SurfaceProbe: Send {
    /// Returns the current bounds of the primary control surface.
    fn control_surface(&self) -> Rectangle;
}

impl<F> SurfaceProbe for F
where
    F: Fn() -> Rectangle + Send,
{
    fn control_surface(&self) -> Rectangle {
        self()
    }
}

/// Bounds shared with the layout code, updated whenever it relayouts.
#[derive(Debug, Clone, Default)]
pub struct SharedSurface(Arc<Mutex<Rectangle>>);

impl SharedSurface {
    #[must_use]
    pub fn new(bounds: Rectangle) -> Self {
        Self(Arc::new(Mutex::new(bounds)))
    }

    /// Replaces the stored bounds.
    pub fn set(&self, bounds: Rectangle) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = bounds;
    }
}

impl SurfaceProbe for SharedSurface {
    fn control_surface(&self) -> Rectangle {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced_core::{Point, Size};

    #[test]
    fn closures_act_as_probes() {
        let probe = || Rectangle::new(Point::new(1.0, 2.0), Size::new(3.0, 4.0));
        assert_eq!(probe.control_surface().width, 3.0);
    }

    #[test]
    fn shared_surface_reflects_latest_layout() {
        let shared = SharedSurface::new(Rectangle::new(Point::ORIGIN, Size::new(10.0, 10.0)));
        let probe = shared.clone();
        shared.set(Rectangle::new(Point::ORIGIN, Size::new(50.0, 20.0)));
        assert_eq!(probe.control_surface().width, 50.0);
    }
}
