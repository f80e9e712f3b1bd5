// SPDX-License-Identifier: MPL-2.0
//! Point-in-region tests.
//!
//! Used to tell a real pointer departure from a spurious exit raised when the
//! pointer moves onto a child element layered over the control surface.

use iced_core::{Point, Rectangle, Size};

/// Returns true if `point` lies in the half-open region starting at
/// `top_left` with the given `size`.
#[must_use]
pub fn contains(top_left: Point, size: Size, point: Point) -> bool {
    point.x >= top_left.x
        && point.x < top_left.x + size.width
        && point.y >= top_left.y
        && point.y < top_left.y + size.height
}

/// [`contains`] for a rectangle.
#[must_use]
pub fn rect_contains(bounds: Rectangle, point: Point) -> bool {
    contains(bounds.position(), bounds.size(), point)
}
