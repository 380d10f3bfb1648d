// SPDX-License-Identifier: MPL-2.0
//! Geometry queries the controllers need, decoupled from any render handle.

use iced_core::{Point, Rectangle, Size};

/// Anything that can report where it currently sits on screen.
///
/// `None` means the region is no longer part of the document; effects bound
/// to it must let go of any state they hold.
pub trait Region {
    fn bounds(&self) -> Option<Rectangle>;
}

impl Region for Rectangle {
    fn bounds(&self) -> Option<Rectangle> {
        Some(*self)
    }
}

impl Region for Option<Rectangle> {
    fn bounds(&self) -> Option<Rectangle> {
        *self
    }
}

/// Pointer position relative to the top-left corner of `bounds`.
#[must_use]
pub fn relative_position(bounds: Rectangle, pointer: Point) -> Point {
    Point::new(pointer.x - bounds.x, pointer.y - bounds.y)
}

/// Fraction of `element` that lies inside `viewport`, in `0.0..=1.0`.
///
/// Degenerate (zero-area) elements report `0.0`.
#[must_use]
pub fn visible_fraction(element: Rectangle, viewport: Rectangle) -> f32 {
    let area = element.width * element.height;
    if area <= 0.0 {
        return 0.0;
    }

    element
        .intersection(&viewport)
        .map_or(0.0, |overlap| (overlap.width * overlap.height / area).clamp(0.0, 1.0))
}

/// The visible window, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub size: Size,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width.max(0.0), height.max(0.0)),
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::ORIGIN, self.size)
    }

    /// Horizontal centre, `offset_y` from the top (kept inside the viewport).
    #[must_use]
    pub fn top_center(&self, offset_y: f32) -> Point {
        Point::new(self.size.width / 2.0, offset_y.clamp(0.0, self.size.height))
    }

    /// Distance from `origin` to the farthest of the four corners.
    #[must_use]
    pub fn farthest_corner_distance(&self, origin: Point) -> f32 {
        let dx = origin.x.max(self.size.width - origin.x);
        let dy = origin.y.max(self.size.height - origin.y);
        dx.hypot(dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn relative_position_subtracts_the_region_origin() {
        let bounds = Rectangle::new(Point::new(100.0, 40.0), Size::new(300.0, 200.0));
        let relative = relative_position(bounds, Point::new(130.0, 90.0));
        assert_abs_diff_eq!(relative.x, 30.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(relative.y, 50.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn visible_fraction_of_half_hidden_element() {
        let viewport = Viewport::new(800.0, 600.0).bounds();
        let element = Rectangle::new(Point::new(0.0, 500.0), Size::new(100.0, 200.0));
        assert_abs_diff_eq!(visible_fraction(element, viewport), 0.5, epsilon = 1e-5);
    }

    #[test]
    fn visible_fraction_outside_viewport_is_zero() {
        let viewport = Viewport::new(800.0, 600.0).bounds();
        let below = Rectangle::new(Point::new(0.0, 900.0), Size::new(100.0, 100.0));
        let empty = Rectangle::new(Point::new(0.0, 0.0), Size::new(0.0, 100.0));
        assert_abs_diff_eq!(visible_fraction(below, viewport), 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(visible_fraction(empty, viewport), 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn farthest_corner_from_centre_is_half_diagonal() {
        let viewport = Viewport::new(600.0, 800.0);
        let distance = viewport.farthest_corner_distance(Point::new(300.0, 400.0));
        assert_abs_diff_eq!(distance, 500.0, epsilon = 1e-3);
    }

    #[test]
    fn farthest_corner_from_top_left_is_full_diagonal() {
        let viewport = Viewport::new(600.0, 800.0);
        let distance = viewport.farthest_corner_distance(Point::ORIGIN);
        assert_abs_diff_eq!(distance, 1000.0, epsilon = 1e-3);
    }

    #[test]
    fn top_center_clamps_into_short_viewports() {
        let viewport = Viewport::new(400.0, 50.0);
        let origin = viewport.top_center(80.0);
        assert_abs_diff_eq!(origin.x, 200.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(origin.y, 50.0, epsilon = F32_EPSILON);
    }
}
