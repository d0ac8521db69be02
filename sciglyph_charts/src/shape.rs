// Copyright 2025 the SciGlyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement helpers for circles and polygons.

use kurbo::{Affine, Point};
use sciglyph_core::{CircleNode, PolygonNode};

/// Places a circle at `(x, y)` in its parent's coordinates.
///
/// The radius is passed through unchanged, negative values included.
pub fn placed_circle(x: f64, y: f64, radius: f64) -> CircleNode {
    CircleNode::new((x, y), radius)
}

/// Places a polygon rotated by `rotation_degrees` (clockwise on screen) about the local origin.
pub fn placed_polygon(
    points: impl IntoIterator<Item = Point>,
    rotation_degrees: f64,
) -> PolygonNode {
    PolygonNode::new(points).with_transform(Affine::rotate(rotation_degrees.to_radians()))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn circle_keeps_negative_radius() {
        let c = placed_circle(3.0, 4.0, -2.0);
        assert_eq!(c.center, Point::new(3.0, 4.0));
        assert_eq!(c.radius, -2.0);
    }

    #[test]
    fn polygon_rotation_is_clockwise_about_origin() {
        let p = placed_polygon([Point::new(0.0, 10.0)], 90.0);
        let rotated = p.transform * p.points[0];
        assert!((rotated - Point::new(-10.0, 0.0)).hypot() < 1e-9, "got {rotated:?}");
    }
}
