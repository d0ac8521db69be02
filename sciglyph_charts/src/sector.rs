// Copyright 2025 the SciGlyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annular sectors (ring segments).
//!
//! Angles follow the d3 `arc` convention: radians, zero at twelve o'clock, increasing
//! clockwise on screen (y pointing down). `kurbo` measures from the positive x axis, so the
//! conversion subtracts a quarter turn.

use core::f64::consts::FRAC_PI_2;

use kurbo::{BezPath, Circle, Point, Shape};
use sciglyph_core::{Paint, PathNode};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Converts a d3-convention angle and radius into a point relative to the center.
pub fn polar_point(radius: f64, angle: f64) -> Point {
    Point::new(radius * angle.sin(), -radius * angle.cos())
}

/// A ring segment bounded by two radii and two angles.
///
/// This is a plain value: [`AnnularSector::path`] can be evaluated any number of times and
/// always yields the same geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnularSector {
    /// Inner radius (0 for a pie slice).
    pub inner_radius: f64,
    /// Outer radius.
    pub outer_radius: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians. May be less than `start_angle` to sweep counter-clockwise.
    pub end_angle: f64,
    /// Angular gap removed from the sweep, split evenly between both ends.
    pub pad_angle: f64,
    /// Curve flattening tolerance when converting to a `BezPath`.
    pub tolerance: f64,
}

/// Describes a ring segment between `inner_radius` and `outer_radius`.
pub fn annular_sector(
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> AnnularSector {
    AnnularSector::new(inner_radius, outer_radius, start_angle, end_angle)
}

impl AnnularSector {
    /// Creates an unpadded sector.
    pub fn new(inner_radius: f64, outer_radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            pad_angle: 0.0,
            tolerance: 0.1,
        }
    }

    /// Sets the pad angle.
    pub fn with_pad_angle(mut self, pad_angle: f64) -> Self {
        self.pad_angle = pad_angle;
        self
    }

    /// Returns the start/end angles after padding.
    ///
    /// A pad wider than the sweep collapses the sector onto its mid angle.
    pub fn padded_angles(&self) -> (f64, f64) {
        let sweep = self.end_angle - self.start_angle;
        let dir = if sweep < 0.0 { -1.0 } else { 1.0 };
        let half_pad = self.pad_angle.max(0.0) / 2.0;
        if half_pad * 2.0 >= sweep * dir {
            let mid = self.start_angle + sweep / 2.0;
            return (mid, mid);
        }
        (
            self.start_angle + dir * half_pad,
            self.end_angle - dir * half_pad,
        )
    }

    /// Returns the signed sweep after padding.
    pub fn sweep(&self) -> f64 {
        let (a0, a1) = self.padded_angles();
        a1 - a0
    }

    /// Evaluates the sector outline, centered on the origin.
    pub fn path(&self) -> BezPath {
        let (a0, a1) = self.padded_angles();
        let circle = Circle::new(Point::ORIGIN, self.outer_radius);
        let segment = circle.segment(self.inner_radius, a0 - FRAC_PI_2, a1 - a0);
        segment.path_elements(self.tolerance).collect()
    }

    /// Evaluates the sector into a path node with the given paint.
    pub fn node(&self, paint: Paint) -> PathNode {
        PathNode::new(self.path()).with_paint(paint)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn polar_point_starts_at_twelve_and_turns_clockwise() {
        assert!(close(polar_point(10.0, 0.0), Point::new(0.0, -10.0)));
        assert!(close(polar_point(10.0, FRAC_PI_2), Point::new(10.0, 0.0)));
        assert!(close(polar_point(10.0, PI), Point::new(0.0, 10.0)));
    }

    #[test]
    fn path_evaluation_is_repeatable() {
        let s = annular_sector(10.0, 20.0, 0.3, 1.2).with_pad_angle(0.02);
        assert_eq!(s.path(), s.path());
    }

    #[test]
    fn first_quadrant_sector_lies_right_of_and_above_center() {
        let s = annular_sector(10.0, 20.0, 0.0, FRAC_PI_2);
        let bbox = s.path().bounding_box();
        assert!(bbox.x0 > -1e-3, "got {bbox:?}");
        assert!(bbox.y1 < 1e-3, "got {bbox:?}");
        assert!((bbox.x1 - 20.0).abs() < 1e-3, "got {bbox:?}");
        assert!((bbox.y0 + 20.0).abs() < 1e-3, "got {bbox:?}");
    }

    #[test]
    fn pad_shrinks_sweep_symmetrically() {
        let s = annular_sector(0.0, 1.0, 0.0, 1.0).with_pad_angle(0.2);
        let (a0, a1) = s.padded_angles();
        assert!((a0 - 0.1).abs() < 1e-12);
        assert!((a1 - 0.9).abs() < 1e-12);
        assert!((s.sweep() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn reversed_angles_sweep_the_other_way() {
        let s = annular_sector(0.0, 1.0, 1.0, 0.0).with_pad_angle(0.2);
        assert!((s.sweep() + 0.8).abs() < 1e-12);
    }

    #[test]
    fn oversized_pad_collapses_to_mid_angle() {
        let s = annular_sector(0.0, 1.0, 0.0, 0.1).with_pad_angle(1.0);
        assert_eq!(s.padded_angles(), (0.05, 0.05));
        assert_eq!(s.sweep(), 0.0);
    }
}
