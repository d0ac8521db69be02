// Copyright 2025 the SciGlyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed radial areas.
//!
//! This is the radial counterpart of a filled area chart: an outer boundary sampled at a list
//! of angles, linearly connected and closed, with a fixed inner radius cut out. It matches
//! d3's `areaRadial` with `curveLinearClosed`: the outer ring is emitted in angle order and the
//! inner ring in reverse, so non-zero filling leaves the inner disk empty.

use kurbo::BezPath;

use crate::sector::polar_point;

/// Builds the boundary of a closed radial area.
///
/// `outer_radius_of` is called once per sample with the sample index; `angles` use the same
/// convention as [`crate::AnnularSector`]. Callers are expected to have checked that every
/// index they will be asked for exists in their data.
pub fn closed_radial_area(
    inner_radius: f64,
    outer_radius_of: impl Fn(usize) -> f64,
    angles: &[f64],
) -> BezPath {
    let mut p = BezPath::new();
    if angles.is_empty() {
        return p;
    }

    for (i, &a) in angles.iter().enumerate() {
        let pt = polar_point(outer_radius_of(i), a);
        if i == 0 {
            p.move_to(pt);
        } else {
            p.line_to(pt);
        }
    }
    p.close_path();

    if inner_radius > 0.0 {
        for (i, &a) in angles.iter().rev().enumerate() {
            let pt = polar_point(inner_radius, a);
            if i == 0 {
                p.move_to(pt);
            } else {
                p.line_to(pt);
            }
        }
        p.close_path();
    }
    p
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::FRAC_PI_2;

    use kurbo::{PathEl, Point, Shape};

    use super::*;

    #[test]
    fn outer_ring_uses_per_index_radius() {
        let radii = [10.0, 20.0, 30.0, 40.0];
        let angles = [0.0, FRAC_PI_2, 2.0 * FRAC_PI_2, 3.0 * FRAC_PI_2];
        let p = closed_radial_area(0.0, |i| radii[i], &angles);
        let els = p.elements();
        assert_eq!(els.len(), 5, "4 vertices plus close");
        let PathEl::MoveTo(first) = els[0] else {
            panic!("expected a move");
        };
        assert!((first - Point::new(0.0, -10.0)).hypot() < 1e-9);
        let PathEl::LineTo(second) = els[1] else {
            panic!("expected a line");
        };
        assert!((second - Point::new(20.0, 0.0)).hypot() < 1e-9);
        assert_eq!(els[4], PathEl::ClosePath);
    }

    #[test]
    fn inner_ring_is_a_second_closed_subpath() {
        let angles = [0.0, 2.0, 4.0];
        let p = closed_radial_area(5.0, |_| 10.0, &angles);
        let moves = p
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count();
        assert_eq!(moves, 2);
        // Outer winding minus inner winding leaves a ring: the center is not inside.
        assert_eq!(p.winding(Point::ORIGIN), 0);
    }

    #[test]
    fn no_angles_no_path() {
        assert!(closed_radial_area(1.0, |_| 2.0, &[]).elements().is_empty());
    }
}
