// Copyright 2025 the SciGlyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas measurement.

use kurbo::Point;
use sciglyph_core::Surface;

use crate::error::{ConfigIssue, GlyphError};

/// Size and center of a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasMetrics {
    /// Surface width.
    pub width: f64,
    /// Surface height.
    pub height: f64,
    /// Horizontal midpoint.
    pub center_x: f64,
    /// Vertical midpoint.
    pub center_y: f64,
}

impl CanvasMetrics {
    /// Derives metrics from a width/height pair.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            center_x: width / 2.0,
            center_y: height / 2.0,
        }
    }

    /// Returns the midpoint as a point.
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Returns the radius of the largest circle centered on the canvas.
    pub fn outer_radius(&self) -> f64 {
        self.width.min(self.height) / 2.0
    }
}

/// Reads the declared size of `surface` and derives its midpoint.
pub fn canvas_metrics(surface: &Surface) -> Result<CanvasMetrics, GlyphError> {
    let Some(size) = surface.size() else {
        return Err(ConfigIssue::MissingCanvasSize.into());
    };
    let valid = |v: f64| v.is_finite() && v >= 0.0;
    if !valid(size.width) || !valid(size.height) {
        return Err(ConfigIssue::MissingCanvasSize.into());
    }
    Ok(CanvasMetrics::new(size.width, size.height))
}
