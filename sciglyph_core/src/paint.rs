// Copyright 2025 the SciGlyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill and stroke styling carried by nodes.

use kurbo::Stroke;
use peniko::color::palette::css;
use peniko::{Brush, Color};

/// A stroke: paint plus `kurbo` stroke parameters (width, dashes).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke geometry (width, joins, dash pattern).
    pub stroke: Stroke,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke: Stroke::new(stroke_width),
        }
    }

    /// Sets a dash pattern, e.g. `[8.0, 4.0]` for SVG's `stroke-dasharray="8 4"`.
    pub fn with_dashes(mut self, offset: f64, pattern: &[f64]) -> Self {
        self.stroke = self.stroke.with_dashes(offset, pattern.iter());
        self
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f64 {
        self.stroke.width
    }

    /// Returns the dash pattern (empty for a solid stroke).
    pub fn dashes(&self) -> &[f64] {
        &self.stroke.dash_pattern
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Fill and stroke for a shape node.
///
/// `fill: None` leaves the fill unset, which renderers treat as their default (black for SVG).
/// Use [`Paint::without_fill`] for an explicitly empty fill.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Paint {
    /// Fill paint, if set.
    pub fill: Option<Brush>,
    /// Fill opacity in `0..=1`, if set.
    pub fill_opacity: Option<f64>,
    /// Outline stroke, if any.
    pub stroke: Option<StrokeStyle>,
}

impl Paint {
    /// A paint with only a fill.
    pub fn fill(fill: impl Into<Brush>) -> Self {
        Self {
            fill: Some(fill.into()),
            ..Self::default()
        }
    }

    /// A paint with only a stroke and an empty fill.
    pub fn stroke(stroke: StrokeStyle) -> Self {
        Self::default().without_fill().with_stroke(stroke)
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Sets an explicitly empty fill (SVG `fill="none"`).
    pub fn without_fill(mut self) -> Self {
        self.fill = Some(Brush::Solid(Color::TRANSPARENT));
        self
    }

    /// Sets the fill opacity.
    pub fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = Some(opacity);
        self
    }

    /// Sets the outline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }
}
