// Copyright 2025 the SciGlyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Speedometer-style instrument panel glyph.
//!
//! The gauge sweeps 240°, leaving a 120° gap at the bottom. Angles below use the d3 arc
//! convention (zero at twelve o'clock, clockwise); the pointer instead uses an SVG-style
//! rotation of a downward-pointing triangle, so pointer rotation `ρ` points at arc angle
//! `ρ - 180°`.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;
use peniko::color::palette::css;
use sciglyph_core::{CircleNode, Group, Node, Paint, StrokeStyle, Surface, TextAnchor, TextNode};

use crate::canvas::{CanvasMetrics, canvas_metrics};
use crate::error::{GlyphError, check_radius};
use crate::scale::{ScaleColor, ScaleLinear};
use crate::sector::{AnnularSector, polar_point};
use crate::shape::placed_polygon;
use crate::stats;

/// Pointer rotation (degrees) for a value of zero and for `pointer_max`.
pub const POINTER_ROTATION_RANGE: (f64, f64) = (60.0, 300.0);
/// Arc angles (degrees) of the gauge's start and end.
pub const GAUGE_SWEEP_DEGREES: (f64, f64) = (-120.0, 120.0);
/// Number of dial-tick sectors.
pub const DIAL_TICK_COUNT: usize = 12;
/// Start angle of the first dial tick, in degrees.
pub const DIAL_TICK_START_DEGREES: f64 = -140.0;
/// Angular step between dial ticks, in degrees.
pub const DIAL_TICK_STEP_DEGREES: f64 = 20.0;
/// Angle of the first size circle, in degrees.
pub const SIZE_CIRCLE_START_DEGREES: f64 = -130.0;
/// Angular step between size circles, in degrees.
pub const SIZE_CIRCLE_STEP_DEGREES: f64 = 15.0;
/// Radius range of the size circles.
pub const SIZE_CIRCLE_RADIUS_RANGE: (f64, f64) = (1.0, 9.0);
/// Rotation offset of the two end-of-scale labels from straight down, in degrees.
pub const END_LABEL_OFFSET_DEGREES: f64 = 60.0;

const DIAL_TICK_PAD_ANGLE: f64 = 0.06;
const RING_STROKE_WIDTH: f64 = 2.0;

// Radii as fractions of the gauge radius.
const RING: f64 = 0.95;
const SIZE_RING: f64 = 0.85;
const DIAL_BAND: (f64, f64) = (0.68, 0.76);
const TOTAL_BAND: (f64, f64) = (0.58, 0.64);
const UPPER_BAND: (f64, f64) = (0.50, 0.55);
const INNER_BAND: (f64, f64) = (0.42, 0.47);
const LOWER_BAND: (f64, f64) = (0.34, 0.39);
const END_LABELS: f64 = 0.28;
const HUB: f64 = 0.08;
const POINTER_LENGTH: f64 = 0.6;
const POINTER_HALF_WIDTH: f64 = 0.04;

/// A partial arc indicator: `mean` drawn on a `[0, max]` scale.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ArcIndicator {
    /// Displayed value.
    pub mean: f64,
    /// Value that fills the whole gauge sweep.
    pub max: f64,
}

impl ArcIndicator {
    /// Creates an indicator.
    pub fn new(mean: f64, max: f64) -> Self {
        Self { mean, max }
    }
}

/// Which value drives the lower arc.
///
/// The established glyph drives the lower arc with the *inner* indicator's mean (on the lower
/// indicator's own scale). That coupling is kept as the default so existing figures render
/// unchanged; `OwnMean` uses the lower indicator's own mean instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LowerArcSource {
    /// Use `inner.mean`.
    #[default]
    InnerMean,
    /// Use `lower.mean`.
    OwnMean,
}

/// Configuration for [`instrument_panel_glyph`].
#[derive(Clone, Debug, PartialEq)]
pub struct InstrumentPanelConfig {
    /// Value at the pointer's end stop.
    pub pointer_max: f64,
    /// Value the pointer shows.
    pub pointer_mean: f64,
    /// Sizes of the small circles on the outer ring.
    pub sizes: Vec<f64>,
    /// Outermost partial arc.
    pub total: ArcIndicator,
    /// Inner composition share.
    pub inner: ArcIndicator,
    /// Upper auxiliary indicator.
    pub upper: ArcIndicator,
    /// Lower auxiliary indicator.
    pub lower: ArcIndicator,
    /// Value source of the lower arc.
    pub lower_arc_source: LowerArcSource,
    /// Theme color.
    pub theme: Color,
    /// Color of the first dial tick; ticks ramp from this to `theme`.
    pub neutral: Color,
    /// Font size of the end-of-scale labels.
    pub label_font_size: f64,
    /// Gauge radius; defaults to half the shorter canvas side.
    pub radius: Option<f64>,
}

impl InstrumentPanelConfig {
    /// Creates a config with the given pointer scale and default styling.
    pub fn new(pointer_max: f64, pointer_mean: f64) -> Self {
        Self {
            pointer_max,
            pointer_mean,
            sizes: Vec::new(),
            total: ArcIndicator::default(),
            inner: ArcIndicator::default(),
            upper: ArcIndicator::default(),
            lower: ArcIndicator::default(),
            lower_arc_source: LowerArcSource::default(),
            theme: css::BLACK,
            neutral: css::LIGHT_GRAY,
            label_font_size: 12.0,
            radius: None,
        }
    }

    /// Sets the size series.
    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = f64>) -> Self {
        self.sizes = sizes.into_iter().collect();
        self
    }

    /// Sets the total indicator.
    pub fn with_total(mut self, indicator: ArcIndicator) -> Self {
        self.total = indicator;
        self
    }

    /// Sets the inner indicator.
    pub fn with_inner(mut self, indicator: ArcIndicator) -> Self {
        self.inner = indicator;
        self
    }

    /// Sets the upper indicator.
    pub fn with_upper(mut self, indicator: ArcIndicator) -> Self {
        self.upper = indicator;
        self
    }

    /// Sets the lower indicator.
    pub fn with_lower(mut self, indicator: ArcIndicator) -> Self {
        self.lower = indicator;
        self
    }

    /// Sets the value source of the lower arc.
    pub fn with_lower_arc_source(mut self, source: LowerArcSource) -> Self {
        self.lower_arc_source = source;
        self
    }

    /// Sets the theme color.
    pub fn with_theme(mut self, theme: Color) -> Self {
        self.theme = theme;
        self
    }

    /// Sets the neutral end of the dial tick ramp.
    pub fn with_neutral(mut self, neutral: Color) -> Self {
        self.neutral = neutral;
        self
    }

    /// Sets the end label font size.
    pub fn with_label_font_size(mut self, font_size: f64) -> Self {
        self.label_font_size = font_size;
        self
    }

    /// Sets the gauge radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Returns the value driving the lower arc.
    pub fn lower_arc_value(&self) -> f64 {
        match self.lower_arc_source {
            LowerArcSource::InnerMean => self.inner.mean,
            LowerArcSource::OwnMean => self.lower.mean,
        }
    }
}

/// Returns the pointer rotation in degrees: `[0, pointer_max] -> [60°, 300°]`.
pub fn pointer_rotation(config: &InstrumentPanelConfig) -> Result<f64, GlyphError> {
    stats::validate_series("pointer_mean", &[config.pointer_mean])?;
    let scale = ScaleLinear::from_max("pointer_max", config.pointer_max, POINTER_ROTATION_RANGE)?;
    Ok(scale.map(config.pointer_mean))
}

/// Returns the partial arc of an indicator, from the gauge start to `value` on `[0, max]`.
fn indicator_arc(
    name: &'static str,
    indicator: ArcIndicator,
    value: f64,
    band: (f64, f64),
) -> Result<AnnularSector, GlyphError> {
    stats::validate_series(name, &[value])?;
    let (start, end) = GAUGE_SWEEP_DEGREES;
    let range = (start.to_radians(), end.to_radians());
    let scale = ScaleLinear::from_max(name, indicator.max, range)?;
    Ok(AnnularSector::new(band.0, band.1, range.0, scale.map(value)))
}

/// The four partial arcs in paint order: total, upper, inner, lower.
pub fn indicator_arcs(
    config: &InstrumentPanelConfig,
    radius: f64,
) -> Result<[AnnularSector; 4], GlyphError> {
    let band = |(a, b): (f64, f64)| (a * radius, b * radius);
    Ok([
        indicator_arc("total", config.total, config.total.mean, band(TOTAL_BAND))?,
        indicator_arc("upper", config.upper, config.upper.mean, band(UPPER_BAND))?,
        indicator_arc("inner", config.inner, config.inner.mean, band(INNER_BAND))?,
        indicator_arc(
            "lower",
            config.lower,
            config.lower_arc_value(),
            band(LOWER_BAND),
        )?,
    ])
}

/// Builds the glyph as a single group translated to the canvas center.
pub fn instrument_panel_nodes(
    metrics: &CanvasMetrics,
    config: &InstrumentPanelConfig,
) -> Result<Node, GlyphError> {
    let radius = check_radius("radius", config.radius.unwrap_or(metrics.outer_radius()))?;
    let rotation = pointer_rotation(config)?;
    let size_scale = ScaleLinear::zero_based("sizes", &config.sizes, SIZE_CIRCLE_RADIUS_RANGE)?;
    let arcs = indicator_arcs(config, radius)?;

    let frame = Group::new()
        .with_child(
            CircleNode::new(Point::ORIGIN, RING * radius).with_paint(Paint::stroke(
                StrokeStyle::solid(config.theme, RING_STROKE_WIDTH),
            )),
        )
        .with_child(
            CircleNode::new(Point::ORIGIN, HUB * radius).with_paint(Paint::fill(config.theme)),
        );

    let half = POINTER_HALF_WIDTH * radius;
    let pointer = placed_polygon(
        [
            Point::new(-half, 0.0),
            Point::new(half, 0.0),
            Point::new(0.0, POINTER_LENGTH * radius),
        ],
        rotation,
    )
    .with_paint(Paint::fill(config.theme));

    let ramp = ScaleColor::new(
        (0.0, (DIAL_TICK_COUNT - 1) as f64),
        config.neutral,
        config.theme,
    );
    let mut dial = Group::new();
    for i in 0..DIAL_TICK_COUNT {
        let start = DIAL_TICK_START_DEGREES + DIAL_TICK_STEP_DEGREES * i as f64;
        let sector = AnnularSector::new(
            DIAL_BAND.0 * radius,
            DIAL_BAND.1 * radius,
            start.to_radians(),
            (start + DIAL_TICK_STEP_DEGREES).to_radians(),
        )
        .with_pad_angle(DIAL_TICK_PAD_ANGLE);
        dial.push(sector.node(Paint::fill(ramp.map(i as f64))));
    }

    let mut sizes = Group::new();
    for (i, &v) in config.sizes.iter().enumerate() {
        let angle = (SIZE_CIRCLE_START_DEGREES + SIZE_CIRCLE_STEP_DEGREES * i as f64).to_radians();
        let center = polar_point(SIZE_RING * radius, angle);
        sizes.push(
            CircleNode::new(center, size_scale.map(v)).with_paint(Paint::fill(config.theme)),
        );
    }

    let mut indicators = Group::new();
    for arc in &arcs {
        indicators.push(arc.node(Paint::fill(config.theme)));
    }

    let label = |text: String, rotation_degrees: f64| {
        let pos = polar_point(END_LABELS * radius, (rotation_degrees - 180.0).to_radians());
        TextNode::new(pos, text)
            .with_anchor(TextAnchor::Middle)
            .with_font_size(config.label_font_size)
            .with_fill(config.theme)
    };
    let labels = Group::new()
        .with_child(label(String::from("0"), END_LABEL_OFFSET_DEGREES))
        .with_child(label(
            config.pointer_max.to_string(),
            -END_LABEL_OFFSET_DEGREES,
        ));

    log::debug!(
        "instrument panel glyph: pointer {rotation:.1}°, {} size circles, lower arc from {:?}",
        sizes.len(),
        config.lower_arc_source
    );

    let root = Group::translated(metrics.center_x, metrics.center_y)
        .with_child(frame)
        .with_child(pointer)
        .with_child(dial)
        .with_child(sizes)
        .with_child(indicators)
        .with_child(labels);
    Ok(root.into())
}

/// Draws an instrument panel glyph onto `surface`.
///
/// Nothing is appended if the config is rejected.
pub fn instrument_panel_glyph(
    surface: &mut Surface,
    config: &InstrumentPanelConfig,
) -> Result<(), GlyphError> {
    let metrics = canvas_metrics(surface)?;
    let node = instrument_panel_nodes(&metrics, config)?;
    surface.append(node);
    Ok(())
}
