// Copyright 2025 the SciGlyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radial area + histogram combo glyph.
//!
//! Layout, from the center outwards:
//! - a translucent background ring between `inner_radius` and `middle_radius`,
//! - a closed radial area sampled at 96 angles inside that ring,
//! - one histogram sector per 15° slot outside `middle_radius`,
//! - hour-style axis ticks on the middle circle, a center title and a dashed mean circle.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use core::f64::consts::{PI, TAU};

use kurbo::{Affine, Point};
use peniko::Color;
use peniko::color::palette::css;
use sciglyph_core::{
    CircleNode, Group, LineNode, Node, Paint, PathNode, StrokeStyle, Surface, TextAnchor,
    TextNode,
};

use crate::area::closed_radial_area;
use crate::canvas::{CanvasMetrics, canvas_metrics};
use crate::error::{ConfigIssue, GlyphError, check_radius};
use crate::scale::ScaleLinear;
use crate::sector::AnnularSector;
use crate::stats;

/// Angular width of one histogram slot (and one axis-tick step), in degrees.
pub const SLOT_DEGREES: f64 = 15.0;
/// Number of histogram slots around the circle.
pub const MAX_HISTOGRAM_SLOTS: usize = 24;
/// Gap between neighbouring histogram sectors, in radians.
pub const HISTOGRAM_PAD_ANGLE: f64 = 0.02;
/// Number of angle samples of the radial area (`π/48` apart).
pub const RADIAL_AREA_SAMPLES: usize = 96;

const TICK_LENGTH: f64 = 5.0;
const TICK_WIDTH: f64 = 1.5;
const TICK_LABEL_OFFSET: f64 = 12.0;
const MEAN_STROKE_WIDTH: f64 = 2.0;
const MEAN_DASHES: [f64; 2] = [8.0, 4.0];
const CENTER_TEXT_WEIGHT: u16 = 600;

/// One labelled tick on the middle circle.
///
/// `slot` uses the histogram's 15°-per-slot convention, so slot `6` sits a quarter turn from
/// slot `0`. Slots may be fractional.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Slot position.
    pub slot: f64,
    /// Label text.
    pub label: String,
}

impl AxisTick {
    /// Creates a tick at `slot` with an arbitrary label.
    pub fn new(slot: f64, label: impl Into<String>) -> Self {
        Self {
            slot,
            label: label.into(),
        }
    }

    /// Creates an hour-of-day tick, labelled like `"6h"`.
    pub fn hour(hour: u32) -> Self {
        Self::new(f64::from(hour), format!("{hour}h"))
    }

    /// Rotation of the tick group in degrees (`-90°` puts slot 0 at twelve o'clock).
    pub fn angle_degrees(&self) -> f64 {
        -90.0 + self.slot * SLOT_DEGREES
    }
}

/// Configuration for [`radial_area_glyph`].
#[derive(Clone, Debug, PartialEq)]
pub struct RadialAreaConfig {
    /// Histogram magnitudes, one per 15° slot. Values past the 24th wrap around and overlap.
    pub histogram: Vec<f64>,
    /// Radial area magnitudes, exactly [`RADIAL_AREA_SAMPLES`] values.
    pub radial_area: Vec<f64>,
    /// Axis ticks drawn on the middle circle.
    pub axis_ticks: Vec<AxisTick>,
    /// Theme color for every filled element.
    pub theme: Color,
    /// Title drawn at the center.
    pub center_text: String,
    /// Opacity of the background ring.
    pub inner_ring_opacity: f64,
    /// Opacity of the radial area.
    pub area_opacity: f64,
    /// Inner radius of the background ring and the radial area baseline.
    pub inner_radius: f64,
    /// Outer radius of the background ring and the histogram baseline.
    pub middle_radius: f64,
    /// Font size of the center title.
    pub center_text_font_size: f64,
    /// Font size of the axis tick labels.
    pub axis_font_size: f64,
}

impl RadialAreaConfig {
    /// Creates a config with empty series and default styling.
    pub fn new(inner_radius: f64, middle_radius: f64) -> Self {
        Self {
            histogram: Vec::new(),
            radial_area: Vec::new(),
            axis_ticks: Vec::new(),
            theme: css::BLACK,
            center_text: String::new(),
            inner_ring_opacity: 0.5,
            area_opacity: 0.7,
            inner_radius,
            middle_radius,
            center_text_font_size: 16.0,
            axis_font_size: 12.0,
        }
    }

    /// Sets the histogram series.
    pub fn with_histogram(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.histogram = values.into_iter().collect();
        self
    }

    /// Sets the radial area series.
    pub fn with_radial_area(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.radial_area = values.into_iter().collect();
        self
    }

    /// Sets the axis ticks.
    pub fn with_axis_ticks(mut self, ticks: impl IntoIterator<Item = AxisTick>) -> Self {
        self.axis_ticks = ticks.into_iter().collect();
        self
    }

    /// Sets the theme color.
    pub fn with_theme(mut self, theme: Color) -> Self {
        self.theme = theme;
        self
    }

    /// Sets the center title.
    pub fn with_center_text(mut self, text: impl Into<String>) -> Self {
        self.center_text = text.into();
        self
    }

    /// Sets the background ring opacity.
    pub fn with_inner_ring_opacity(mut self, opacity: f64) -> Self {
        self.inner_ring_opacity = opacity;
        self
    }

    /// Sets the radial area opacity.
    pub fn with_area_opacity(mut self, opacity: f64) -> Self {
        self.area_opacity = opacity;
        self
    }

    /// Sets the center title font size.
    pub fn with_center_text_font_size(mut self, font_size: f64) -> Self {
        self.center_text_font_size = font_size;
        self
    }

    /// Sets the axis label font size.
    pub fn with_axis_font_size(mut self, font_size: f64) -> Self {
        self.axis_font_size = font_size;
        self
    }
}

/// The two data scales of a radial area glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialAreaScales {
    /// `[0, max(histogram)] -> [middle_radius, outer_radius]`.
    pub histogram: ScaleLinear,
    /// `[0, max(radial_area)] -> [inner_radius, middle_radius]`.
    pub radial_area: ScaleLinear,
}

impl RadialAreaScales {
    /// Validates the config and derives both scales.
    pub fn new(metrics: &CanvasMetrics, config: &RadialAreaConfig) -> Result<Self, GlyphError> {
        let inner = check_radius("inner_radius", config.inner_radius)?;
        let middle = check_radius("middle_radius", config.middle_radius)?;

        if config.histogram.len() > MAX_HISTOGRAM_SLOTS {
            log::warn!(
                "{} histogram values exceed {MAX_HISTOGRAM_SLOTS} slots; extra sectors overlap",
                config.histogram.len()
            );
        }
        let histogram = ScaleLinear::zero_based(
            "histogram",
            &config.histogram,
            (middle, metrics.outer_radius()),
        )?;
        let radial_area =
            ScaleLinear::zero_based("radial_area", &config.radial_area, (inner, middle))?;
        Ok(Self {
            histogram,
            radial_area,
        })
    }
}

/// Returns one padded sector per histogram value, slot `i` spanning `i*15°..(i+1)*15°`.
pub fn histogram_sectors(config: &RadialAreaConfig, scale: &ScaleLinear) -> Vec<AnnularSector> {
    config
        .histogram
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let start = (i as f64 * SLOT_DEGREES).to_radians();
            let end = ((i + 1) as f64 * SLOT_DEGREES).to_radians();
            AnnularSector::new(config.middle_radius, scale.map(v), start, end)
                .with_pad_angle(HISTOGRAM_PAD_ANGLE)
        })
        .collect()
}

/// Builds the glyph as a single group translated to the canvas center.
pub fn radial_area_nodes(
    metrics: &CanvasMetrics,
    config: &RadialAreaConfig,
) -> Result<Node, GlyphError> {
    let scales = RadialAreaScales::new(metrics, config)?;
    if config.radial_area.len() != RADIAL_AREA_SAMPLES {
        return Err(ConfigIssue::LengthMismatch {
            series: "radial_area",
            expected: RADIAL_AREA_SAMPLES,
            actual: config.radial_area.len(),
        }
        .into());
    }
    let mean = stats::mean(&config.radial_area).unwrap_or(0.0);

    let ring = AnnularSector::new(config.inner_radius, config.middle_radius, 0.0, TAU).node(
        Paint::fill(config.theme).with_fill_opacity(config.inner_ring_opacity),
    );

    let mut histogram = Group::new();
    for sector in histogram_sectors(config, &scales.histogram) {
        histogram.push(sector.node(Paint::fill(config.theme)));
    }

    let angles = stats::range(0.0, TAU, PI / 48.0);
    let area_path = closed_radial_area(
        config.inner_radius,
        |i| scales.radial_area.map(config.radial_area[i]),
        &angles,
    );
    let area = PathNode::new(area_path)
        .with_paint(Paint::fill(config.theme).with_fill_opacity(config.area_opacity));

    let mut axis = Group::new();
    for tick in &config.axis_ticks {
        axis.push(axis_tick(tick, config));
    }

    let title = TextNode::new(Point::ORIGIN, config.center_text.clone())
        .with_anchor(TextAnchor::Middle)
        .with_font_size(config.center_text_font_size)
        .with_font_weight(CENTER_TEXT_WEIGHT)
        .with_fill(Color::from_rgb8(0xaa, 0xaa, 0xaa));

    let mean_circle = CircleNode::new(Point::ORIGIN, scales.radial_area.map(mean)).with_paint(
        Paint::stroke(
            StrokeStyle::solid(config.theme, MEAN_STROKE_WIDTH).with_dashes(0.0, &MEAN_DASHES),
        ),
    );

    log::debug!(
        "radial area glyph: {} histogram sectors, {} area samples, {} axis ticks, mean radius {:.2}",
        histogram.len(),
        angles.len(),
        axis.len(),
        mean_circle.radius
    );

    let root = Group::translated(metrics.center_x, metrics.center_y)
        .with_child(Group::new().with_child(ring))
        .with_child(histogram)
        .with_child(Group::new().with_child(area))
        .with_child(axis)
        .with_child(Group::new().with_child(title))
        .with_child(Group::new().with_child(mean_circle));
    Ok(root.into())
}

fn axis_tick(tick: &AxisTick, config: &RadialAreaConfig) -> Group {
    let transform = Affine::rotate(tick.angle_degrees().to_radians())
        * Affine::translate((config.middle_radius, 0.0));
    let line = LineNode::new(Point::ORIGIN, (-TICK_LENGTH, 0.0))
        .with_stroke(StrokeStyle::solid(css::BLACK, TICK_WIDTH));
    let label = TextNode::new(Point::ORIGIN, tick.label.clone())
        .with_anchor(TextAnchor::Middle)
        .with_font_size(config.axis_font_size)
        .with_transform(
            Affine::rotate(90_f64.to_radians()) * Affine::translate((0.0, TICK_LABEL_OFFSET)),
        );
    log::trace!("axis tick {:?} at {:.1}°", tick.label, tick.angle_degrees());
    Group::new()
        .with_transform(transform)
        .with_child(line)
        .with_child(label)
}

/// Draws a radial area + histogram glyph onto `surface`.
///
/// Nothing is appended if the config is rejected.
pub fn radial_area_glyph(
    surface: &mut Surface,
    config: &RadialAreaConfig,
) -> Result<(), GlyphError> {
    let metrics = canvas_metrics(surface)?;
    let node = radial_area_nodes(&metrics, config)?;
    surface.append(node);
    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn config() -> RadialAreaConfig {
        RadialAreaConfig::new(10.0, 20.0)
            .with_histogram((0..24).map(|i| f64::from(i % 5 + 1)))
            .with_radial_area((0..96).map(|i| [2.0, 4.0, 6.0][i % 3]))
            .with_axis_ticks([0, 6, 12, 18].map(AxisTick::hour))
            .with_theme(css::STEEL_BLUE)
            .with_center_text("Flow")
    }

    fn root_group(node: &Node) -> &Group {
        node.as_group().expect("glyph root is a group")
    }

    #[test]
    fn draws_one_translated_group() {
        let mut surface = Surface::new(200.0, 100.0);
        radial_area_glyph(&mut surface, &config()).unwrap();
        assert_eq!(surface.child_count(), 1);
        let root = root_group(&surface.children()[0]);
        assert_eq!(root.transform * Point::ORIGIN, Point::new(100.0, 50.0));
        assert_eq!(root.len(), 6);
        assert_eq!(root.children[1].as_group().unwrap().len(), 24);
        assert_eq!(root.children[3].as_group().unwrap().len(), 4);
    }

    #[test]
    fn full_histogram_tiles_the_circle_without_overlap() {
        let cfg = config();
        let metrics = CanvasMetrics::new(200.0, 200.0);
        let scales = RadialAreaScales::new(&metrics, &cfg).unwrap();
        let sectors = histogram_sectors(&cfg, &scales.histogram);
        assert_eq!(sectors.len(), 24);
        let expected = SLOT_DEGREES.to_radians() - HISTOGRAM_PAD_ANGLE;
        for pair in sectors.windows(2) {
            let (_, end) = pair[0].padded_angles();
            let (start, _) = pair[1].padded_angles();
            assert!(end < start, "sectors overlap: {end} >= {start}");
        }
        for s in &sectors {
            assert!((s.sweep() - expected).abs() < 1e-12, "sweep {}", s.sweep());
        }
        let (_, last_end) = sectors[23].padded_angles();
        assert!(last_end < TAU);
    }

    #[test]
    fn histogram_max_reaches_outer_radius() {
        let cfg = config();
        let metrics = CanvasMetrics::new(300.0, 200.0);
        let scales = RadialAreaScales::new(&metrics, &cfg).unwrap();
        let sectors = histogram_sectors(&cfg, &scales.histogram);
        let longest = sectors
            .iter()
            .map(|s| s.outer_radius)
            .fold(0.0_f64, f64::max);
        assert_eq!(longest, 100.0);
    }

    #[test]
    fn mean_circle_sits_at_scaled_mean() {
        let metrics = CanvasMetrics::new(200.0, 200.0);
        let node = radial_area_nodes(&metrics, &config()).unwrap();
        let root = root_group(&node);
        let circle = root.children[5].as_group().unwrap().children[0]
            .as_circle()
            .unwrap();
        // mean 4 of max 6 on [10, 20]
        assert!((circle.radius - (10.0 + 10.0 * 4.0 / 6.0)).abs() < 1e-9);
        let stroke = circle.paint.stroke.as_ref().unwrap();
        assert_eq!(stroke.dashes(), &MEAN_DASHES);
        assert_eq!(stroke.width(), MEAN_STROKE_WIDTH);
    }

    #[test]
    fn axis_tick_is_rotated_then_pushed_to_middle_radius() {
        let metrics = CanvasMetrics::new(200.0, 200.0);
        let node = radial_area_nodes(&metrics, &config()).unwrap();
        let axis = root_group(&node).children[3].as_group().unwrap();
        // 6h: -90 + 90 = 0 degrees, so the tick sits on the positive x axis.
        let six = axis.children[1].as_group().unwrap();
        let p = six.transform * Point::ORIGIN;
        assert!((p - Point::new(20.0, 0.0)).hypot() < 1e-9, "got {p:?}");
        let label = six.children[1].as_text().unwrap();
        assert_eq!(label.text, "6h");
        assert_eq!(label.anchor, TextAnchor::Middle);
        // 0h points straight up.
        let zero = axis.children[0].as_group().unwrap();
        let p = zero.transform * Point::ORIGIN;
        assert!((p - Point::new(0.0, -20.0)).hypot() < 1e-9, "got {p:?}");
    }

    #[test]
    fn empty_histogram_is_rejected_without_drawing() {
        let mut surface = Surface::new(200.0, 200.0);
        let cfg = config().with_histogram(vec![]);
        let err = radial_area_glyph(&mut surface, &cfg).unwrap_err();
        assert_eq!(
            err,
            GlyphError::InvalidConfig(ConfigIssue::EmptySeries {
                series: "histogram"
            })
        );
        assert_eq!(surface.child_count(), 0);
    }

    #[test]
    fn radial_area_needs_exactly_96_samples() {
        let mut surface = Surface::new(200.0, 200.0);
        let cfg = config().with_radial_area(vec![2.0, 4.0, 6.0]);
        let err = radial_area_glyph(&mut surface, &cfg).unwrap_err();
        assert_eq!(
            err,
            GlyphError::InvalidConfig(ConfigIssue::LengthMismatch {
                series: "radial_area",
                expected: 96,
                actual: 3,
            })
        );
        assert_eq!(surface.child_count(), 0);
    }

    #[test]
    fn more_than_24_histogram_values_wrap_around_and_overlap() {
        let cfg = config().with_histogram(vec![1.0; 25]);
        let node = radial_area_nodes(&CanvasMetrics::new(100.0, 100.0), &cfg).unwrap();
        let histogram = node.as_group().unwrap().children[1].as_group().unwrap();
        assert_eq!(histogram.len(), 25);
        let scale = ScaleLinear::new((0.0, 1.0), (40.0, 50.0));
        let sectors = histogram_sectors(&cfg, &scale);
        assert!((sectors[24].start_angle - TAU).abs() < 1e-12, "slot 24 starts a second turn");
    }

    #[test]
    fn all_zero_radial_area_is_degenerate() {
        let cfg = config().with_radial_area(vec![0.0; 96]);
        let err = radial_area_nodes(&CanvasMetrics::new(100.0, 100.0), &cfg).unwrap_err();
        assert!(matches!(err, GlyphError::DegenerateScale { series: "radial_area", .. }));
    }

    #[test]
    fn surface_without_size_is_rejected() {
        let mut surface = Surface::without_size();
        let err = radial_area_glyph(&mut surface, &config()).unwrap_err();
        assert_eq!(
            err,
            GlyphError::InvalidConfig(ConfigIssue::MissingCanvasSize)
        );
        assert_eq!(surface.child_count(), 0);
    }
}
