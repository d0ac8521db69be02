// Copyright 2025 the SciGlyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial distribution glyph: a radial category chart around a Mercator basemap.
//!
//! From the outside in: ten outer sectors, a ring of marker circles, contiguous inner slices
//! whose widths encode their values, and a basemap with classified point observations fitted
//! into the central disk.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect};
use peniko::Color;
use peniko::color::palette::css;
use sciglyph_core::{Group, Node, Paint, PathNode, Surface};

use crate::canvas::{CanvasMetrics, canvas_metrics};
use crate::error::{ConfigIssue, GlyphError, check_radius};
use crate::geo::{GeoPoint, GeoPolygon, Mercator};
use crate::scale::ScaleLinear;
use crate::sector::{AnnularSector, polar_point};
use crate::shape::placed_circle;

/// Number of outer-ring sectors.
pub const OUTER_SECTOR_COUNT: usize = 10;
/// Angular width of one outer sector, in degrees.
pub const OUTER_SECTOR_DEGREES: f64 = 36.0;
/// Width of the largest inner slice, in degrees.
pub const INNER_SLICE_MAX_DEGREES: f64 = 50.0;
/// Radius range of the marker circles.
pub const MARKER_RADIUS_RANGE: (f64, f64) = (1.0, 9.0);

/// One inner slice: a value and the color it is drawn with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InnerSlice {
    /// Magnitude, encoded as angular width.
    pub value: f64,
    /// Fill color.
    pub color: Color,
}

impl InnerSlice {
    /// Creates a slice.
    pub fn new(value: f64, color: Color) -> Self {
        Self { value, color }
    }
}

/// One marker circle: a size and the color it is drawn with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Magnitude, encoded as circle radius.
    pub size: f64,
    /// Fill color.
    pub color: Color,
}

impl Marker {
    /// Creates a marker.
    pub fn new(size: f64, color: Color) -> Self {
        Self { size, color }
    }
}

/// Configuration for [`spatial_distribution_glyph`].
#[derive(Clone, Debug, PartialEq)]
pub struct SpatialDistributionConfig {
    /// Outer ring magnitudes, exactly [`OUTER_SECTOR_COUNT`] values.
    pub outer_arcs: Vec<f64>,
    /// Inner slices, laid out contiguously from twelve o'clock.
    pub inner_slices: Vec<InnerSlice>,
    /// Marker circles, evenly spaced on the marker ring.
    pub markers: Vec<Marker>,
    /// Basemap polygons.
    pub basemap: Vec<GeoPolygon>,
    /// Point observations drawn over the basemap.
    pub points: Vec<GeoPoint>,
    /// Point class to color lookup.
    pub class_colors: HashMap<String, Color>,
    /// Half side of the square the basemap is fitted into.
    pub map_radius: f64,
    /// Inner and outer radius of the inner slice band.
    pub inner_ring: (f64, f64),
    /// Radius of the marker ring.
    pub marker_ring_radius: f64,
    /// Inner radius of the outer sectors; they grow towards the canvas edge.
    pub outer_ring_radius: f64,
    /// Basemap fill.
    pub basemap_fill: Color,
    /// Radius of the point markers on the basemap.
    pub point_radius: f64,
    /// Fill of the outer sectors.
    pub theme: Color,
}

impl SpatialDistributionConfig {
    /// Creates a config with the given ring layout, empty data and default styling.
    pub fn new(
        map_radius: f64,
        inner_ring: (f64, f64),
        marker_ring_radius: f64,
        outer_ring_radius: f64,
    ) -> Self {
        Self {
            outer_arcs: Vec::new(),
            inner_slices: Vec::new(),
            markers: Vec::new(),
            basemap: Vec::new(),
            points: Vec::new(),
            class_colors: HashMap::new(),
            map_radius,
            inner_ring,
            marker_ring_radius,
            outer_ring_radius,
            basemap_fill: Color::from_rgb8(0xe5, 0xe5, 0xe5),
            point_radius: 2.0,
            theme: css::BLACK,
        }
    }

    /// Sets the outer ring magnitudes.
    pub fn with_outer_arcs(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.outer_arcs = values.into_iter().collect();
        self
    }

    /// Sets the inner slices.
    pub fn with_inner_slices(mut self, slices: impl IntoIterator<Item = InnerSlice>) -> Self {
        self.inner_slices = slices.into_iter().collect();
        self
    }

    /// Sets the marker circles.
    pub fn with_markers(mut self, markers: impl IntoIterator<Item = Marker>) -> Self {
        self.markers = markers.into_iter().collect();
        self
    }

    /// Sets the basemap polygons.
    pub fn with_basemap(mut self, basemap: impl IntoIterator<Item = GeoPolygon>) -> Self {
        self.basemap = basemap.into_iter().collect();
        self
    }

    /// Sets the point observations.
    pub fn with_points(mut self, points: impl IntoIterator<Item = GeoPoint>) -> Self {
        self.points = points.into_iter().collect();
        self
    }

    /// Adds a point class color.
    pub fn with_class_color(mut self, class: impl Into<String>, color: Color) -> Self {
        self.class_colors.insert(class.into(), color);
        self
    }

    /// Sets the basemap fill.
    pub fn with_basemap_fill(mut self, fill: Color) -> Self {
        self.basemap_fill = fill;
        self
    }

    /// Sets the point marker radius.
    pub fn with_point_radius(mut self, radius: f64) -> Self {
        self.point_radius = radius;
        self
    }

    /// Sets the outer sector fill.
    pub fn with_theme(mut self, theme: Color) -> Self {
        self.theme = theme;
        self
    }

    fn check_radii(&self) -> Result<(), GlyphError> {
        check_radius("map_radius", self.map_radius)?;
        check_radius("inner_ring.0", self.inner_ring.0)?;
        check_radius("inner_ring.1", self.inner_ring.1)?;
        check_radius("marker_ring_radius", self.marker_ring_radius)?;
        check_radius("outer_ring_radius", self.outer_ring_radius)?;
        check_radius("point_radius", self.point_radius)?;
        Ok(())
    }
}

/// Returns the ten outer sectors, `[0, max] -> [outer_ring_radius, outer_radius]`.
pub fn outer_sectors(
    config: &SpatialDistributionConfig,
    outer_radius: f64,
) -> Result<Vec<AnnularSector>, GlyphError> {
    if config.outer_arcs.len() != OUTER_SECTOR_COUNT {
        return Err(ConfigIssue::LengthMismatch {
            series: "outer_arcs",
            expected: OUTER_SECTOR_COUNT,
            actual: config.outer_arcs.len(),
        }
        .into());
    }
    let scale = ScaleLinear::zero_based(
        "outer_arcs",
        &config.outer_arcs,
        (config.outer_ring_radius, outer_radius),
    )?;
    Ok(config
        .outer_arcs
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let start = (i as f64 * OUTER_SECTOR_DEGREES).to_radians();
            let end = ((i + 1) as f64 * OUTER_SECTOR_DEGREES).to_radians();
            AnnularSector::new(config.outer_ring_radius, scale.map(v), start, end)
        })
        .collect())
}

/// Returns the inner slices laid out end to end.
///
/// Each width is scaled `[0, max] -> [0°, 50°]`; slice `i` starts where slice `i - 1` ended.
pub fn inner_slice_sectors(
    config: &SpatialDistributionConfig,
) -> Result<Vec<AnnularSector>, GlyphError> {
    let values: Vec<f64> = config.inner_slices.iter().map(|s| s.value).collect();
    let scale = ScaleLinear::zero_based(
        "inner_slices",
        &values,
        (0.0, INNER_SLICE_MAX_DEGREES.to_radians()),
    )?;
    let (r0, r1) = config.inner_ring;
    let mut start = 0.0;
    Ok(values
        .iter()
        .map(|&v| {
            let end = start + scale.map(v);
            let sector = AnnularSector::new(r0, r1, start, end);
            start = end;
            sector
        })
        .collect())
}

/// Returns the basemap projection fitted into the central square of side `2 * map_radius`.
pub fn basemap_projection(config: &SpatialDistributionConfig) -> Mercator {
    let r = config.map_radius;
    Mercator::new().fit_extent(Rect::new(-r, -r, r, r), &config.basemap)
}

/// Checks that the basemap has at least one vertex and that every vertex is finite.
///
/// Indices count vertices across all polygons, exterior ring first, then holes.
fn check_basemap(basemap: &[GeoPolygon]) -> Result<(), GlyphError> {
    let mut count = 0_usize;
    for &(lon, lat) in basemap.iter().flat_map(GeoPolygon::rings).flatten() {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(ConfigIssue::NonFiniteValue {
                series: "basemap",
                index: count,
            }
            .into());
        }
        count += 1;
    }
    if count == 0 {
        return Err(ConfigIssue::EmptySeries { series: "basemap" }.into());
    }
    Ok(())
}

/// Builds the glyph as a single group translated to the canvas center.
pub fn spatial_distribution_nodes(
    metrics: &CanvasMetrics,
    config: &SpatialDistributionConfig,
) -> Result<Node, GlyphError> {
    config.check_radii()?;
    let outer = outer_sectors(config, metrics.outer_radius())?;
    let inner = inner_slice_sectors(config)?;
    let sizes: Vec<f64> = config.markers.iter().map(|m| m.size).collect();
    let marker_scale = ScaleLinear::zero_based("markers", &sizes, MARKER_RADIUS_RANGE)?;
    check_basemap(&config.basemap)?;
    if let Some(index) = config
        .points
        .iter()
        .position(|p| !p.lon.is_finite() || !p.lat.is_finite())
    {
        return Err(ConfigIssue::NonFiniteValue {
            series: "points",
            index,
        }
        .into());
    }

    let mut outer_group = Group::new();
    for sector in &outer {
        outer_group.push(sector.node(Paint::fill(config.theme)));
    }

    let mut inner_group = Group::new();
    for (sector, slice) in inner.iter().zip(&config.inner_slices) {
        inner_group.push(sector.node(Paint::fill(slice.color)));
    }

    let mut marker_group = Group::new();
    let step = 360.0 / config.markers.len() as f64;
    for (i, marker) in config.markers.iter().enumerate() {
        let center = polar_point(config.marker_ring_radius, (step * i as f64).to_radians());
        marker_group.push(
            placed_circle(center.x, center.y, marker_scale.map(marker.size))
                .with_paint(Paint::fill(marker.color)),
        );
    }

    let projection = basemap_projection(config);
    let mut map_group = Group::new();
    for polygon in &config.basemap {
        map_group.push(
            PathNode::new(projection.path(polygon)).with_paint(Paint::fill(config.basemap_fill)),
        );
    }
    let mut unclassified = 0_usize;
    for point in &config.points {
        let Point { x, y } = projection.project(point.lon, point.lat);
        let paint = match config.class_colors.get(&point.class) {
            Some(&color) => Paint::fill(color),
            None => {
                unclassified += 1;
                log::debug!("no color for point class {:?}; leaving fill unset", point.class);
                Paint::default()
            }
        };
        map_group.push(placed_circle(x, y, config.point_radius).with_paint(paint));
    }

    log::debug!(
        "spatial distribution glyph: {} inner slices, {} markers, {} basemap polygons, {} points ({} unclassified)",
        inner_group.len(),
        marker_group.len(),
        config.basemap.len(),
        config.points.len(),
        unclassified
    );

    let root = Group::translated(metrics.center_x, metrics.center_y)
        .with_child(outer_group)
        .with_child(inner_group)
        .with_child(marker_group)
        .with_child(map_group);
    Ok(root.into())
}

/// Draws a spatial distribution glyph onto `surface`.
///
/// Nothing is appended if the config is rejected.
pub fn spatial_distribution_glyph(
    surface: &mut Surface,
    config: &SpatialDistributionConfig,
) -> Result<(), GlyphError> {
    let metrics = canvas_metrics(surface)?;
    let node = spatial_distribution_nodes(&metrics, config)?;
    surface.append(node);
    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use kurbo::Shape;

    use super::*;

    fn config() -> SpatialDistributionConfig {
        SpatialDistributionConfig::new(40.0, (45.0, 60.0), 70.0, 80.0)
            .with_outer_arcs([3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0])
            .with_inner_slices([
                InnerSlice::new(10.0, css::RED),
                InnerSlice::new(20.0, css::GREEN),
                InnerSlice::new(40.0, css::BLUE),
            ])
            .with_markers([
                Marker::new(2.0, css::ORANGE),
                Marker::new(4.0, css::PURPLE),
                Marker::new(8.0, css::GOLD),
                Marker::new(6.0, css::NAVY),
            ])
            .with_basemap([GeoPolygon::new([
                (110.0, 20.0),
                (120.0, 20.0),
                (122.0, 30.0),
                (112.0, 35.0),
            ])])
            .with_points([
                GeoPoint::new(115.0, 25.0, "urban"),
                GeoPoint::new(118.0, 28.0, "rural"),
                GeoPoint::new(113.0, 30.0, "unknown"),
            ])
            .with_class_color("urban", css::CRIMSON)
            .with_class_color("rural", css::FOREST_GREEN)
    }

    #[test]
    fn inner_slices_tile_contiguously() {
        let cfg = config();
        let sectors = inner_slice_sectors(&cfg).unwrap();
        let widths: Vec<f64> = sectors.iter().map(AnnularSector::sweep).collect();
        let expected_deg = [12.5_f64, 25.0, 50.0];
        for (w, e) in widths.iter().zip(expected_deg) {
            assert!((w - e.to_radians()).abs() < 1e-12, "width {w}");
        }
        let mut running = 0.0;
        for (s, w) in sectors.iter().zip(&widths) {
            assert_eq!(s.start_angle, running);
            running += w;
        }
        let total: f64 = widths.iter().sum();
        assert!((sectors[2].end_angle - total).abs() < 1e-12);
        assert!((total - 87.5_f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn outer_ring_needs_ten_values() {
        let cfg = config().with_outer_arcs(vec![1.0; 9]);
        let err = outer_sectors(&cfg, 100.0).unwrap_err();
        assert_eq!(
            err,
            GlyphError::InvalidConfig(ConfigIssue::LengthMismatch {
                series: "outer_arcs",
                expected: 10,
                actual: 9,
            })
        );
        let sectors = outer_sectors(&config(), 100.0).unwrap();
        assert_eq!(sectors.len(), 10);
        assert_eq!(sectors[5].outer_radius, 100.0);
        assert_eq!(sectors[5].inner_radius, 80.0);
        assert!((sectors[9].end_angle - core::f64::consts::TAU).abs() < 1e-12);
        assert!((sectors[3].sweep() - 36_f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn points_use_class_colors_and_unknown_classes_stay_unfilled() {
        let node = spatial_distribution_nodes(&CanvasMetrics::new(200.0, 200.0), &config()).unwrap();
        let map = node.as_group().unwrap().children[3].as_group().unwrap();
        assert_eq!(map.len(), 4, "one polygon and three points");
        let urban = map.children[1].as_circle().unwrap();
        assert_eq!(urban.paint.fill, Some(css::CRIMSON.into()));
        let unknown = map.children[3].as_circle().unwrap();
        assert_eq!(unknown.paint.fill, None);
    }

    #[test]
    fn basemap_is_fitted_inside_the_map_square() {
        let cfg = config();
        let projection = basemap_projection(&cfg);
        let bbox = projection.path(&cfg.basemap[0]).bounding_box();
        let r = cfg.map_radius + 1e-6;
        assert!(bbox.x0 >= -r && bbox.x1 <= r, "got {bbox:?}");
        assert!(bbox.y0 >= -r && bbox.y1 <= r, "got {bbox:?}");
    }

    #[test]
    fn markers_are_evenly_spaced_and_scaled() {
        let node = spatial_distribution_nodes(&CanvasMetrics::new(200.0, 200.0), &config()).unwrap();
        let markers = node.as_group().unwrap().children[2].as_group().unwrap();
        assert_eq!(markers.len(), 4);
        let second = markers.children[1].as_circle().unwrap();
        assert!((second.center - Point::new(70.0, 0.0)).hypot() < 1e-9);
        let largest = markers.children[2].as_circle().unwrap();
        assert_eq!(largest.radius, 9.0);
        assert_eq!(largest.paint.fill, Some(css::GOLD.into()));
    }

    #[test]
    fn missing_basemap_is_rejected_without_drawing() {
        let mut surface = Surface::new(200.0, 200.0);
        let cfg = config().with_basemap(vec![]);
        let err = spatial_distribution_glyph(&mut surface, &cfg).unwrap_err();
        assert_eq!(
            err,
            GlyphError::InvalidConfig(ConfigIssue::EmptySeries { series: "basemap" })
        );
        assert_eq!(surface.child_count(), 0);

        spatial_distribution_glyph(&mut surface, &config()).unwrap();
        assert_eq!(surface.child_count(), 1);
    }

    #[test]
    fn basemap_without_vertices_is_rejected() {
        let mut surface = Surface::new(200.0, 200.0);
        let cfg = config().with_basemap([GeoPolygon::default(), GeoPolygon::default()]);
        let err = spatial_distribution_glyph(&mut surface, &cfg).unwrap_err();
        assert_eq!(
            err,
            GlyphError::InvalidConfig(ConfigIssue::EmptySeries { series: "basemap" })
        );
        assert_eq!(surface.child_count(), 0);
    }

    #[test]
    fn non_finite_basemap_vertex_is_rejected_without_drawing() {
        let mut surface = Surface::new(200.0, 200.0);
        let cfg = config().with_basemap([
            GeoPolygon::new([(110.0, 20.0), (f64::NAN, 20.0), (122.0, 30.0)]),
        ]);
        let err = spatial_distribution_glyph(&mut surface, &cfg).unwrap_err();
        assert_eq!(
            err,
            GlyphError::InvalidConfig(ConfigIssue::NonFiniteValue {
                series: "basemap",
                index: 1,
            })
        );
        assert_eq!(surface.child_count(), 0);

        let holed = config().with_basemap([GeoPolygon::new([(110.0, 20.0), (120.0, 20.0)])
            .with_hole([(112.0, 22.0), (113.0, f64::INFINITY)])]);
        let err = spatial_distribution_glyph(&mut surface, &holed).unwrap_err();
        assert_eq!(
            err,
            GlyphError::InvalidConfig(ConfigIssue::NonFiniteValue {
                series: "basemap",
                index: 3,
            })
        );
        assert_eq!(surface.child_count(), 0);
    }

    #[test]
    fn single_vertex_basemap_lands_on_the_glyph_center() {
        let cfg = config()
            .with_basemap([GeoPolygon::new([(115.0, 25.0)])])
            .with_points([GeoPoint::new(115.0, 25.0, "urban")]);
        let node = spatial_distribution_nodes(&CanvasMetrics::new(200.0, 200.0), &cfg).unwrap();
        let map = node.as_group().unwrap().children[3].as_group().unwrap();
        let point = map.children[1].as_circle().unwrap();
        assert!(point.center.to_vec2().hypot() < 1e-9, "got {:?}", point.center);
    }

    #[test]
    fn empty_inner_slices_are_rejected() {
        let cfg = config().with_inner_slices(vec![]);
        let err = inner_slice_sectors(&cfg).unwrap_err();
        assert_eq!(
            err,
            GlyphError::InvalidConfig(ConfigIssue::EmptySeries {
                series: "inner_slices"
            })
        );
    }
}
