// Copyright 2025 the SciGlyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Science-paper chart glyphs for `sciglyph_core`.
//!
//! Three glyphs are provided, each a pure function from a [`sciglyph_core::Surface`] and a
//! typed config to a single subtree appended to that surface:
//! - [`radial_area_glyph`]: a 24-slot radial histogram around a closed radial area.
//! - [`instrument_panel_glyph`]: a speedometer-style gauge with partial indicator arcs.
//! - [`spatial_distribution_glyph`]: a Mercator basemap wrapped in category rings.
//!
//! Composers validate the whole config and derive their scales before touching the surface,
//! so a returned [`GlyphError`] always means nothing was drawn.
//!
//! Text shaping and rasterisation are out of scope; text nodes store unshaped strings.

#![no_std]

extern crate alloc;

mod area;
mod canvas;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod geo;
mod glyph;
mod instrument_panel;
mod radial_area;
mod scale;
mod sector;
mod shape;
mod spatial_distribution;
pub mod stats;

pub use area::closed_radial_area;
pub use canvas::{CanvasMetrics, canvas_metrics};
pub use error::{ConfigIssue, GlyphError};
pub use geo::{GeoPoint, GeoPolygon, MAX_MERCATOR_LATITUDE, Mercator};
pub use glyph::{GlyphConfig, draw_glyph};
pub use instrument_panel::{
    ArcIndicator, DIAL_TICK_COUNT, DIAL_TICK_START_DEGREES, DIAL_TICK_STEP_DEGREES,
    END_LABEL_OFFSET_DEGREES, GAUGE_SWEEP_DEGREES, InstrumentPanelConfig, LowerArcSource,
    POINTER_ROTATION_RANGE, SIZE_CIRCLE_RADIUS_RANGE, SIZE_CIRCLE_START_DEGREES,
    SIZE_CIRCLE_STEP_DEGREES, indicator_arcs, instrument_panel_glyph, instrument_panel_nodes,
    pointer_rotation,
};
pub use radial_area::{
    AxisTick, HISTOGRAM_PAD_ANGLE, MAX_HISTOGRAM_SLOTS, RADIAL_AREA_SAMPLES, RadialAreaConfig,
    RadialAreaScales, SLOT_DEGREES, histogram_sectors, radial_area_glyph, radial_area_nodes,
};
pub use scale::{ScaleColor, ScaleLinear};
pub use sector::{AnnularSector, annular_sector, polar_point};
pub use shape::{placed_circle, placed_polygon};
pub use spatial_distribution::{
    INNER_SLICE_MAX_DEGREES, InnerSlice, MARKER_RADIUS_RANGE, Marker, OUTER_SECTOR_COUNT,
    OUTER_SECTOR_DEGREES, SpatialDistributionConfig, basemap_projection, inner_slice_sectors,
    outer_sectors, spatial_distribution_glyph, spatial_distribution_nodes,
};
