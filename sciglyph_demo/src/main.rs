// Copyright 2025 the SciGlyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draws every glyph with sample data and writes one SVG file per glyph.
//!
//! Usage: `sciglyph_demo [OUTPUT_DIR]` (defaults to the current directory). Set `RUST_LOG=debug`
//! to see what each composer built.

mod svg;

use std::f64::consts::TAU;
use std::path::{Path, PathBuf};

use peniko::Color;
use peniko::color::palette::css;
use sciglyph_charts::{
    ArcIndicator, AxisTick, GeoPoint, GeoPolygon, GlyphConfig, InnerSlice, InstrumentPanelConfig,
    Marker, RADIAL_AREA_SAMPLES, RadialAreaConfig, SpatialDistributionConfig, draw_glyph,
};
use sciglyph_core::Surface;

const CANVAS_SIZE: f64 = 400.0;

fn main() -> std::io::Result<()> {
    env_logger::init();

    let out_dir = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    std::fs::create_dir_all(&out_dir)?;

    let demos: [(&str, GlyphConfig); 3] = [
        ("radial_area", radial_area_demo().into()),
        ("instrument_panel", instrument_panel_demo().into()),
        ("spatial_distribution", spatial_distribution_demo().into()),
    ];

    let mut failures = 0_usize;
    for (name, config) in &demos {
        let mut surface = Surface::new(CANVAS_SIZE, CANVAS_SIZE);
        if let Err(err) = draw_glyph(&mut surface, config) {
            log::error!("{name}: {err}");
            failures += 1;
            continue;
        }
        let path = write_svg(&out_dir, name, &surface)?;
        log::info!("{name}: {} nodes", surface.node_count());
        println!("wrote {}", path.display());
    }

    if failures > 0 {
        log::warn!("{failures} glyph(s) were rejected");
    }
    Ok(())
}

fn write_svg(dir: &Path, name: &str, surface: &Surface) -> std::io::Result<PathBuf> {
    let path = dir.join(format!("sciglyph_{name}.svg"));
    std::fs::write(&path, svg::surface_to_svg(surface))?;
    Ok(path)
}

fn radial_area_demo() -> RadialAreaConfig {
    // Hourly counts with a morning and an evening peak.
    let histogram = [
        2.0, 1.0, 1.0, 0.5, 1.0, 3.0, 8.0, 14.0, 12.0, 9.0, 7.0, 8.0, 10.0, 9.0, 8.0, 9.0, 12.0,
        16.0, 13.0, 9.0, 6.0, 5.0, 4.0, 3.0,
    ];
    let radial_area = (0..RADIAL_AREA_SAMPLES).map(|i| {
        let t = i as f64 / RADIAL_AREA_SAMPLES as f64 * TAU;
        3.0 + 1.5 * (2.0 * t).sin() + (3.0 * t).cos()
    });
    RadialAreaConfig::new(60.0, 110.0)
        .with_histogram(histogram)
        .with_radial_area(radial_area)
        .with_axis_ticks((0..24).step_by(6).map(AxisTick::hour))
        .with_theme(Color::from_rgb8(0x2b, 0x6c, 0xb0))
        .with_center_text("Activity")
}

fn instrument_panel_demo() -> InstrumentPanelConfig {
    InstrumentPanelConfig::new(120.0, 78.0)
        .with_sizes([4.0, 7.0, 2.0, 9.0, 5.0, 6.0, 3.0, 8.0, 1.0, 6.0, 7.0, 4.0, 5.0, 2.0, 3.0, 8.0])
        .with_total(ArcIndicator::new(64.0, 100.0))
        .with_inner(ArcIndicator::new(0.35, 1.0))
        .with_upper(ArcIndicator::new(12.0, 20.0))
        .with_lower(ArcIndicator::new(0.6, 1.0))
        .with_theme(Color::from_rgb8(0xc0, 0x39, 0x2b))
}

fn spatial_distribution_demo() -> SpatialDistributionConfig {
    // Two coarse land masses standing in for a real basemap.
    let mainland = GeoPolygon::new([
        (100.0, 22.0),
        (108.0, 21.0),
        (117.0, 24.0),
        (122.0, 31.0),
        (121.0, 39.0),
        (112.0, 42.0),
        (103.0, 37.0),
        (98.0, 28.0),
    ]);
    let island = GeoPolygon::new([(120.1, 22.0), (121.9, 25.2), (121.0, 25.3), (120.0, 23.0)]);
    let points = [
        (116.4, 39.9, "urban"),
        (121.5, 31.2, "urban"),
        (113.3, 23.1, "urban"),
        (104.1, 30.7, "rural"),
        (108.9, 34.3, "rural"),
        (110.0, 27.0, "rural"),
        (121.0, 24.5, "coastal"),
        (119.3, 26.1, "coastal"),
        (106.5, 29.5, "unsurveyed"),
    ];
    SpatialDistributionConfig::new(55.0, (80.0, 100.0), 115.0, 130.0)
        .with_outer_arcs([3.0, 5.0, 2.0, 8.0, 6.0, 4.0, 7.0, 3.0, 5.0, 9.0])
        .with_inner_slices([
            InnerSlice::new(30.0, css::STEEL_BLUE),
            InnerSlice::new(18.0, css::SEA_GREEN),
            InnerSlice::new(12.0, css::GOLDENROD),
            InnerSlice::new(25.0, css::INDIAN_RED),
        ])
        .with_markers(
            [2.0, 5.0, 3.0, 8.0, 4.0, 6.0, 1.0, 7.0]
                .map(|size| Marker::new(size, css::DARK_SLATE_GRAY)),
        )
        .with_basemap([mainland, island])
        .with_points(
            points
                .into_iter()
                .map(|(lon, lat, class)| GeoPoint::new(lon, lat, class)),
        )
        .with_class_color("urban", css::CRIMSON)
        .with_class_color("rural", css::FOREST_GREEN)
        .with_class_color("coastal", css::ROYAL_BLUE)
        .with_theme(Color::from_rgb8(0x44, 0x44, 0x44))
}
