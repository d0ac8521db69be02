// Copyright 2025 the SciGlyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geographic data and the Mercator projection used by the spatial distribution glyph.
//!
//! Coordinates are `(longitude, latitude)` in degrees. The projection follows d3's
//! `geoMercator` conventions: projected y grows downwards on screen, the default scale is
//! `961 / 2π` and the default translate is `(480, 250)`.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use core::f64::consts::{FRAC_PI_4, TAU};

use kurbo::{BezPath, Point, Rect};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Latitude limit where the Mercator square ends (`atan(sinh(π))` in degrees).
pub const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_779_806_59;

/// A polygon feature: one exterior ring plus optional holes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoPolygon {
    /// Exterior ring as `(lon, lat)` pairs. The ring is closed implicitly.
    pub exterior: Vec<(f64, f64)>,
    /// Interior rings (holes).
    pub holes: Vec<Vec<(f64, f64)>>,
}

impl GeoPolygon {
    /// Creates a polygon without holes.
    pub fn new(exterior: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self {
            exterior: exterior.into_iter().collect(),
            holes: Vec::new(),
        }
    }

    /// Adds a hole.
    pub fn with_hole(mut self, ring: impl IntoIterator<Item = (f64, f64)>) -> Self {
        self.holes.push(ring.into_iter().collect());
        self
    }

    /// Returns the exterior ring followed by the holes.
    pub fn rings(&self) -> impl Iterator<Item = &[(f64, f64)]> {
        core::iter::once(self.exterior.as_slice()).chain(self.holes.iter().map(Vec::as_slice))
    }
}

/// A classified point observation.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoPoint {
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Class key used to look up the marker color.
    pub class: String,
}

impl GeoPoint {
    /// Creates a point observation.
    pub fn new(lon: f64, lat: f64, class: impl Into<String>) -> Self {
        Self {
            lon,
            lat,
            class: class.into(),
        }
    }
}

/// A spherical Mercator projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mercator {
    /// Scale factor (screen units per radian).
    pub scale: f64,
    /// Screen position of `center`.
    pub translate: Point,
    /// `(lon, lat)` that maps to `translate`.
    pub center: (f64, f64),
}

impl Default for Mercator {
    fn default() -> Self {
        Self {
            scale: 961.0 / TAU,
            translate: Point::new(480.0, 250.0),
            center: (0.0, 0.0),
        }
    }
}

impl Mercator {
    /// Creates a projection with d3's defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the translate.
    pub fn with_translate(mut self, translate: impl Into<Point>) -> Self {
        self.translate = translate.into();
        self
    }

    /// Sets the projection center.
    pub fn with_center(mut self, lon: f64, lat: f64) -> Self {
        self.center = (lon, lat);
        self
    }

    /// Projects `(lon, lat)` into screen coordinates.
    pub fn project(&self, lon: f64, lat: f64) -> Point {
        let (x, y) = raw(lon, lat);
        let (cx, cy) = raw(self.center.0, self.center.1);
        Point::new(
            self.translate.x + self.scale * (x - cx),
            self.translate.y - self.scale * (y - cy),
        )
    }

    /// Adjusts scale and translate so `features` fit inside `extent`, centered.
    ///
    /// Features that project to a single point keep the current scale and land on the extent
    /// center. The projection is returned unchanged when there are no vertices at all.
    pub fn fit_extent(self, extent: Rect, features: &[GeoPolygon]) -> Self {
        let unit = Self {
            scale: 1.0,
            translate: Point::ORIGIN,
            center: self.center,
        };
        let Some(bounds) = projected_bounds(&unit, features) else {
            return self;
        };
        let kx = extent.width() / bounds.width();
        let ky = extent.height() / bounds.height();
        let k = match (kx.is_finite(), ky.is_finite()) {
            (true, true) => kx.min(ky),
            (true, false) => kx,
            (false, true) => ky,
            (false, false) => self.scale,
        };
        let tx = extent.x0 + (extent.width() - k * (bounds.x0 + bounds.x1)) / 2.0;
        let ty = extent.y0 + (extent.height() - k * (bounds.y0 + bounds.y1)) / 2.0;
        Self {
            scale: k,
            translate: Point::new(tx, ty),
            center: self.center,
        }
    }

    /// Converts a polygon into a closed screen-space path (one subpath per ring).
    pub fn path(&self, polygon: &GeoPolygon) -> BezPath {
        let mut p = BezPath::new();
        for ring in polygon.rings() {
            let mut iter = ring.iter().map(|&(lon, lat)| self.project(lon, lat));
            let Some(first) = iter.next() else {
                continue;
            };
            p.move_to(first);
            for pt in iter {
                p.line_to(pt);
            }
            p.close_path();
        }
        p
    }
}

fn raw(lon: f64, lat: f64) -> (f64, f64) {
    let lambda = lon.to_radians();
    let phi = lat
        .clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE)
        .to_radians();
    (lambda, (FRAC_PI_4 + phi / 2.0).tan().ln())
}

fn projected_bounds(projection: &Mercator, features: &[GeoPolygon]) -> Option<Rect> {
    let mut rect: Option<Rect> = None;
    for pt in features
        .iter()
        .flat_map(|f| f.rings())
        .flatten()
        .map(|&(lon, lat)| projection.project(lon, lat))
    {
        rect = Some(match rect {
            None => Rect::from_points(pt, pt),
            Some(r) => r.union_pt(pt),
        });
    }
    rect
}
