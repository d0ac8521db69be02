// Copyright 2025 the SciGlyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiny scale utilities.
//!
//! Every glyph derives its scales fresh from the data of one draw call. Magnitude encodings
//! (bar length, radius, sweep angle) always use a zero-based domain `[0, max(series)]`, so two
//! draws with different data stay comparable as long as the zero baseline holds.

use peniko::Color;

use crate::error::GlyphError;
use crate::stats;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Creates a scale with domain `[0, max(series)]`.
    ///
    /// Fails with [`GlyphError::InvalidConfig`] for an empty or non-finite series and with
    /// [`GlyphError::DegenerateScale`] when the maximum is zero.
    pub fn zero_based(
        series_name: &'static str,
        series: &[f64],
        range: (f64, f64),
    ) -> Result<Self, GlyphError> {
        stats::validate_series(series_name, series)?;
        let max = stats::max(series).unwrap_or(0.0);
        Self::from_max(series_name, max, range)
    }

    /// Creates a scale with domain `[0, max]` for a scalar maximum.
    pub fn from_max(
        series_name: &'static str,
        max: f64,
        range: (f64, f64),
    ) -> Result<Self, GlyphError> {
        if !max.is_finite() || max == 0.0 {
            return Err(GlyphError::DegenerateScale {
                series: series_name,
                max,
            });
        }
        Ok(Self::new((0.0, max), range))
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        if x == d1 {
            return r1;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns the output range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// A linear color ramp between two colors, interpolated per sRGB component.
///
/// Inputs outside the domain are clamped to the end colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleColor {
    domain: (f64, f64),
    from: Color,
    to: Color,
}

impl ScaleColor {
    /// Creates a ramp mapping `domain.0` to `from` and `domain.1` to `to`.
    pub fn new(domain: (f64, f64), from: Color, to: Color) -> Self {
        Self { domain, from, to }
    }

    /// Maps a value to its interpolated color.
    pub fn map(&self, x: f64) -> Color {
        let (d0, d1) = self.domain;
        let denom = d1 - d0;
        let t = if denom == 0.0 { 0.0 } else { (x - d0) / denom };
        if t.is_nan() || t <= 0.0 {
            return self.from;
        }
        if t >= 1.0 {
            return self.to;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "t is in 0..=1, f32 precision is plenty for a color channel"
        )]
        let t = t as f32;
        let a = self.from.components;
        let b = self.to.components;
        Color::new([
            a[0] + (b[0] - a[0]) * t,
            a[1] + (b[1] - a[1]) * t,
            a[2] + (b[2] - a[2]) * t,
            a[3] + (b[3] - a[3]) * t,
        ])
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;
    use crate::error::ConfigIssue;

    #[test]
    fn zero_based_scale_maps_endpoints_exactly() {
        let s = ScaleLinear::zero_based("series", &[3.0, 0.7, 9.1], (12.5, 97.3)).unwrap();
        assert_eq!(s.map(0.0), 12.5);
        assert_eq!(s.map(9.1), 97.3);
        assert_eq!(s.domain_max(), 9.1);
    }

    #[test]
    fn mean_of_radial_series_interpolates() {
        let data = [2.0, 4.0, 6.0];
        let s = ScaleLinear::zero_based("radial_area", &data, (10.0, 20.0)).unwrap();
        let mean = stats::mean(&data).unwrap();
        assert!((s.map(mean) - 50.0 / 3.0).abs() < 1e-9);
        assert!((s.map(4.0) - (10.0 + 10.0 * 4.0 / 6.0)).abs() < 1e-9);
    }

    #[test]
    fn zero_max_is_degenerate_and_empty_is_invalid() {
        assert_eq!(
            ScaleLinear::zero_based("sizes", &[0.0, 0.0], (1.0, 9.0)),
            Err(GlyphError::DegenerateScale {
                series: "sizes",
                max: 0.0
            })
        );
        assert_eq!(
            ScaleLinear::zero_based("sizes", &[], (1.0, 9.0)),
            Err(GlyphError::InvalidConfig(ConfigIssue::EmptySeries {
                series: "sizes"
            }))
        );
    }

    #[test]
    fn color_ramp_hits_both_ends_and_clamps() {
        let ramp = ScaleColor::new((0.0, 11.0), css::BLACK, css::WHITE);
        assert_eq!(ramp.map(0.0), css::BLACK);
        assert_eq!(ramp.map(11.0), css::WHITE);
        assert_eq!(ramp.map(42.0), css::WHITE);
        let mid = ramp.map(5.5).components;
        assert!((mid[0] - 0.5).abs() < 1e-6, "got {mid:?}");
    }
}
