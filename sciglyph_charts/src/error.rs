// Copyright 2025 the SciGlyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by glyph composers.
//!
//! Composers validate their whole configuration before appending anything to a surface, so an
//! error always means "nothing was drawn".

use thiserror::Error;

/// A reason a glyph configuration was rejected.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigIssue {
    /// The surface has no declared size, or the size is not finite.
    #[error("surface has no finite width/height")]
    MissingCanvasSize,
    /// A series that needs a maximum or mean is empty.
    #[error("series `{series}` is empty")]
    EmptySeries {
        /// Name of the series.
        series: &'static str,
    },
    /// A series contains NaN or an infinity.
    #[error("series `{series}` has a non-finite value at index {index}")]
    NonFiniteValue {
        /// Name of the series.
        series: &'static str,
        /// Index of the offending value.
        index: usize,
    },
    /// A series has the wrong number of values.
    #[error("series `{series}` has {actual} values, expected {expected}")]
    LengthMismatch {
        /// Name of the series.
        series: &'static str,
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },
    /// A radius or other length is negative or not finite.
    #[error("`{field}` must be a finite, non-negative length (got {value})")]
    InvalidRadius {
        /// Name of the config field.
        field: &'static str,
        /// Supplied value.
        value: f64,
    },
}

/// Errors returned by glyph composers and the scales they build.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GlyphError {
    /// The configuration is incomplete or inconsistent.
    #[error("invalid glyph config: {0}")]
    InvalidConfig(#[from] ConfigIssue),
    /// A zero-based scale has a zero maximum, so every value would map to the range start.
    #[error("degenerate scale for `{series}`: domain [0, {max}] has no extent")]
    DegenerateScale {
        /// Name of the series or config field driving the scale.
        series: &'static str,
        /// The offending domain maximum.
        max: f64,
    },
}

/// Checks that `value` is a finite, non-negative length.
pub(crate) fn check_radius(field: &'static str, value: f64) -> Result<f64, GlyphError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigIssue::InvalidRadius { field, value }.into())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn messages_name_the_series() {
        let err: GlyphError = ConfigIssue::EmptySeries { series: "histogram" }.into();
        assert_eq!(
            err.to_string(),
            "invalid glyph config: series `histogram` is empty"
        );
        let err = GlyphError::DegenerateScale {
            series: "sizes",
            max: 0.0,
        };
        assert!(err.to_string().contains("sizes"), "got {err}");
    }

    #[test]
    fn negative_radius_is_rejected() {
        assert!(check_radius("inner_radius", -1.0).is_err());
        assert!(check_radius("inner_radius", f64::NAN).is_err());
        assert_eq!(check_radius("inner_radius", 0.0), Ok(0.0));
    }
}
