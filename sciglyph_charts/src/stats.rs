// Copyright 2025 the SciGlyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Descriptive statistics over numeric series.
//!
//! These mirror the handful of d3-array helpers the glyphs need (`max`, `mean`, `sum`,
//! `range`). Composers call [`validate_series`] first, so the `Option`-returning helpers
//! only see finite, non-empty input on the drawing path.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::{ConfigIssue, GlyphError};

/// Returns the largest finite value, or `None` if there is none.
pub fn max(series: &[f64]) -> Option<f64> {
    series
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            Some(m) if m >= v => Some(m),
            _ => Some(v),
        })
}

/// Returns the sum of the finite values (0 for an empty series).
pub fn sum(series: &[f64]) -> f64 {
    series.iter().copied().filter(|v| v.is_finite()).sum()
}

/// Returns the arithmetic mean of the finite values, or `None` if there are none.
pub fn mean(series: &[f64]) -> Option<f64> {
    let count = series.iter().filter(|v| v.is_finite()).count();
    if count == 0 {
        return None;
    }
    Some(sum(series) / count as f64)
}

/// Largest number of values [`range`] will produce.
pub const MAX_RANGE_LEN: usize = 1 << 20;

/// Returns `start, start + step, ...` up to but excluding `stop`.
///
/// An empty vector is returned when `step` is not positive, the bounds are not finite, or the
/// result would hold more than [`MAX_RANGE_LEN`] values.
pub fn range(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !step.is_finite() || step <= 0.0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    let n = ((stop - start) / step).ceil().max(0.0);
    if !n.is_finite() || n > MAX_RANGE_LEN as f64 {
        log::warn!("range({start}, {stop}, {step}) would hold {n} values; returning none");
        return Vec::new();
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "non-negative, finite and at most MAX_RANGE_LEN"
    )]
    let n = n as usize;
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// Checks that `series` is non-empty and entirely finite.
pub fn validate_series(name: &'static str, series: &[f64]) -> Result<(), GlyphError> {
    if series.is_empty() {
        return Err(ConfigIssue::EmptySeries { series: name }.into());
    }
    if let Some(index) = series.iter().position(|v| !v.is_finite()) {
        return Err(ConfigIssue::NonFiniteValue {
            series: name,
            index,
        }
        .into());
    }
    Ok(())
}
