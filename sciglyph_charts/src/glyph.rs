// Copyright 2025 the SciGlyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tagged union over the glyph configs, for callers that pick a glyph at runtime.

use sciglyph_core::Surface;

use crate::error::GlyphError;
use crate::instrument_panel::{InstrumentPanelConfig, instrument_panel_glyph};
use crate::radial_area::{RadialAreaConfig, radial_area_glyph};
use crate::spatial_distribution::{SpatialDistributionConfig, spatial_distribution_glyph};

/// Any glyph this crate can draw.
#[derive(Clone, Debug, PartialEq)]
pub enum GlyphConfig {
    /// See [`radial_area_glyph`].
    RadialArea(RadialAreaConfig),
    /// See [`instrument_panel_glyph`].
    InstrumentPanel(InstrumentPanelConfig),
    /// See [`spatial_distribution_glyph`].
    SpatialDistribution(SpatialDistributionConfig),
}

impl GlyphConfig {
    /// Short name of the glyph kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RadialArea(_) => "radial_area",
            Self::InstrumentPanel(_) => "instrument_panel",
            Self::SpatialDistribution(_) => "spatial_distribution",
        }
    }
}

impl From<RadialAreaConfig> for GlyphConfig {
    fn from(config: RadialAreaConfig) -> Self {
        Self::RadialArea(config)
    }
}

impl From<InstrumentPanelConfig> for GlyphConfig {
    fn from(config: InstrumentPanelConfig) -> Self {
        Self::InstrumentPanel(config)
    }
}

impl From<SpatialDistributionConfig> for GlyphConfig {
    fn from(config: SpatialDistributionConfig) -> Self {
        Self::SpatialDistribution(config)
    }
}

/// Draws whichever glyph `config` describes onto `surface`.
pub fn draw_glyph(surface: &mut Surface, config: &GlyphConfig) -> Result<(), GlyphError> {
    log::trace!("drawing {} glyph", config.kind());
    match config {
        GlyphConfig::RadialArea(c) => radial_area_glyph(surface, c),
        GlyphConfig::InstrumentPanel(c) => instrument_panel_glyph(surface, c),
        GlyphConfig::SpatialDistribution(c) => spatial_distribution_glyph(surface, c),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::error::ConfigIssue;
    use crate::instrument_panel::ArcIndicator;

    #[test]
    fn dispatches_to_the_matching_glyph() {
        let mut surface = Surface::new(300.0, 300.0);
        let config: GlyphConfig = InstrumentPanelConfig::new(100.0, 40.0)
            .with_sizes([1.0, 2.0, 3.0])
            .with_total(ArcIndicator::new(5.0, 10.0))
            .with_inner(ArcIndicator::new(2.0, 10.0))
            .with_upper(ArcIndicator::new(3.0, 10.0))
            .with_lower(ArcIndicator::new(4.0, 10.0))
            .into();
        assert_eq!(config.kind(), "instrument_panel");
        draw_glyph(&mut surface, &config).unwrap();
        assert_eq!(surface.child_count(), 1);
    }

    #[test]
    fn errors_propagate_and_leave_the_surface_untouched() {
        let mut surface = Surface::new(300.0, 300.0);
        let config = GlyphConfig::from(
            RadialAreaConfig::new(40.0, 80.0)
                .with_histogram(vec![])
                .with_radial_area(vec![1.0; 96]),
        );
        let err = draw_glyph(&mut surface, &config).unwrap_err();
        assert_eq!(
            err,
            GlyphError::InvalidConfig(ConfigIssue::EmptySeries {
                series: "histogram"
            })
        );
        assert_eq!(surface.child_count(), 0);
    }
}
