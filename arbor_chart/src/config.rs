// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart-wide configuration.

use arbor_layout::LayoutConfig;
use arbor_viewport::ZoomConfig;

use crate::ChartError;

/// Color scheme handed to the renderer with every [`Scene`](crate::Scene).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Theme {
    /// Dark text on light cards.
    #[default]
    Light,
    /// Light text on dark cards.
    Dark,
}

/// Everything an [`OrgChart`](crate::OrgChart) needs besides the directory.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChartConfig {
    /// Card geometry and spacing.
    pub layout: LayoutConfig,
    /// Zoom range and step.
    pub zoom: ZoomConfig,
    /// Screen distance from the top of the canvas to the root card after a
    /// recenter.
    pub top_margin: f64,
    /// Renderer color scheme.
    pub theme: Theme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            zoom: ZoomConfig::default(),
            top_margin: 40.0,
            theme: Theme::default(),
        }
    }
}

impl ChartConfig {
    /// Validates every nested configuration.
    pub fn validate(&self) -> Result<(), ChartError> {
        self.layout.validate()?;
        self.zoom.validate()?;
        if !self.top_margin.is_finite() {
            return Err(ChartError::TopMarginNotFinite);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use arbor_layout::ConfigError;
    use arbor_viewport::ZoomConfigError;

    use super::*;

    #[test]
    fn nested_errors_surface_through_validate() {
        assert_eq!(ChartConfig::default().validate(), Ok(()));

        let mut config = ChartConfig::default();
        config.layout.card_width = -1.0;
        assert_eq!(
            config.validate(),
            Err(ChartError::Layout(ConfigError::NotPositive {
                field: "card_width"
            }))
        );

        let mut config = ChartConfig::default();
        config.zoom.min = 4.0;
        assert_eq!(
            config.validate(),
            Err(ChartError::Zoom(ZoomConfigError::InvertedRange {
                min: 4.0,
                max: 2.0
            }))
        );

        let config = ChartConfig {
            top_margin: f64::NAN,
            ..ChartConfig::default()
        };
        assert_eq!(config.validate(), Err(ChartError::TopMarginNotFinite));
    }
}
