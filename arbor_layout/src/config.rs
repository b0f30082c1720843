// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout dimensions and their validation.

use core::fmt;

use kurbo::Size;

/// Card geometry and spacing used by [`layout`](crate::layout).
///
/// The horizontal unit is `card_width + horizontal_spacing`; sibling and
/// cousin separations are multiples of it. The vertical band of each level is
/// `card_height + vertical_spacing`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Card width in logical pixels.
    pub card_width: f64,
    /// Card height in logical pixels.
    pub card_height: f64,
    /// Extra horizontal room between neighbouring cards.
    pub horizontal_spacing: f64,
    /// Extra vertical room between levels.
    pub vertical_spacing: f64,
    /// Separation, in horizontal units, between cards that share a parent.
    pub sibling_separation: f64,
    /// Separation, in horizontal units, between cards with different parents.
    pub cousin_separation: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: 260.0,
            card_height: 110.0,
            horizontal_spacing: 40.0,
            vertical_spacing: 80.0,
            sibling_separation: 1.0,
            cousin_separation: 1.3,
        }
    }
}

impl LayoutConfig {
    /// Width of one horizontal separation unit.
    pub fn horizontal_unit(&self) -> f64 {
        self.card_width + self.horizontal_spacing
    }

    /// Height of one level band.
    pub fn level_height(&self) -> f64 {
        self.card_height + self.vertical_spacing
    }

    /// Card footprint.
    pub fn card_size(&self) -> Size {
        Size::new(self.card_width, self.card_height)
    }

    /// Checks that the configuration can produce an overlap-free layout.
    ///
    /// Card sizes must be positive, spacings non-negative, and both separation
    /// ratios at least `1.0`, so that neighbouring cards are always at least
    /// one card width apart.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("card_width", self.card_width),
            ("card_height", self.card_height),
            ("horizontal_spacing", self.horizontal_spacing),
            ("vertical_spacing", self.vertical_spacing),
            ("sibling_separation", self.sibling_separation),
            ("cousin_separation", self.cousin_separation),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
        }
        for (field, value) in [
            ("card_width", self.card_width),
            ("card_height", self.card_height),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field });
            }
        }
        for (field, value) in [
            ("horizontal_spacing", self.horizontal_spacing),
            ("vertical_spacing", self.vertical_spacing),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field });
            }
        }
        for (field, value) in [
            ("sibling_separation", self.sibling_separation),
            ("cousin_separation", self.cousin_separation),
        ] {
            if value < 1.0 {
                return Err(ConfigError::SeparationBelowOne { field });
            }
        }
        Ok(())
    }
}

/// A [`LayoutConfig`] value that [`LayoutConfig::validate`] rejects.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The field is NaN or infinite.
    NotFinite {
        /// Offending field.
        field: &'static str,
    },
    /// The field must be greater than zero.
    NotPositive {
        /// Offending field.
        field: &'static str,
    },
    /// The field must not be negative.
    Negative {
        /// Offending field.
        field: &'static str,
    },
    /// A separation ratio below `1.0` would let cards overlap.
    SeparationBelowOne {
        /// Offending field.
        field: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite { field } => write!(f, "layout `{field}` must be finite"),
            Self::NotPositive { field } => write!(f, "layout `{field}` must be positive"),
            Self::Negative { field } => write!(f, "layout `{field}` must not be negative"),
            Self::SeparationBelowOne { field } => {
                write!(f, "layout `{field}` must be at least 1.0")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(LayoutConfig::default().validate(), Ok(()));
        let c = LayoutConfig::default();
        assert_eq!(c.horizontal_unit(), 300.0);
        assert_eq!(c.level_height(), 190.0);
    }

    #[test]
    fn rejects_bad_values() {
        let nan = LayoutConfig {
            card_height: f64::NAN,
            ..LayoutConfig::default()
        };
        assert_eq!(
            nan.validate(),
            Err(ConfigError::NotFinite {
                field: "card_height"
            })
        );

        let zero = LayoutConfig {
            card_width: 0.0,
            ..LayoutConfig::default()
        };
        assert_eq!(
            zero.validate(),
            Err(ConfigError::NotPositive {
                field: "card_width"
            })
        );

        let negative = LayoutConfig {
            vertical_spacing: -1.0,
            ..LayoutConfig::default()
        };
        assert_eq!(
            negative.validate(),
            Err(ConfigError::Negative {
                field: "vertical_spacing"
            })
        );

        let tight = LayoutConfig {
            cousin_separation: 0.9,
            ..LayoutConfig::default()
        };
        assert_eq!(
            tight.validate(),
            Err(ConfigError::SeparationBelowOne {
                field: "cousin_separation"
            })
        );
    }
}
