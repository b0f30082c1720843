// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom limits and step size.

use core::fmt;

/// Zoom range and per-tick step.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZoomConfig {
    /// Smallest allowed zoom factor.
    pub min: f64,
    /// Largest allowed zoom factor.
    pub max: f64,
    /// Zoom change applied per wheel tick or button press.
    pub step: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min: 0.5,
            max: 2.0,
            step: 0.1,
        }
    }
}

impl ZoomConfig {
    /// Smallest zoom factor ever produced, whatever the configured `min`.
    pub const FLOOR: f64 = 1e-3;

    /// Clamps `zoom` into `[min, max]`, and never below [`Self::FLOOR`].
    ///
    /// Unlike [`f64::clamp`] this never panics; an unvalidated config with
    /// `min > max` resolves to `max`.
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.max(self.min).min(self.max).max(Self::FLOOR)
    }

    /// Checks that the range is usable.
    pub fn validate(&self) -> Result<(), ZoomConfigError> {
        for (field, value) in [("min", self.min), ("max", self.max), ("step", self.step)] {
            if !value.is_finite() {
                return Err(ZoomConfigError::NotFinite { field });
            }
            if value <= 0.0 {
                return Err(ZoomConfigError::NotPositive { field });
            }
        }
        if self.min > self.max {
            return Err(ZoomConfigError::InvertedRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// A [`ZoomConfig`] value that [`ZoomConfig::validate`] rejects.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ZoomConfigError {
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
    /// `min` is larger than `max`.
    InvertedRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
}

impl fmt::Display for ZoomConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite { field } => write!(f, "zoom `{field}` must be finite"),
            Self::NotPositive { field } => write!(f, "zoom `{field}` must be positive"),
            Self::InvertedRange { min, max } => {
                write!(f, "zoom minimum {min} is larger than maximum {max}")
            }
        }
    }
}

impl core::error::Error for ZoomConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = ZoomConfig::default();
        assert_eq!(c.validate(), Ok(()));
        assert_eq!(c.clamp(5.0), 2.0);
        assert_eq!(c.clamp(0.1), 0.5);
        assert_eq!(c.clamp(1.3), 1.3);
    }

    #[test]
    fn clamp_stays_positive_for_unvalidated_ranges() {
        let open = ZoomConfig {
            min: -1.0,
            max: 2.0,
            step: 0.5,
        };
        assert_eq!(open.clamp(-3.0), ZoomConfig::FLOOR);
        let zero = ZoomConfig {
            min: 0.0,
            max: 0.0,
            step: 0.1,
        };
        assert_eq!(zero.clamp(1.0), ZoomConfig::FLOOR);
    }

    #[test]
    fn rejects_unusable_ranges() {
        let inverted = ZoomConfig {
            min: 3.0,
            ..ZoomConfig::default()
        };
        assert_eq!(
            inverted.validate(),
            Err(ZoomConfigError::InvertedRange { min: 3.0, max: 2.0 })
        );
        let zero_step = ZoomConfig {
            step: 0.0,
            ..ZoomConfig::default()
        };
        assert_eq!(
            zero_step.validate(),
            Err(ZoomConfigError::NotPositive { field: "step" })
        );
        let nan = ZoomConfig {
            max: f64::NAN,
            ..ZoomConfig::default()
        };
        assert_eq!(
            nan.validate(),
            Err(ZoomConfigError::NotFinite { field: "max" })
        );
    }
}
