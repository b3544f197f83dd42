//! Engine configuration

use crate::{
    constants::DEFAULT_TOLERANCE_C,
    errors::ThermometerResult,
    threshold::check_tolerance,
};

/// Engine-wide settings for a [`Thermometer`](crate::Thermometer)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThermometerConfig {
    /// Tolerance applied to thresholds registered without one (°C)
    pub default_tolerance: f64,
}

impl Default for ThermometerConfig {
    fn default() -> Self {
        Self {
            default_tolerance: DEFAULT_TOLERANCE_C,
        }
    }
}

impl ThermometerConfig {
    /// Default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default tolerance for new thresholds
    pub fn default_tolerance(mut self, tolerance: f64) -> Self {
        self.default_tolerance = tolerance;
        self
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> ThermometerResult<()> {
        check_tolerance(self.default_tolerance)
    }
}
