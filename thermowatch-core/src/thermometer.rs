//! Thermometer - the engine facade
//!
//! Ties the reading store, the threshold registry, the evaluator and
//! dispatch together behind the public API. All state lives in the
//! instance; independent thermometers never share anything.
//!
//! ```rust
//! use thermowatch_core::{Direction, Thermometer, ThresholdConfig};
//!
//! let mut thermometer = Thermometer::new();
//! let frost = thermometer.add_threshold(
//!     ThresholdConfig::new(0.0, |event| println!("frost warning: {}", event))
//!         .direction(Direction::Decreasing),
//! )?;
//!
//! thermometer.set_temperature(3.2)?;
//! let report = thermometer.set_temperature(0.1)?;
//! assert_eq!(report.fired, 1);
//!
//! assert!(thermometer.remove_threshold(frost));
//! # Ok::<(), thermowatch_core::ThermometerError>(())
//! ```

use crate::{
    config::ThermometerConfig,
    conversion,
    dispatch::DispatchReport,
    errors::ThermometerResult,
    evaluator::{self, Outcome},
    reading::ReadingStore,
    registry::{ThresholdId, ThresholdRegistry},
    threshold::{ThresholdConfig, ThresholdInfo},
};

/// Temperature tracker with hysteresis-latched threshold alerts
#[derive(Debug, Default)]
pub struct Thermometer {
    readings: ReadingStore,
    thresholds: ThresholdRegistry,
    config: ThermometerConfig,
}

impl Thermometer {
    /// Create thermometer with the default ±0.5°C tolerance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create thermometer with custom settings
    pub fn with_config(config: ThermometerConfig) -> ThermometerResult<Self> {
        config.validate()?;
        Ok(Self {
            readings: ReadingStore::new(),
            thresholds: ThresholdRegistry::new(),
            config,
        })
    }

    /// Record a reading in Celsius and notify thresholds it reaches
    ///
    /// Callback failures do not abort evaluation; they are collected in
    /// the returned report.
    pub fn set_temperature(&mut self, celsius: f64) -> ThermometerResult<DispatchReport> {
        let transition = self.readings.record(celsius)?;
        log_debug!(
            "reading {}°C (previous {}°C, had prior: {})",
            transition.current, transition.previous, transition.had_prior
        );

        let mut report = DispatchReport::default();
        self.thresholds.for_each_mut(|id, threshold| {
            if let Outcome::Fired(event) = evaluator::evaluate(&transition, threshold) {
                log_debug!("threshold {} fired: {}", id, event);
                report.deliver(id, threshold.callback.as_mut(), event);
            }
        });

        Ok(report)
    }

    /// Current temperature in Celsius
    pub fn celsius(&self) -> ThermometerResult<f64> {
        self.readings.current()
    }

    /// Current temperature in Fahrenheit
    pub fn fahrenheit(&self) -> ThermometerResult<f64> {
        self.celsius().map(conversion::celsius_to_fahrenheit)
    }

    /// Current temperature in Kelvin
    pub fn kelvin(&self) -> ThermometerResult<f64> {
        self.celsius().map(conversion::celsius_to_kelvin)
    }

    /// Reading before the current one, in Celsius
    pub fn previous(&self) -> ThermometerResult<f64> {
        self.readings.previous()
    }

    /// Whether any reading has been recorded
    pub fn is_initialized(&self) -> bool {
        self.readings.is_initialized()
    }

    /// Register a threshold; it starts armed
    pub fn add_threshold(&mut self, config: ThresholdConfig) -> ThermometerResult<ThresholdId> {
        let id = self.thresholds.register(config, self.config.default_tolerance)?;
        log_debug!("registered threshold {}", id);
        Ok(id)
    }

    /// Remove a threshold; `false` if it was not (or no longer) registered
    pub fn remove_threshold(&mut self, id: ThresholdId) -> bool {
        self.thresholds.unregister(id)
    }

    /// Configuration and latch state of a registered threshold
    pub fn threshold(&self, id: ThresholdId) -> Option<ThresholdInfo> {
        self.thresholds.get(id)
    }

    /// Number of registered thresholds
    pub fn threshold_count(&self) -> usize {
        self.thresholds.len()
    }

    /// Engine-wide settings
    pub fn config(&self) -> &ThermometerConfig {
        &self.config
    }
}
