//! Threshold configuration and per-threshold state

use alloc::boxed::Box;
use core::fmt;

use crate::{
    dispatch::{CallbackError, FnCallback, TryFnCallback},
    errors::{ThermometerError, ThermometerResult},
    events::{Direction, ThresholdEvent},
    traits::{ThresholdCallback, Validatable},
};

/// Registration request for a threshold
///
/// `direction` defaults to [`Direction::Either`]; `tolerance` defaults to
/// the engine-wide default of the thermometer it is added to.
///
/// ```rust
/// use thermowatch_core::{Direction, ThresholdConfig};
///
/// let config = ThresholdConfig::new(0.0, |event| println!("freezing: {}", event))
///     .direction(Direction::Decreasing)
///     .tolerance(0.25);
/// ```
pub struct ThresholdConfig {
    pub(crate) trigger: f64,
    pub(crate) direction: Direction,
    pub(crate) tolerance: Option<f64>,
    pub(crate) callback: Box<dyn ThresholdCallback>,
}

impl ThresholdConfig {
    /// Watch `trigger` and call `callback` when it is reached
    pub fn new<F>(trigger: f64, callback: F) -> Self
    where
        F: FnMut(&ThresholdEvent) + 'static,
    {
        Self::with_callback(trigger, FnCallback(callback))
    }

    /// Like [`ThresholdConfig::new`] with a callback that can report failure
    pub fn fallible<F>(trigger: f64, callback: F) -> Self
    where
        F: FnMut(&ThresholdEvent) -> Result<(), CallbackError> + 'static,
    {
        Self::with_callback(trigger, TryFnCallback(callback))
    }

    /// Watch `trigger` and notify any [`ThresholdCallback`] implementor
    pub fn with_callback(trigger: f64, callback: impl ThresholdCallback + 'static) -> Self {
        Self {
            trigger,
            direction: Direction::Either,
            tolerance: None,
            callback: Box::new(callback),
        }
    }

    /// Only fire on crossings in this direction
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Half-width of the band around the trigger that counts as "reached"
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Resolve defaults and validate into a stored threshold
    pub(crate) fn build(self, default_tolerance: f64) -> ThermometerResult<Threshold> {
        let tolerance = self.tolerance.unwrap_or(default_tolerance);

        if !self.trigger.is_valid() {
            return Err(ThermometerError::InvalidConfig {
                reason: "trigger value must be a finite number",
            });
        }
        check_tolerance(tolerance)?;

        Ok(Threshold {
            trigger: self.trigger,
            direction: self.direction,
            tolerance,
            armed: true,
            callback: self.callback,
        })
    }
}

impl fmt::Debug for ThresholdConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThresholdConfig")
            .field("trigger", &self.trigger)
            .field("direction", &self.direction)
            .field("tolerance", &self.tolerance)
            .finish_non_exhaustive()
    }
}

/// Tolerance must be a finite, non-negative number
pub(crate) fn check_tolerance(tolerance: f64) -> ThermometerResult<()> {
    if !tolerance.is_valid() {
        return Err(ThermometerError::InvalidConfig {
            reason: "tolerance must be a finite number",
        });
    }
    if tolerance < 0.0 {
        return Err(ThermometerError::InvalidConfig {
            reason: "tolerance must not be negative",
        });
    }
    Ok(())
}

/// Registered threshold with its latch state
pub struct Threshold {
    pub(crate) trigger: f64,
    pub(crate) direction: Direction,
    pub(crate) tolerance: f64,
    /// Eligible to fire; cleared on fire, set again on leaving the band
    pub(crate) armed: bool,
    pub(crate) callback: Box<dyn ThresholdCallback>,
}

impl Threshold {
    /// Lower edge of the tolerance band (inclusive)
    pub fn lower_bound(&self) -> f64 {
        self.trigger - self.tolerance
    }

    /// Upper edge of the tolerance band (inclusive)
    pub fn upper_bound(&self) -> f64 {
        self.trigger + self.tolerance
    }

    /// Whether a reading counts as "at" this threshold
    pub fn in_band(&self, value: f64) -> bool {
        value >= self.lower_bound() && value <= self.upper_bound()
    }

    /// Read-only view of the configuration and latch
    pub fn info(&self) -> ThresholdInfo {
        ThresholdInfo {
            trigger: self.trigger,
            direction: self.direction,
            tolerance: self.tolerance,
            armed: self.armed,
        }
    }
}

impl fmt::Debug for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Threshold")
            .field("trigger", &self.trigger)
            .field("direction", &self.direction)
            .field("tolerance", &self.tolerance)
            .field("armed", &self.armed)
            .finish_non_exhaustive()
    }
}

/// Snapshot of a registered threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdInfo {
    /// Trigger value (°C)
    pub trigger: f64,
    /// Crossing direction that fires
    pub direction: Direction,
    /// Half-width of the band (°C)
    pub tolerance: f64,
    /// Whether the next in-band match will fire
    pub armed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_TOLERANCE_C;

    fn noop(_: &ThresholdEvent) {}

    #[test]
    fn defaults_applied() {
        let threshold = ThresholdConfig::new(0.0, noop).build(DEFAULT_TOLERANCE_C).unwrap();
        let info = threshold.info();

        assert_eq!(info.direction, Direction::Either);
        assert_eq!(info.tolerance, DEFAULT_TOLERANCE_C);
        assert!(info.armed);
    }

    #[test]
    fn negative_tolerance_rejected() {
        let result = ThresholdConfig::new(0.0, noop).tolerance(-0.1).build(DEFAULT_TOLERANCE_C);
        assert!(matches!(result, Err(ThermometerError::InvalidConfig { .. })));
    }

    #[test]
    fn non_finite_values_rejected() {
        let result = ThresholdConfig::new(f64::NAN, noop).build(DEFAULT_TOLERANCE_C);
        assert!(matches!(result, Err(ThermometerError::InvalidConfig { .. })));

        let result = ThresholdConfig::new(0.0, noop).tolerance(f64::INFINITY).build(DEFAULT_TOLERANCE_C);
        assert!(matches!(result, Err(ThermometerError::InvalidConfig { .. })));
    }

    #[test]
    fn band_is_inclusive() {
        let threshold = ThresholdConfig::new(10.0, noop).tolerance(0.5).build(0.0).unwrap();

        assert!(threshold.in_band(9.5));
        assert!(threshold.in_band(10.5));
        assert!(!threshold.in_band(9.49));
        assert!(!threshold.in_band(10.51));
    }

    #[test]
    fn zero_tolerance_matches_exact_value() {
        let threshold = ThresholdConfig::new(10.0, noop).tolerance(0.0).build(DEFAULT_TOLERANCE_C).unwrap();

        assert!(threshold.in_band(10.0));
        assert!(!threshold.in_band(10.001));
    }
}
