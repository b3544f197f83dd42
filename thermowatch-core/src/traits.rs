//! Core traits for the threshold engine
//!
//! Kept deliberately small: one trait for input sanity, one for receiving
//! notifications.

use crate::dispatch::CallbackError;
use crate::events::ThresholdEvent;

/// Receives notifications from a threshold that fired
///
/// Closures don't need to implement this directly; see
/// [`ThresholdConfig::new`](crate::threshold::ThresholdConfig::new) and
/// [`ThresholdConfig::fallible`](crate::threshold::ThresholdConfig::fallible).
pub trait ThresholdCallback {
    /// Handle a fired threshold
    ///
    /// Called synchronously from `set_temperature`. Returning an error does
    /// not stop other thresholds from being evaluated.
    fn notify(&mut self, event: &ThresholdEvent) -> Result<(), CallbackError>;
}

/// Trait for values that can be recorded as readings
pub trait Validatable {
    /// Check if the value is a real number (not NaN, infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
