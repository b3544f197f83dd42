//! Error Types for the Threshold Engine
//!
//! ## Design Philosophy
//!
//! The engine's errors follow the same rules as any hot-path error on an
//! edge device:
//!
//! 1. **Small Size**: Every variant is a unit or a `&'static str` reason, so
//!    the enum stays two words wide and is cheap to return from
//!    `set_temperature` on every sample.
//!
//! 2. **No Heap Allocation**: Messages are static. The one error that must
//!    carry a dynamic message (a failed remote fetch) lives in
//!    `thermowatch-connectors`, where `std` is always available.
//!
//! 3. **Copy Semantics**: Errors implement `Copy` so callers can log and
//!    match on them without ownership gymnastics.
//!
//! ## Error Categories
//!
//! - `InvalidInput`: a reading that is not a real number (NaN, infinity)
//! - `NotInitialized`: a query issued before any reading was recorded
//! - `InvalidConfig`: a malformed threshold or engine configuration
//!
//! Failures raised by user callbacks are *not* part of this taxonomy; see
//! [`CallbackError`](crate::dispatch::CallbackError).
//!
//! ```rust
//! use thermowatch_core::{Thermometer, ThermometerError};
//!
//! let mut thermometer = Thermometer::new();
//! assert_eq!(thermometer.celsius(), Err(ThermometerError::NotInitialized));
//!
//! match thermometer.set_temperature(f64::NAN) {
//!     Err(ThermometerError::InvalidInput) => {
//!         // Sensor produced garbage - drop the sample
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for engine operations
pub type ThermometerResult<T> = Result<T, ThermometerError>;

/// Engine errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermometerError {
    /// Reading is not a real number
    #[error("Temperature must be a number")]
    InvalidInput,

    /// Query attempted before any reading was ever recorded
    #[error("Temperature has not been set")]
    NotInitialized,

    /// Threshold or engine configuration is malformed
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What was wrong
        reason: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ThermometerError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidInput =>
                defmt::write!(fmt, "Invalid temperature input"),
            Self::NotInitialized =>
                defmt::write!(fmt, "Temperature not set"),
            Self::InvalidConfig { reason } =>
                defmt::write!(fmt, "Invalid config: {}", reason),
        }
    }
}
