//! Core threshold engine for Thermowatch
//!
//! Tracks a single temperature and notifies observers exactly once each
//! time the reading reaches a configured trigger value. A tolerance band
//! with a latch suppresses repeat notifications from sensor noise, and
//! thresholds can be restricted to rising or falling crossings.
//!
//! Key constraints:
//! - Single-threaded, synchronous evaluation
//! - Only the latest and previous reading are kept
//! - `no_std` + `alloc` capable (disable default features)
//!
//! ```no_run
//! use thermowatch_core::{Direction, Thermometer, ThresholdConfig};
//!
//! let mut thermometer = Thermometer::new();
//!
//! thermometer.add_threshold(
//!     ThresholdConfig::new(0.0, |event| println!("freezing: {}", event)),
//! )?;
//! thermometer.add_threshold(
//!     ThresholdConfig::new(100.0, |event| println!("boiling: {}", event))
//!         .direction(Direction::Increasing)
//!         .tolerance(1.0),
//! )?;
//!
//! // Feed sensor readings
//! thermometer.set_temperature(1.0)?;
//! thermometer.set_temperature(0.0)?; // freezing fires once
//! thermometer.set_temperature(-0.3)?; // still inside the band, stays quiet
//! # Ok::<(), thermowatch_core::ThermometerError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod config;
pub mod constants;
pub mod conversion;
pub mod dispatch;
pub mod errors;
pub mod evaluator;
pub mod events;
pub mod reading;
pub mod registry;
pub mod thermometer;
pub mod threshold;
pub mod traits;

// Public API
pub use config::ThermometerConfig;
pub use dispatch::{CallbackError, CallbackFailure, DispatchReport};
pub use errors::{ThermometerError, ThermometerResult};
pub use events::{Direction, ThresholdEvent};
pub use registry::ThresholdId;
pub use thermometer::Thermometer;
pub use threshold::{ThresholdConfig, ThresholdInfo};
pub use traits::ThresholdCallback;

#[cfg(feature = "std")]
pub use dispatch::ChannelCallback;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
