//! Reading Store
//!
//! Holds the latest and previous temperature plus the "initialized" flag.
//! This is the only measurement history the engine keeps.
//!
//! ## Update Ordering
//!
//! A reading is recorded *before* thresholds are evaluated, so the
//! evaluator sees the correct previous/current pair. Because the store is
//! already initialized by the time evaluation runs, [`ReadingStore::record`]
//! returns a [`ReadingTransition`] that remembers whether a real prior
//! reading existed:
//!
//! ```text
//! record(12.0)   previous = 0.0 (placeholder)   had_prior = false
//! record(10.0)   previous = 12.0                had_prior = true
//! record(10.0)   previous = 10.0                had_prior = true
//! ```

use crate::{
    constants::UNINITIALIZED_READING,
    errors::{ThermometerError, ThermometerResult},
    traits::Validatable,
};

/// One step of the reading history, as seen by the evaluator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingTransition {
    /// Reading before this update (placeholder if `had_prior` is false)
    pub previous: f64,
    /// Reading just recorded
    pub current: f64,
    /// Whether `previous` is a real measurement
    pub had_prior: bool,
}

impl ReadingTransition {
    /// Reading went up since the previous real measurement
    pub fn is_increasing(&self) -> bool {
        self.had_prior && self.current > self.previous
    }

    /// Reading went down since the previous real measurement
    pub fn is_decreasing(&self) -> bool {
        self.had_prior && self.current < self.previous
    }
}

/// Latest and previous reading in Celsius
#[derive(Debug, Clone)]
pub struct ReadingStore {
    current: f64,
    previous: f64,
    initialized: bool,
}

impl Default for ReadingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingStore {
    /// Create an empty store
    pub const fn new() -> Self {
        Self {
            current: UNINITIALIZED_READING,
            previous: UNINITIALIZED_READING,
            initialized: false,
        }
    }

    /// Record a new reading
    ///
    /// Rejects NaN and infinities with [`ThermometerError::InvalidInput`]
    /// and leaves the store untouched in that case.
    pub fn record(&mut self, value: f64) -> ThermometerResult<ReadingTransition> {
        if !value.is_valid() {
            return Err(ThermometerError::InvalidInput);
        }

        let had_prior = self.initialized;
        self.previous = self.current;
        self.current = value;
        self.initialized = true;

        Ok(ReadingTransition {
            previous: self.previous,
            current: self.current,
            had_prior,
        })
    }

    /// Most recent reading
    pub fn current(&self) -> ThermometerResult<f64> {
        self.ensure_initialized()?;
        Ok(self.current)
    }

    /// Reading before the most recent one
    ///
    /// After exactly one reading this is the uninitialized placeholder
    /// (`0.0`), not a real measurement.
    pub fn previous(&self) -> ThermometerResult<f64> {
        self.ensure_initialized()?;
        Ok(self.previous)
    }

    /// Whether any reading has been recorded
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn ensure_initialized(&self) -> ThermometerResult<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(ThermometerError::NotInitialized)
        }
    }
}
