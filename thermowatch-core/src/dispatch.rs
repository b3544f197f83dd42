//! Notification Dispatch
//!
//! ## Overview
//!
//! When the evaluator decides a threshold fires, its callback is invoked
//! directly and synchronously from inside `set_temperature`. There is no
//! queue, no batching and no executor: by the time `set_temperature`
//! returns, every callback for that reading has run.
//!
//! ## Failure Isolation
//!
//! A callback may report failure through [`CallbackError`]. Failures are
//! isolated per threshold:
//!
//! ```text
//! threshold A fires → callback Ok        → latched, counted
//! threshold B fires → callback Err(..)   → latched, counted, logged, recorded
//! threshold C fires → callback Ok        → still evaluated and notified
//! ```
//!
//! The failing threshold still latches: it fired for this visit to the band
//! and is not retried until the reading leaves the band and comes back. The
//! caller learns about failures from the returned [`DispatchReport`].
//!
//! ## Callback Kinds
//!
//! | Kind | Signature | Built with |
//! |------|-----------|------------|
//! | Infallible closure | `FnMut(&ThresholdEvent)` | `ThresholdConfig::new` |
//! | Fallible closure | `FnMut(&ThresholdEvent) -> Result<(), CallbackError>` | `ThresholdConfig::fallible` |
//! | Any observer | `impl ThresholdCallback` | `ThresholdConfig::with_callback` |
//! | Channel (std) | `mpsc::Sender<ThresholdEvent>` | `ChannelCallback::new` |

use alloc::string::String;
use alloc::vec::Vec;
use thiserror_no_std::Error;

use crate::events::ThresholdEvent;
use crate::registry::ThresholdId;
use crate::traits::ThresholdCallback;

/// Failure reported by a threshold callback
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Threshold callback failed: {message}")]
pub struct CallbackError {
    message: String,
}

impl CallbackError {
    /// Create error with a description of what went wrong
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Description of what went wrong
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A callback failure attributed to the threshold that fired
#[derive(Debug, Clone, PartialEq)]
pub struct CallbackFailure {
    /// Threshold whose callback failed
    pub id: ThresholdId,
    /// Event the callback was handling
    pub event: ThresholdEvent,
    /// What the callback reported
    pub error: CallbackError,
}

/// Outcome of notifying callbacks for a single reading
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchReport {
    /// Thresholds that fired (including ones whose callback failed)
    pub fired: usize,
    /// Callbacks that reported failure
    pub failures: Vec<CallbackFailure>,
}

impl DispatchReport {
    /// No threshold fired
    pub fn is_quiet(&self) -> bool {
        self.fired == 0
    }

    /// Every fired callback succeeded
    pub fn all_delivered(&self) -> bool {
        self.failures.is_empty()
    }

    /// Invoke a callback and account for the outcome
    pub(crate) fn deliver(
        &mut self,
        id: ThresholdId,
        callback: &mut dyn ThresholdCallback,
        event: ThresholdEvent,
    ) {
        self.fired += 1;
        if let Err(error) = callback.notify(&event) {
            log_warn!("threshold {} callback failed: {}", id, error);
            self.failures.push(CallbackFailure { id, event, error });
        }
    }
}

/// Adapter for closures that cannot fail
pub struct FnCallback<F>(pub F);

impl<F> ThresholdCallback for FnCallback<F>
where
    F: FnMut(&ThresholdEvent),
{
    fn notify(&mut self, event: &ThresholdEvent) -> Result<(), CallbackError> {
        (self.0)(event);
        Ok(())
    }
}

/// Adapter for closures that report failure
pub struct TryFnCallback<F>(pub F);

impl<F> ThresholdCallback for TryFnCallback<F>
where
    F: FnMut(&ThresholdEvent) -> Result<(), CallbackError>,
{
    fn notify(&mut self, event: &ThresholdEvent) -> Result<(), CallbackError> {
        (self.0)(event)
    }
}

/// Forwards events into a channel, e.g. towards a publishing thread
///
/// Fails once the receiving side has been dropped.
#[cfg(feature = "std")]
pub struct ChannelCallback {
    sender: std::sync::mpsc::Sender<ThresholdEvent>,
}

#[cfg(feature = "std")]
impl ChannelCallback {
    /// Forward into `sender`
    pub fn new(sender: std::sync::mpsc::Sender<ThresholdEvent>) -> Self {
        Self { sender }
    }
}

#[cfg(feature = "std")]
impl ThresholdCallback for ChannelCallback {
    fn notify(&mut self, event: &ThresholdEvent) -> Result<(), CallbackError> {
        self.sender
            .send(*event)
            .map_err(|_| CallbackError::new("event receiver disconnected"))
    }
}
