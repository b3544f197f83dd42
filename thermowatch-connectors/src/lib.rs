//! Remote Reading Sources for Thermowatch
//!
//! ## Overview
//!
//! The threshold engine in `thermowatch-core` is synchronous and knows
//! nothing about networks. This crate supplies readings from the outside
//! world: a source performs the (possibly slow, possibly failing) fetch,
//! and [`fetch_temperature`] hands the parsed value to
//! [`Thermometer::set_temperature`], which evaluates thresholds as usual.
//!
//! ```text
//! ReadingSource::fetch ──await──► f64 °C ──► Thermometer::set_temperature
//!        │                                          │
//!        └── FetchError ("Failed to fetch           └── callbacks fire
//!            temperature: ...")                         synchronously
//! ```
//!
//! ## Responsibilities
//!
//! Everything about the network call belongs to the source, not to the
//! engine:
//! - **Timeouts**: configured on the HTTP agent
//! - **Retries**: off by default; opt in with exponential backoff
//! - **Cancellation**: drop the future
//!
//! ## Error Reporting
//!
//! Every fetch failure is a [`FetchError`] whose message starts with
//! `Failed to fetch temperature:` followed by the underlying cause, so it is
//! never confused with the engine's own `InvalidInput`/`NotInitialized`.
//!
//! ## Example Usage
//!
//! ```no_run
//! use thermowatch_connectors::{fetch_temperature, http::{HttpConfig, HttpTemperatureSource}};
//! use thermowatch_core::{Thermometer, ThresholdConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut thermometer = Thermometer::new();
//! thermometer.add_threshold(ThresholdConfig::new(0.0, |event| println!("frost: {}", event)))?;
//!
//! let config = HttpConfig::open_meteo(47.5835702, -122.136270).timeout_secs(10);
//! let mut source = HttpTemperatureSource::new(config)?;
//!
//! fetch_temperature(&mut source, &mut thermometer).await?;
//! println!("now {}°C", thermometer.celsius()?);
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpResponse, HttpTemperatureSource, HttpTransport, UreqTransport};

use thermowatch_core::{DispatchReport, Thermometer, ThermometerError};
use thiserror::Error;

/// Failures on the remote reading path
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network or transport error
    #[error("Failed to fetch temperature: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("Failed to fetch temperature: HTTP error! status: {status}")]
    Status { status: u16 },

    /// Body did not have the expected shape
    #[error("Failed to fetch temperature: malformed response: {0}")]
    Payload(String),

    /// Temperature field present but not a number
    #[error("Failed to fetch temperature: Invalid temperature value fetched")]
    InvalidTemperature,

    /// Engine refused the fetched reading
    #[error("Failed to fetch temperature: {0}")]
    Rejected(#[from] ThermometerError),

    /// Source configuration is unusable
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FetchError {
    /// Whether trying again might succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Transport(_) => true,
            // Server error or rate limit
            FetchError::Status { status } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

/// A place temperature readings come from
#[async_trait::async_trait]
pub trait ReadingSource: Send {
    /// Fetch the current temperature in Celsius
    async fn fetch(&mut self) -> Result<f64, FetchError>;

    /// Get fetch statistics
    fn stats(&self) -> FetchStats;
}

/// Fetch statistics common to all sources
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FetchStats {
    /// Fetches that produced a reading
    pub fetches_succeeded: u64,
    /// Fetches that ended in an error
    pub fetches_failed: u64,
    /// Extra attempts made after retryable failures
    pub retries: u32,
    /// Last error message
    pub last_error: Option<String>,
}

/// Fetch a reading from `source` and record it on `thermometer`
///
/// Thresholds are evaluated synchronously once the reading arrives; the
/// returned report says which fired. On failure the thermometer is left
/// untouched.
///
/// `Thermometer` owns non-`Send` callbacks, so the returned future is not
/// `Send` either. Await it on the task that owns the thermometer (a
/// current-thread runtime, `#[tokio::main(flavor = "current_thread")]`, or a
/// `tokio::task::LocalSet`); it cannot be passed to `tokio::spawn`. Sources
/// themselves are `Send` and may be moved between tasks.
pub async fn fetch_temperature<S>(
    source: &mut S,
    thermometer: &mut Thermometer,
) -> Result<DispatchReport, FetchError>
where
    S: ReadingSource + ?Sized,
{
    let celsius = source.fetch().await?;
    log::debug!("fetched {}°C", celsius);

    let report = thermometer.set_temperature(celsius)?;
    if !report.all_delivered() {
        log::warn!("{} threshold callback(s) failed after fetch", report.failures.len());
    }

    Ok(report)
}
