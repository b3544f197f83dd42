//! HTTP Reading Source - Weather API Integration
//!
//! ## Overview
//!
//! Fetches the current air temperature from an HTTP JSON endpoint. The
//! payload shape is the one returned by the Open-Meteo forecast API when
//! asked for `current=temperature_2m`:
//!
//! ```json
//! { "current": { "time": "2024-01-01T12:00", "temperature_2m": 23.5 } }
//! ```
//!
//! Other fields are ignored. `temperature_2m` may be a JSON number or a
//! string holding a number (some proxies stringify values); anything else
//! is an invalid temperature.
//!
//! ## Design Decisions
//!
//! ### Blocking client, async interface
//!
//! The request is made with the lightweight `ureq` client. Since `ureq`
//! blocks, each attempt runs on tokio's blocking pool so the caller's
//! executor is never stalled.
//!
//! ### Pluggable transport
//!
//! The HTTP exchange sits behind [`HttpTransport`]. Production code uses
//! [`UreqTransport`]; tests plug in a canned transport and never touch the
//! network.
//!
//! ### Retries
//!
//! A single attempt by default. With `max_retries > 0`, transport errors,
//! 5xx and 429 responses are retried with exponential backoff. Client errors
//! and bad payloads are never retried; asking again will not fix them.
//!
//! ## Example Usage
//!
//! ```rust
//! use thermowatch_connectors::http::HttpConfig;
//!
//! let config = HttpConfig::open_meteo(47.5835702, -122.136270)
//!     .timeout_secs(10)
//!     .max_retries(2)
//!     .header("X-Client", "greenhouse-7");
//!
//! assert!(config.url.contains("current=temperature_2m"));
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::{FetchError, FetchStats, ReadingSource};

/// Base URL of the Open-Meteo forecast API
pub const OPEN_METEO_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// HTTP source configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Full URL to GET
    pub url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Custom headers
    pub headers: HashMap<String, String>,
    /// Extra attempts after a retryable failure
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each further retry
    pub retry_backoff: Duration,
    /// User agent string
    pub user_agent: String,
}

impl HttpConfig {
    /// Create new configuration for a URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(30),
            headers: HashMap::new(),
            max_retries: 0,
            retry_backoff: Duration::from_millis(200),
            user_agent: format!("Thermowatch/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Current 2m air temperature at a location from Open-Meteo
    pub fn open_meteo(latitude: f64, longitude: f64) -> Self {
        Self::new(format!(
            "{}?latitude={}&longitude={}&current=temperature_2m",
            OPEN_METEO_FORECAST_URL, latitude, longitude
        ))
    }

    /// Set request timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Retry transient failures up to `retries` extra times
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the initial retry delay
    pub fn retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    /// Add custom header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    fn validate(&self) -> Result<(), FetchError> {
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(FetchError::Config("URL must start with http:// or https://".into()));
        }
        Ok(())
    }

    fn backoff_for(&self, attempt: u32) -> Duration {
        self.retry_backoff
            .saturating_mul(1u32.checked_shl(attempt.saturating_sub(1)).unwrap_or(u32::MAX))
    }
}

/// Raw HTTP answer: status plus body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a blocking HTTP GET
///
/// Any HTTP status is an `Ok` response; only failures to get an answer at
/// all (DNS, connect, timeout) are errors.
pub trait HttpTransport: Send + Sync + 'static {
    fn get(&self, url: &str, headers: &HashMap<String, String>) -> Result<HttpResponse, FetchError>;
}

/// Transport backed by a `ureq` agent
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(config: &HttpConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();
        Self { agent }
    }
}

impl HttpTransport for UreqTransport {
    fn get(&self, url: &str, headers: &HashMap<String, String>) -> Result<HttpResponse, FetchError> {
        let mut request = self.agent.get(url).set("Accept", "application/json");
        for (name, value) in headers {
            request = request.set(name, value);
        }

        let (status, response) = match request.call() {
            Ok(response) => (response.status(), response),
            Err(ureq::Error::Status(code, response)) => (code, response),
            Err(ureq::Error::Transport(e)) => return Err(FetchError::Transport(e.to_string())),
        };

        let body = response
            .into_string()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[derive(Deserialize)]
struct ForecastResponse {
    current: CurrentConditions,
}

#[derive(Deserialize)]
struct CurrentConditions {
    temperature_2m: serde_json::Value,
}

/// Extract `current.temperature_2m` from a forecast body
pub fn parse_temperature(body: &str) -> Result<f64, FetchError> {
    let forecast: ForecastResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Payload(e.to_string()))?;

    let value = match &forecast.current.temperature_2m {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                None
            } else {
                text.parse::<f64>().ok()
            }
        }
        _ => None,
    };

    match value {
        Some(celsius) if celsius.is_finite() => Ok(celsius),
        _ => Err(FetchError::InvalidTemperature),
    }
}

/// Reading source polling an HTTP JSON endpoint
pub struct HttpTemperatureSource<T: HttpTransport = UreqTransport> {
    config: HttpConfig,
    transport: Arc<T>,
    stats: FetchStats,
}

impl HttpTemperatureSource<UreqTransport> {
    /// Create source using a `ureq` agent built from `config`
    pub fn new(config: HttpConfig) -> Result<Self, FetchError> {
        let transport = UreqTransport::new(&config);
        Self::with_transport(config, transport)
    }
}

impl<T: HttpTransport> HttpTemperatureSource<T> {
    /// Create source over a custom transport
    pub fn with_transport(config: HttpConfig, transport: T) -> Result<Self, FetchError> {
        config.validate()?;
        Ok(Self {
            config,
            transport: Arc::new(transport),
            stats: FetchStats::default(),
        })
    }

    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// One GET on the blocking pool, mapped to a reading
    async fn attempt(&self) -> Result<f64, FetchError> {
        let transport = Arc::clone(&self.transport);
        let url = self.config.url.clone();
        let headers = self.config.headers.clone();

        let response = tokio::task::spawn_blocking(move || transport.get(&url, &headers))
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))??;

        if !response.is_success() {
            return Err(FetchError::Status { status: response.status });
        }
        parse_temperature(&response.body)
    }

    fn record_failure(&mut self, error: &FetchError) {
        self.stats.fetches_failed += 1;
        self.stats.last_error = Some(error.to_string());
        log::warn!("{} ({})", error, self.config.url);
    }
}

#[async_trait::async_trait]
impl<T: HttpTransport> ReadingSource for HttpTemperatureSource<T> {
    async fn fetch(&mut self) -> Result<f64, FetchError> {
        let mut attempt = 0;
        loop {
            if attempt > 0 {
                // Exponential backoff
                tokio::time::sleep(self.config.backoff_for(attempt)).await;
                self.stats.retries += 1;
            }

            log::debug!("GET {} (attempt {})", self.config.url, attempt + 1);
            match self.attempt().await {
                Ok(celsius) => {
                    self.stats.fetches_succeeded += 1;
                    return Ok(celsius);
                }
                Err(error) if error.is_retryable() && attempt < self.config.max_retries => {
                    log::debug!("retrying after: {}", error);
                    attempt += 1;
                }
                Err(error) => {
                    self.record_failure(&error);
                    return Err(error);
                }
            }
        }
    }

    fn stats(&self) -> FetchStats {
        self.stats.clone()
    }
}
