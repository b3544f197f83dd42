//! Live Frost Watch
//!
//! Polls the Open-Meteo API for the current air temperature at a location
//! and raises a frost alert when it drops to 0°C.
//!
//! ## What You'll Learn
//!
//! - Building an HTTP reading source with retries
//! - Feeding fetched readings into a `Thermometer`
//! - Handling fetch failures without losing the last good reading
//!
//! ## Running the Demo
//!
//! ```bash
//! cargo run -p thermowatch-connectors --example open_meteo
//! ```

use std::time::Duration;

use thermowatch_connectors::{fetch_temperature, HttpConfig, HttpTemperatureSource, ReadingSource};
use thermowatch_core::{Direction, Thermometer, ThresholdConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Thermowatch: Open-Meteo frost watch ===\n");

    let mut thermometer = Thermometer::new();
    thermometer.add_threshold(
        ThresholdConfig::new(0.0, |event| println!("  ❄ frost alert: {}", event))
            .direction(Direction::Decreasing)
            .tolerance(1.0),
    )?;

    // Redmond, WA
    let config = HttpConfig::open_meteo(47.5835702, -122.136270)
        .timeout_secs(10)
        .max_retries(2);
    let mut source = HttpTemperatureSource::new(config)?;

    for poll in 1..=3 {
        match fetch_temperature(&mut source, &mut thermometer).await {
            Ok(report) => println!(
                "poll {}: {:.1}°C / {:.1}°F (thresholds fired: {})",
                poll,
                thermometer.celsius()?,
                thermometer.fahrenheit()?,
                report.fired
            ),
            Err(e) => println!("poll {}: {}", poll, e),
        }
        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    println!("\n{:?}", source.stats());
    Ok(())
}
