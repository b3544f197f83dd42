//! Freezing and Boiling Alerts
//!
//! This demo watches two reference points of water and prints a line each
//! time the temperature reaches one of them.
//!
//! ## What You'll Learn
//!
//! - Registering thresholds with closures
//! - Restricting a threshold to one crossing direction
//! - Reading back the current temperature in other units
//!
//! ## Running the Demo
//!
//! ```bash
//! cargo run --example freezing_alert
//! ```

use thermowatch_core::{
    constants::{WATER_BOILING_POINT_C, WATER_FREEZING_POINT_C},
    Direction, Thermometer, ThermometerError, ThresholdConfig,
};

fn main() -> Result<(), ThermometerError> {
    println!("=== Thermowatch: freezing/boiling alerts ===\n");

    let mut thermometer = Thermometer::new();

    thermometer.add_threshold(
        ThresholdConfig::new(WATER_FREEZING_POINT_C, |event| {
            println!("  ❄ freezing point reached: {}", event);
        })
        .direction(Direction::Decreasing),
    )?;

    thermometer.add_threshold(
        ThresholdConfig::new(WATER_BOILING_POINT_C, |event| {
            println!("  ♨ boiling point reached: {}", event);
        })
        .tolerance(1.0),
    )?;

    // A kettle left outside overnight, then put on the stove
    let readings = [4.0, 2.5, 0.3, -1.2, -0.4, 0.2, 18.0, 65.0, 99.4, 100.0, 96.0];

    for reading in readings {
        let report = thermometer.set_temperature(reading)?;
        println!(
            "{:>6.1}°C = {:>6.1}°F  (thresholds fired: {})",
            thermometer.celsius()?,
            thermometer.fahrenheit()?,
            report.fired
        );
    }

    Ok(())
}
