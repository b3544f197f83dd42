//! Noisy Sensor and Failing Callbacks
//!
//! Simulates a jittery sensor hovering around a trigger value and shows
//! that the tolerance band turns the jitter into a single notification.
//! One of the callbacks fails on purpose to show failure isolation.
//!
//! ## Running the Demo
//!
//! ```bash
//! cargo run --example noisy_sensor
//! ```

use thermowatch_core::{CallbackError, Thermometer, ThermometerError, ThresholdConfig};

fn main() -> Result<(), ThermometerError> {
    println!("=== Thermowatch: noisy sensor ===\n");

    let mut thermometer = Thermometer::new();

    thermometer.add_threshold(
        ThresholdConfig::new(21.0, |event| println!("  → comfort setpoint: {}", event))
            .tolerance(0.3),
    )?;

    thermometer.add_threshold(ThresholdConfig::fallible(21.0, |_| {
        Err(CallbackError::new("remote logger unreachable"))
    }))?;

    // Simple LCG noise so the demo is deterministic
    let mut seed: u32 = 42;
    let mut noise = move || {
        seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
        (seed as f64 / u32::MAX as f64 - 0.5) * 0.4
    };

    let mut total_fired = 0;
    for step in 0..40 {
        // Ramp up to the setpoint and sit there
        let base = if step < 10 { 17.0 + step as f64 * 0.4 } else { 21.0 };
        let report = thermometer.set_temperature(base + noise())?;

        total_fired += report.fired;
        for failure in &report.failures {
            println!("  ✗ threshold {} callback failed: {}", failure.id, failure.error);
        }
    }

    println!("\nTotal notifications: {}", total_fired);
    Ok(())
}
