//! Unit conversion between Celsius, Fahrenheit and Kelvin

use crate::constants::{ABSOLUTE_ZERO_CELSIUS, FAHRENHEIT_OFFSET};

/// Convert Celsius to Fahrenheit (`c * 9/5 + 32`)
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    // Multiply before dividing so the reference points stay exact
    celsius * 9.0 / 5.0 + FAHRENHEIT_OFFSET
}

/// Convert Fahrenheit to Celsius
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - FAHRENHEIT_OFFSET) * 5.0 / 9.0
}

/// Convert Celsius to Kelvin
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius - ABSOLUTE_ZERO_CELSIUS
}
