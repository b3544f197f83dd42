//! Constants for Thermowatch Core
//!
//! Reference temperatures and engine defaults. All temperatures are in
//! degrees Celsius unless the name says otherwise.

// ===== FUNDAMENTAL PHYSICS CONSTANTS =====

/// Absolute zero in Celsius (°C).
///
/// Offset between the Celsius and Kelvin scales.
///
/// Source: NIST Special Publication 330 (2019)
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// Freezing point of water at standard pressure (°C).
pub const WATER_FREEZING_POINT_C: f64 = 0.0;

/// Boiling point of water at standard pressure (°C).
pub const WATER_BOILING_POINT_C: f64 = 100.0;

/// Fahrenheit value of 0°C.
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

// ===== ENGINE DEFAULTS =====

/// Default half-width of the tolerance band around a trigger value (°C).
///
/// ±0.5°C covers the quantization and noise of common consumer-grade
/// sensors (DS18B20, DHT22), so a reading jittering around a trigger only
/// counts as one visit.
pub const DEFAULT_TOLERANCE_C: f64 = 0.5;

/// Value held in the reading store before the first reading arrives.
///
/// Never interpreted as a real measurement.
pub const UNINITIALIZED_READING: f64 = 0.0;
