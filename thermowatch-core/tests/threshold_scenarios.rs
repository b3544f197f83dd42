//! Integration tests for threshold notifications
//!
//! Drives a `Thermometer` through reading sequences and checks when
//! callbacks fire, what they receive, and how failures are isolated.

mod common;

use std::cell::Cell;
use std::rc::Rc;

use thermowatch_core::{
    CallbackError, ChannelCallback, Direction, Thermometer, ThermometerError, ThresholdConfig,
};

use common::{event, feed, Recorder};

// ===== THRESHOLD MANAGEMENT =====

#[test]
fn add_and_remove_threshold() {
    let mut thermometer = Thermometer::new();
    let recorder = Recorder::new();
    let id = thermometer.add_threshold(recorder.threshold(0.0)).unwrap();

    assert!(thermometer.remove_threshold(id));
    assert!(!thermometer.remove_threshold(id)); // second removal fails
}

#[test]
fn removed_threshold_stops_firing() {
    let mut thermometer = Thermometer::new();
    let recorder = Recorder::new();
    let id = thermometer.add_threshold(recorder.threshold(0.0)).unwrap();

    feed(&mut thermometer, &[1.0, 0.0]);
    assert_eq!(recorder.count(), 1);

    thermometer.remove_threshold(id);
    feed(&mut thermometer, &[5.0, 0.0]);
    assert_eq!(recorder.count(), 1);
}

#[test]
fn negative_tolerance_is_config_error() {
    let mut thermometer = Thermometer::new();
    let result = thermometer.add_threshold(ThresholdConfig::new(0.0, |_| {}).tolerance(-0.5));

    assert!(matches!(result, Err(ThermometerError::InvalidConfig { .. })));
    assert_eq!(thermometer.threshold_count(), 0);
}

// ===== CALLBACK SCENARIOS =====

#[test]
fn fires_from_both_directions() {
    let mut thermometer = Thermometer::new();
    let recorder = Recorder::new();
    thermometer.add_threshold(recorder.threshold(0.0)).unwrap();

    // Decreasing into the band
    feed(&mut thermometer, &[1.0, 0.0]);
    assert_eq!(recorder.count(), 1);
    assert_eq!(recorder.last(), Some(event(0.0, 0.0, Direction::Decreasing)));

    // Increasing into the band
    feed(&mut thermometer, &[-10.0, 0.0]);
    assert_eq!(recorder.count(), 2);
    assert_eq!(recorder.last(), Some(event(0.0, 0.0, Direction::Increasing)));
}

#[test]
fn zero_tolerance_fires_on_exact_first_reading() {
    let mut thermometer = Thermometer::new();
    let recorder = Recorder::new();
    thermometer.add_threshold(recorder.threshold(10.0).tolerance(0.0)).unwrap();

    let report = thermometer.set_temperature(10.0).unwrap();

    assert_eq!(report.fired, 1);
    assert_eq!(recorder.events(), vec![event(10.0, 10.0, Direction::Either)]);
}

#[test]
fn respects_direction_constraint() {
    let mut thermometer = Thermometer::new();
    let recorder = Recorder::new();
    thermometer
        .add_threshold(recorder.threshold(0.0).direction(Direction::Decreasing))
        .unwrap();

    // Increasing into the band: no notification
    feed(&mut thermometer, &[-1.0, 0.0]);
    assert_eq!(recorder.count(), 0);

    // Decreasing into the band
    feed(&mut thermometer, &[1.0, 0.0]);
    assert_eq!(recorder.count(), 1);
    assert_eq!(recorder.last(), Some(event(0.0, 0.0, Direction::Decreasing)));
}

#[test]
fn directional_threshold_ignores_first_reading() {
    let mut thermometer = Thermometer::new();
    let rising = Recorder::new();
    let falling = Recorder::new();
    thermometer.add_threshold(rising.threshold(5.0).direction(Direction::Increasing)).unwrap();
    thermometer.add_threshold(falling.threshold(5.0).direction(Direction::Decreasing)).unwrap();

    // Placeholder previous value is 0.0, which must not count as "rising"
    thermometer.set_temperature(5.0).unwrap();

    assert_eq!(rising.count(), 0);
    assert_eq!(falling.count(), 0);
}

#[test]
fn noise_inside_tolerance_fires_once() {
    let mut thermometer = Thermometer::new();
    let recorder = Recorder::new();
    thermometer.add_threshold(recorder.threshold(0.0).tolerance(0.5)).unwrap();

    // Fluctuation around 0°C, first entering the band at 0.5
    feed(&mut thermometer, &[1.5, 1.0, 0.5, 0.0, -0.5, 0.0, -0.5, 0.0, 0.5, 0.0]);

    assert_eq!(recorder.events(), vec![event(0.5, 0.0, Direction::Decreasing)]);
}

#[test]
fn reading_just_outside_band_edge_does_not_fire() {
    let mut thermometer = Thermometer::new();
    let recorder = Recorder::new();
    thermometer.add_threshold(recorder.threshold(0.0).tolerance(0.5)).unwrap();

    feed(&mut thermometer, &[2.0, 0.50000001]);
    assert_eq!(recorder.count(), 0);

    // Exactly on the edge is inside
    thermometer.set_temperature(0.5).unwrap();
    assert_eq!(recorder.events(), vec![event(0.5, 0.0, Direction::Decreasing)]);
}

#[test]
fn leaving_tolerance_resets_trigger() {
    let mut thermometer = Thermometer::new();
    let recorder = Recorder::new();
    thermometer.add_threshold(recorder.threshold(0.0).tolerance(0.5)).unwrap();

    feed(&mut thermometer, &[1.0, 0.0]);
    assert_eq!(recorder.count(), 1);

    // Well outside tolerance, then back
    feed(&mut thermometer, &[2.0, 0.0]);
    assert_eq!(recorder.count(), 2);
}

#[test]
fn unchanged_reading_reports_either() {
    let mut thermometer = Thermometer::new();
    thermometer.set_temperature(0.0).unwrap();

    let recorder = Recorder::new();
    thermometer.add_threshold(recorder.threshold(0.0)).unwrap();

    // Same value again: in band, neither rising nor falling
    thermometer.set_temperature(0.0).unwrap();

    assert_eq!(recorder.events(), vec![event(0.0, 0.0, Direction::Either)]);
}

#[test]
fn invalid_reading_does_not_disturb_latch() {
    let mut thermometer = Thermometer::new();
    let recorder = Recorder::new();
    let id = thermometer.add_threshold(recorder.threshold(0.0)).unwrap();

    feed(&mut thermometer, &[1.0, 0.0]);
    assert_eq!(thermometer.set_temperature(f64::NAN), Err(ThermometerError::InvalidInput));

    assert!(!thermometer.threshold(id).unwrap().armed);
    assert_eq!(thermometer.celsius(), Ok(0.0));
    assert_eq!(recorder.count(), 1);
}

// ===== MULTIPLE THRESHOLDS =====

#[test]
fn multiple_thresholds_fire_independently() {
    let mut thermometer = Thermometer::new();
    thermometer.set_temperature(10.0).unwrap();

    let freezing = Recorder::new();
    let boiling = Recorder::new();
    thermometer.add_threshold(freezing.threshold(0.0).tolerance(1.0)).unwrap();
    thermometer.add_threshold(boiling.threshold(100.0).tolerance(1.0)).unwrap();

    feed(&mut thermometer, &[-50.0, 0.0, 100.0, 50.0, 100.0, 0.0]);

    assert_eq!(freezing.count(), 2);
    assert_eq!(boiling.count(), 2);
}

#[test]
fn multiple_thresholds_latch_independently() {
    let mut thermometer = Thermometer::new();
    thermometer.set_temperature(10.0).unwrap();

    let freezing = Recorder::new();
    let boiling = Recorder::new();
    thermometer.add_threshold(freezing.threshold(0.0).tolerance(1.0)).unwrap();
    thermometer.add_threshold(boiling.threshold(100.0).tolerance(1.0)).unwrap();

    feed(&mut thermometer, &[0.0, -1.0, 0.0, 100.0, 101.0, 100.0]);

    assert_eq!(freezing.count(), 1);
    assert_eq!(boiling.count(), 1);
}

#[test]
fn overlapping_bands_both_fire() {
    let mut thermometer = Thermometer::new();
    let wide = Recorder::new();
    let narrow = Recorder::new();
    thermometer.add_threshold(wide.threshold(20.0).tolerance(2.0)).unwrap();
    thermometer.add_threshold(narrow.threshold(20.0).tolerance(0.1)).unwrap();

    let reports = feed(&mut thermometer, &[25.0, 21.5, 20.0]);

    assert_eq!(reports[1].fired, 1); // only the wide band
    assert_eq!(reports[2].fired, 1); // narrow band, wide already latched
    assert_eq!(wide.count(), 1);
    assert_eq!(narrow.count(), 1);
}

// ===== CALLBACK FAILURES =====

#[test]
fn failing_callback_is_isolated() {
    let mut thermometer = Thermometer::new();
    let healthy = Recorder::new();
    let attempts = Rc::new(Cell::new(0));

    let counter = Rc::clone(&attempts);
    let failing = thermometer
        .add_threshold(ThresholdConfig::fallible(0.0, move |_| {
            counter.set(counter.get() + 1);
            Err(CallbackError::new("pager offline"))
        }))
        .unwrap();
    thermometer.add_threshold(healthy.threshold(0.0)).unwrap();

    let reports = feed(&mut thermometer, &[1.0, 0.0]);
    let report = &reports[1];

    // Both fired; only one delivery failed
    assert_eq!(report.fired, 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].id, failing);
    assert_eq!(report.failures[0].event, event(0.0, 0.0, Direction::Decreasing));
    assert_eq!(healthy.count(), 1);

    // The failing threshold latched like any other
    assert!(!thermometer.threshold(failing).unwrap().armed);
    thermometer.set_temperature(0.2).unwrap();
    assert_eq!(attempts.get(), 1);

    // Reading store unaffected
    assert_eq!(thermometer.celsius(), Ok(0.2));
}

#[test]
fn channel_callback_receives_events() {
    let mut thermometer = Thermometer::new();
    let (tx, rx) = std::sync::mpsc::channel();
    thermometer
        .add_threshold(ThresholdConfig::with_callback(30.0, ChannelCallback::new(tx)))
        .unwrap();

    feed(&mut thermometer, &[25.0, 30.2]);

    assert_eq!(rx.try_recv().unwrap(), event(30.2, 30.0, Direction::Increasing));
    assert!(rx.try_recv().is_err());
}

#[test]
fn independent_thermometers_do_not_share_state() {
    let mut indoor = Thermometer::new();
    let mut outdoor = Thermometer::new();
    let recorder = Recorder::new();
    indoor.add_threshold(recorder.threshold(0.0)).unwrap();

    feed(&mut outdoor, &[1.0, 0.0]);

    assert_eq!(recorder.count(), 0);
    assert!(!indoor.is_initialized());
}
