//! Common test utilities for threshold integration tests
//!
//! Provides:
//! - A recording callback that captures every event it receives
//! - Helpers for feeding reading sequences into a thermometer

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use thermowatch_core::{
    Direction, DispatchReport, Thermometer, ThresholdConfig, ThresholdEvent,
};

/// Shared log of events delivered to a callback
#[derive(Clone, Default)]
pub struct Recorder {
    events: Rc<RefCell<Vec<ThresholdEvent>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Threshold config whose callback records into this recorder
    pub fn threshold(&self, trigger: f64) -> ThresholdConfig {
        let events = Rc::clone(&self.events);
        ThresholdConfig::new(trigger, move |event| events.borrow_mut().push(*event))
    }

    pub fn count(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn events(&self) -> Vec<ThresholdEvent> {
        self.events.borrow().clone()
    }

    pub fn last(&self) -> Option<ThresholdEvent> {
        self.events.borrow().last().copied()
    }

    pub fn directions(&self) -> Vec<Direction> {
        self.events.borrow().iter().map(|event| event.direction).collect()
    }
}

/// Feed readings in order, returning one report per reading
pub fn feed(thermometer: &mut Thermometer, readings: &[f64]) -> Vec<DispatchReport> {
    readings
        .iter()
        .map(|&reading| {
            thermometer
                .set_temperature(reading)
                .expect("test readings are finite")
        })
        .collect()
}

/// Event as the engine reports it
pub fn event(temperature: f64, threshold: f64, direction: Direction) -> ThresholdEvent {
    ThresholdEvent {
        temperature,
        threshold,
        direction,
    }
}
