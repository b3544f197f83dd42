//! Threshold Registry
//!
//! Maps opaque [`ThresholdId`]s to registered thresholds. Identifiers come
//! from a per-registry counter and are never handed out twice, even after
//! the threshold they named has been removed.
//!
//! Iteration order is an implementation detail. Thresholds never interact
//! with each other, so nothing may depend on the order they are visited in.

use alloc::collections::BTreeMap;
use core::fmt;

use crate::{
    errors::ThermometerResult,
    threshold::{Threshold, ThresholdConfig, ThresholdInfo},
};

/// Opaque handle returned when a threshold is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ThresholdId(u64);

impl ThresholdId {
    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ThresholdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Registered thresholds, keyed by identifier
#[derive(Debug, Default)]
pub struct ThresholdRegistry {
    thresholds: BTreeMap<ThresholdId, Threshold>,
    next_id: u64,
}

impl ThresholdRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a threshold, armed
    pub fn register(
        &mut self,
        config: ThresholdConfig,
        default_tolerance: f64,
    ) -> ThermometerResult<ThresholdId> {
        let threshold = config.build(default_tolerance)?;

        let id = ThresholdId::from_raw(self.next_id);
        self.next_id += 1;
        self.thresholds.insert(id, threshold);

        Ok(id)
    }

    /// Remove a threshold; `true` only if it was registered
    pub fn unregister(&mut self, id: ThresholdId) -> bool {
        self.thresholds.remove(&id).is_some()
    }

    /// Visit every threshold mutably, in unspecified order
    pub fn for_each_mut(&mut self, mut visitor: impl FnMut(ThresholdId, &mut Threshold)) {
        for (id, threshold) in self.thresholds.iter_mut() {
            visitor(*id, threshold);
        }
    }

    /// Visit every threshold, in unspecified order
    pub fn for_each(&self, mut visitor: impl FnMut(ThresholdId, &Threshold)) {
        for (id, threshold) in self.thresholds.iter() {
            visitor(*id, threshold);
        }
    }

    /// Snapshot of a registered threshold
    pub fn get(&self, id: ThresholdId) -> Option<ThresholdInfo> {
        self.thresholds.get(&id).map(Threshold::info)
    }

    /// Whether `id` is currently registered
    pub fn contains(&self, id: ThresholdId) -> bool {
        self.thresholds.contains_key(&id)
    }

    /// Number of registered thresholds
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// No thresholds registered
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }
}
