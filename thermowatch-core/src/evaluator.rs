//! Threshold Evaluator - Hysteresis and Direction State Machine
//!
//! ## Overview
//!
//! Every recorded reading is run through [`evaluate`] once per registered
//! threshold. The evaluator decides whether the threshold fires and updates
//! its latch (`armed`). It never calls callbacks itself; the caller
//! dispatches the returned event.
//!
//! ## Why a Latch?
//!
//! Sensors jitter. A reading hovering around 0°C produces a stream like
//! `0.5, 0.0, -0.5, 0.0, -0.5, 0.0` and a naive "value == trigger" check
//! would fire on half of those samples. The tolerance band plus latch turns
//! that into one notification per *visit*:
//!
//! ```text
//!            armed                 latched              armed
//!   ─────────────────────┬─────────────────────────┬──────────────
//!   outside band         │ enter band → FIRE       │ leave band → re-arm
//!                        │ stay in band → nothing  │
//! ```
//!
//! ## Decision Steps
//!
//! 1. **Gate**: on the very first reading there is no previous value, so a
//!    directional threshold (`Increasing`/`Decreasing`) is skipped entirely
//!    (no fire, no latch change). `Either` thresholds are still evaluated.
//! 2. **Band**: `trigger - tolerance <= current <= trigger + tolerance`.
//! 3. **Direction**: increasing iff `current > previous`, decreasing iff
//!    `current < previous`, both only when a real previous reading exists.
//!    Equal readings are neither.
//! 4. **Match**: `Either` always matches, otherwise the observed direction
//!    must equal the configured one.
//! 5. **Fire**: in band, matching and armed. The event reports the
//!    *resolved* direction. The threshold latches.
//! 6. **Re-arm**: out of band always re-arms, whatever the direction or
//!    latch state.
//! 7. Anything else leaves the threshold untouched.
//!
//! Note that a directional threshold that enters the band the wrong way
//! stays armed but cannot fire until it leaves the band and comes back the
//! right way, since a subsequent in-band move in the right direction *does*
//! match. Only the latch, not the direction, is sticky.

use crate::{
    events::{Direction, ThresholdEvent},
    reading::ReadingTransition,
    threshold::Threshold,
};

/// What happened to a threshold for one reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Directional threshold skipped on the first reading
    Skipped,
    /// Threshold fired and latched
    Fired(ThresholdEvent),
    /// Reading is outside the band; threshold is armed
    Rearmed,
    /// In band but direction mismatch or already latched
    Held,
}

/// Run one threshold against a reading transition
pub fn evaluate(transition: &ReadingTransition, threshold: &mut Threshold) -> Outcome {
    if !transition.had_prior && threshold.direction != Direction::Either {
        return Outcome::Skipped;
    }

    let current = transition.current;
    let in_band = threshold.in_band(current);

    let is_increasing = transition.is_increasing();
    let is_decreasing = transition.is_decreasing();

    let matches = match threshold.direction {
        Direction::Either => true,
        Direction::Increasing => is_increasing,
        Direction::Decreasing => is_decreasing,
    };

    if in_band && matches && threshold.armed {
        threshold.armed = false;
        return Outcome::Fired(ThresholdEvent {
            temperature: current,
            threshold: threshold.trigger,
            direction: Direction::resolve(is_increasing, is_decreasing),
        });
    }

    if !in_band {
        threshold.armed = true;
        return Outcome::Rearmed;
    }

    Outcome::Held
}
