//! Threshold Events
//!
//! ## Overview
//!
//! A [`ThresholdEvent`] is the message handed to a callback when a threshold
//! fires. It is transient and immutable: the engine builds it, passes a
//! reference to the callback, and forgets it. Nothing is queued or stored.
//!
//! ## Configured vs Resolved Direction
//!
//! [`Direction`] plays two roles:
//!
//! ```text
//! Configured (on the threshold)        Resolved (on the event)
//! ├── Increasing: rising edges only    ├── Increasing: current > previous
//! ├── Decreasing: falling edges only   ├── Decreasing: current < previous
//! └── Either: any visit to the band    └── Either: no prior reading, or
//!                                          current == previous
//! ```
//!
//! A threshold configured with `Either` therefore reports the direction that
//! was actually observed, which is usually what an alert message wants
//! ("dropped to 0°C" vs "rose to 0°C").

use core::fmt;

/// Crossing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Direction {
    /// Reading went up
    Increasing = 0,
    /// Reading went down
    Decreasing = 1,
    /// Either way (or no observable direction)
    #[default]
    Either = 2,
}

impl Direction {
    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Direction::Increasing => "increasing",
            Direction::Decreasing => "decreasing",
            Direction::Either => "either",
        }
    }

    /// Resolve the observed direction of a reading transition
    pub const fn resolve(is_increasing: bool, is_decreasing: bool) -> Self {
        if is_increasing {
            Direction::Increasing
        } else if is_decreasing {
            Direction::Decreasing
        } else {
            Direction::Either
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Notification passed to a threshold callback
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThresholdEvent {
    /// Reading that caused the threshold to fire (°C)
    pub temperature: f64,
    /// Trigger value of the threshold that fired (°C)
    pub threshold: f64,
    /// Direction actually observed when firing
    pub direction: Direction,
}

impl fmt::Display for ThresholdEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}°C reached threshold {}°C ({})",
            self.temperature, self.threshold, self.direction
        )
    }
}
