//! Viewport observation capability.
//!
//! Mirrors the shape of the platform intersection facility: register a target
//! with a threshold and a callback, get back an id, cancel by id. Delivery is
//! push-based; nothing here polls.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

use crate::consts::REVEAL_THRESHOLD;
use crate::error::MotionError;

/// Callback receiving the intersection ratio (`0.0..=1.0`) of an observed target.
pub type IntersectionCallback = Box<dyn FnMut(f64)>;

/// Identifies one registered observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObservationId(u64);

impl ObservationId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Fraction of a target's area that must be on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    /// Validate a threshold. NaN and values outside `0.0..=1.0` are rejected.
    pub fn new(value: f64) -> Result<Self, MotionError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(MotionError::ThresholdOutOfRange(value))
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether an observed ratio satisfies this threshold (inclusive).
    #[must_use]
    pub fn is_met_by(self, ratio: f64) -> bool {
        ratio >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(REVEAL_THRESHOLD)
    }
}

/// Platform facility that reports how much of a target is inside the viewport.
pub trait ViewportObserver {
    /// The element type this observer can watch.
    type Target: ?Sized;

    /// Start watching `target`. `callback` runs for every intersection change
    /// the platform reports until the observation is cancelled.
    fn observe(
        &self,
        target: &Self::Target,
        threshold: Threshold,
        callback: IntersectionCallback,
    ) -> ObservationId;

    /// Stop an observation. Unknown or already-cancelled ids are ignored.
    fn unobserve(&self, id: ObservationId);
}
