//! Construction errors for motion configuration.
//!
//! Every component validates its configuration up front. Once built, none of
//! them return errors: the worst runtime outcome is a stalled animation.

/// Error returned when a motion component is given invalid configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MotionError {
    /// The typewriter was given no phrases at all.
    #[error("typewriter needs at least one phrase")]
    EmptyPhraseList,
    /// Every typewriter phrase is the empty string, so nothing would ever be shown.
    #[error("typewriter phrases are all empty")]
    BlankPhraseList,
    /// A visibility threshold outside `0.0..=1.0` (or NaN).
    #[error("visibility threshold must be within 0.0..=1.0, got {0}")]
    ThresholdOutOfRange(f64),
    /// A timing interval that must be positive was zero.
    #[error("{0} interval must be greater than zero")]
    ZeroInterval(&'static str),
}
