//! Motion core for the portfolio site: reveal-on-scroll and the hero typewriter.
//!
//! This crate holds every piece of the site that carries state over time. It
//! never talks to the browser directly. Timers and viewport observation are
//! injected through the [`scheduler::Scheduler`] and
//! [`observer::ViewportObserver`] capabilities, so the same state machines run
//! under real `setTimeout` / `IntersectionObserver` in the browser and under a
//! deterministic [`clock::VirtualClock`] / [`manual::ManualObserver`] in tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`scheduler`] | Timer capability and handles |
//! | [`clock`] | Deterministic virtual clock implementing the scheduler |
//! | [`observer`] | Viewport observation capability and [`observer::Threshold`] |
//! | [`manual`] | Synchronous fake observer that delivers fabricated ratios |
//! | [`visibility`] | One-shot [`visibility::VisibilityTracker`] |
//! | [`reveal`] | Pure mapping from visibility to reveal presentation |
//! | [`typewriter`] | Typing/deleting state machine |
//! | [`driver`] | Scheduler-driven runner for the typewriter |
//! | [`scroll`] | Scroll threshold and anchor offset math |
//! | [`splash`] | One-shot timed splash overlay |
//! | [`consts`] | Default timings and offsets |
//! | [`error`] | [`error::MotionError`] |

pub mod clock;
pub mod consts;
pub mod driver;
pub mod error;
pub mod manual;
pub mod observer;
pub mod reveal;
pub mod scheduler;
pub mod scroll;
pub mod splash;
pub mod typewriter;
pub mod visibility;

pub use error::MotionError;
