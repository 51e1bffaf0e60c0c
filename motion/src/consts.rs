//! Shared timing and geometry defaults for the motion crate.

// ── Typewriter ──────────────────────────────────────────────────

/// Delay between characters while a phrase is being typed.
pub const TYPE_INTERVAL_MS: u32 = 100;

/// Delay between characters while a phrase is being deleted.
pub const DELETE_INTERVAL_MS: u32 = 50;

/// Pause after a phrase is fully typed, before deletion starts.
pub const HOLD_INTERVAL_MS: u32 = 2000;

// ── Reveal ──────────────────────────────────────────────────────

/// Fraction of a block that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

// ── Scroll ──────────────────────────────────────────────────────

/// Scroll offset past which the navbar switches to its solid background.
pub const NAV_SCROLL_OFFSET: f64 = 50.0;

/// Height of the fixed header; anchor jumps land this far below the top.
pub const HEADER_OFFSET: f64 = 80.0;

// ── Splash ──────────────────────────────────────────────────────

/// How long the splash overlay stays up after mount.
pub const SPLASH_DURATION_MS: u32 = 2500;
