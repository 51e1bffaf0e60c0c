//! UI components for the portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections read the loaded [`crate::content::SiteContent`] from context and
//! wrap each block in [`reveal::Reveal`] so it fades in the first time it
//! scrolls into view. The hero mounts the only typewriter.
//!
//! Browser-facing setup (observers, timers, scroll listeners) sits behind the
//! `csr` feature; the pure helpers each component exposes are what the
//! sibling `_test.rs` files cover.

pub mod about;
pub mod anchor;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod navbar;
pub mod projects;
pub mod reveal;
pub mod section_heading;
pub mod skills;
pub mod social;
pub mod splash;
pub mod tags;
pub mod typewriter;
