//! Shared reactive state provided through Leptos context.

pub mod ui;
