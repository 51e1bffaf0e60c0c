//! Browser adapters and small helpers shared by components.
//!
//! Each adapter keeps its browser calls behind the `csr` feature and exposes
//! plain functions or types that compile (and mostly no-op) natively, so the
//! component tree and these helpers stay testable with `cargo test`.

pub mod links;
pub mod observer;
pub mod scheduler;
pub mod scroll;
