//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `home` composes the scrolling sections; `project` renders one case study
//! by slug. Both read content from context and delegate rendering details to
//! `components`.

pub mod home;
pub mod project;
