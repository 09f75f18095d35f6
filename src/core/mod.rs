//! Core logic: planning, templating, preview and application.
//!
//! Everything except `apply` is pure; the UI layer feeds it state and renders
//! the results.

pub mod apply;
pub mod entities;
pub mod formats;
pub mod nuke;
pub mod plan;
pub mod preview;
pub mod template;
