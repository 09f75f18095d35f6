//! SHOTSMITH - VFX show folder structurer library
//!
//! Re-exports all modules for use by the binary target.

pub mod cli;
pub mod config;
pub mod core;
pub mod paths;
pub mod tabs;
pub mod widgets;

// Re-export commonly used types
pub use config::FolderConfig;
pub use core::entities::{CreationMode, RenderSettings, SequenceEntry};
pub use core::plan::StructurePlan;
