//! preset-gen - build-time theme preset generator
//!
//! Turns a catalog of named theme presets into a stylesheet of OKLCH custom
//! properties and a typed metadata module for a preset picker.

#![allow(clippy::uninlined_format_args)] // Style preference
#![allow(clippy::format_push_string)] // Performance improvement but stylistic
#![allow(clippy::return_self_not_must_use)] // Builder pattern is clear enough
#![allow(clippy::items_after_statements)] // Locally-scoped use statements are fine

pub mod cli;
pub mod config;
pub mod logger;
pub mod presets;
pub mod ui;

pub use config::GeneratorConfig;
pub use presets::{PresetError, RunSummary, check, generate, list, run};
