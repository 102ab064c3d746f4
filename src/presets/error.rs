//! Preset pipeline error types.

use std::path::PathBuf;

/// Fatal errors raised while generating preset artifacts.
///
/// Recoverable anomalies (unparseable colors, unterminated blocks, missing
/// allow-list entries) are logged and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("failed to read preset catalog '{}': {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid entry pattern for indent {indent}: {source}")]
    EntryPattern { indent: usize, source: regex::Error },

    #[error("no presets found in catalog{}", location(.path.as_ref()))]
    NothingExtracted { path: Option<PathBuf> },

    #[error("none of the {found} extracted presets matched the allow-list [{}]", .allowed.join(", "))]
    NothingSelected { found: usize, allowed: Vec<String> },

    #[error("default theme is missing roles: {}", .missing.join(", "))]
    IncompleteDefaults { missing: Vec<String> },

    #[error("failed to read config '{}': {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config '{}': {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },
}

fn location(path: Option<&PathBuf>) -> String {
    path.map(|p| format!(" '{}'", p.display()))
        .unwrap_or_default()
}
