//! Theme preset generation.
//!
//! Reads a catalog of named theme presets written as program source, completes
//! each preset from a default theme, and renders two artifacts from the same
//! merged data:
//!
//! - a stylesheet with `:root[data-preset="…"]` and `.dark[data-preset="…"]`
//!   rule blocks assigning OKLCH custom properties
//! - a metadata module listing each preset's name, label and three swatch
//!   colors, led by an entry for the default theme
//!
//! # Usage
//!
//! ```ignore
//! use preset_gen::config::GeneratorConfig;
//! use preset_gen::presets;
//!
//! let config = GeneratorConfig::load(None)?;
//! let summary = presets::run(&config)?;
//! println!("wrote {} presets", summary.selected.len());
//! ```

pub mod color;
pub mod defaults;
pub mod emit;
mod error;
pub mod extract;
pub mod merge;
pub mod roles;
pub mod scanner;
mod schema;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::GeneratorConfig;
use crate::{log_debug, log_info, log_warn};

pub use color::to_oklch;
pub use defaults::{DefaultTheme, DefaultThemeOverrides};
pub use emit::{Banner, PresetMeta};
pub use error::PresetError;
pub use extract::PresetExtractor;
pub use merge::{merge_all, merge_preset};
pub use schema::{MergedPreset, Mode, PresetDef, PresetStyles, PropertyMap};

/// Both rendered artifacts plus the merged presets they were derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Number of presets extracted before filtering.
    pub found: usize,
    /// Selected presets after merging, in source order.
    pub presets: Vec<MergedPreset>,
    pub stylesheet: String,
    pub metadata: String,
}

/// Outcome of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub found: usize,
    /// `(name, label)` of each emitted preset.
    pub selected: Vec<(String, String)>,
    pub written: Vec<PathBuf>,
}

/// One catalog entry as reported by [`list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub label: String,
    pub has_dark: bool,
    pub selected: bool,
}

/// Keep the presets named in `allowed`, preserving source order.
///
/// An empty allow-list keeps everything. A catalog preset named like the
/// synthesized default entry is always dropped.
pub fn select_presets(presets: Vec<PresetDef>, allowed: &[String]) -> Vec<PresetDef> {
    for name in allowed {
        if !presets.iter().any(|p| &p.name == name) {
            log_warn!("Allowed preset '{}' was not found in the catalog", name);
        }
    }

    presets
        .into_iter()
        .filter(|preset| {
            if !allowed.is_empty() && !allowed.contains(&preset.name) {
                return false;
            }
            if preset.name == emit::metadata::DEFAULT_PRESET_NAME {
                log_warn!("Ignoring catalog preset named 'default'; the name is reserved");
                return false;
            }
            true
        })
        .collect()
}

/// Run the pure part of the pipeline on catalog text.
///
/// # Errors
/// Fails when the catalog yields no presets, the allow-list selects none, or
/// the default theme is incomplete.
pub fn generate(source: &str, config: &GeneratorConfig) -> Result<Artifacts, PresetError> {
    let _span = tracing::debug_span!("generate", bytes = source.len()).entered();

    let defaults = config.default_theme();
    let missing = defaults.missing_roles();
    if !missing.is_empty() {
        return Err(PresetError::IncompleteDefaults {
            missing: missing
                .into_iter()
                .map(|(mode, role)| format!("{mode}.{role}"))
                .collect(),
        });
    }

    let extracted = PresetExtractor::new(config.entry_indent)?.extract(source);
    let found = extracted.len();
    log_info!("Found {} presets", found);
    if found == 0 {
        return Err(PresetError::NothingExtracted {
            path: Some(config.source_path()),
        });
    }

    let selected = select_presets(extracted, &config.allowed_presets);
    log_info!("Filtered to {} presets (+ default)", selected.len());
    if selected.is_empty() {
        return Err(PresetError::NothingSelected {
            found,
            allowed: config.allowed_presets.clone(),
        });
    }

    let merged = merge_all(&selected, &defaults);
    let banner = Banner::new(&config.regenerate_command);

    let stylesheet = {
        let _span = tracing::debug_span!("stylesheet").entered();
        emit::render_stylesheet(&merged, &banner)
    };
    let metadata = {
        let _span = tracing::debug_span!("metadata").entered();
        emit::render_metadata(&emit::collect_metadata(&merged, &defaults), &banner)
    };

    Ok(Artifacts {
        found,
        presets: merged,
        stylesheet,
        metadata,
    })
}

/// Read the configured catalog.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn read_source(config: &GeneratorConfig) -> Result<String, PresetError> {
    let path = config.source_path();
    log_info!("Loading presets from {}", path.display());
    fs::read_to_string(&path).map_err(|source| PresetError::ReadSource { path, source })
}

/// Generate both artifacts and write them to their configured locations.
///
/// Both artifacts are rendered before either file is touched.
///
/// # Errors
/// Returns an error if reading, generation or writing fails.
pub fn run(config: &GeneratorConfig) -> Result<RunSummary, PresetError> {
    let source = read_source(config)?;
    let artifacts = generate(&source, config)?;

    let outputs = [
        (config.stylesheet_path(), &artifacts.stylesheet),
        (config.metadata_path(), &artifacts.metadata),
    ];
    let mut written = Vec::with_capacity(outputs.len());
    for (path, contents) in outputs {
        write_atomic(&path, contents)?;
        log_info!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(RunSummary {
        found: artifacts.found,
        selected: artifacts
            .presets
            .into_iter()
            .map(|p| (p.name, p.label))
            .collect(),
        written,
    })
}

/// Generate both artifacts and report which files on disk differ from them.
///
/// Nothing is written. Missing files count as stale.
///
/// # Errors
/// Returns an error if reading the catalog or generation fails.
pub fn check(config: &GeneratorConfig) -> Result<Vec<PathBuf>, PresetError> {
    let source = read_source(config)?;
    let artifacts = generate(&source, config)?;

    let stale = [
        (config.stylesheet_path(), artifacts.stylesheet),
        (config.metadata_path(), artifacts.metadata),
    ]
    .into_iter()
    .filter(|(path, expected)| {
        let current = fs::read_to_string(path).ok();
        let up_to_date = current.as_deref() == Some(expected.as_str());
        log_debug!("{} up to date: {}", path.display(), up_to_date);
        !up_to_date
    })
    .map(|(path, _)| path)
    .collect();

    Ok(stale)
}

/// List every preset in the catalog and whether the allow-list selects it.
///
/// # Errors
/// Returns an error if the catalog cannot be read or the entry pattern is invalid.
pub fn list(config: &GeneratorConfig) -> Result<Vec<CatalogEntry>, PresetError> {
    let source = read_source(config)?;
    let presets = PresetExtractor::new(config.entry_indent)?.extract(&source);
    let allowed = &config.allowed_presets;

    Ok(presets
        .into_iter()
        .map(|preset| CatalogEntry {
            selected: preset.name != emit::metadata::DEFAULT_PRESET_NAME
                && (allowed.is_empty() || allowed.contains(&preset.name)),
            has_dark: preset.styles.dark.is_some(),
            name: preset.name,
            label: preset.label,
        })
        .collect())
}

/// Permissions for a rewritten output: those of the file being replaced, or
/// `0644` for a new file rather than the temp file's owner-only mode.
fn output_permissions(path: &Path, temp: &fs::File) -> std::io::Result<fs::Permissions> {
    if let Ok(existing) = fs::metadata(path) {
        return Ok(existing.permissions());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = temp;
        Ok(fs::Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        Ok(temp.metadata()?.permissions())
    }
}

/// Replace `path` with `contents` via a temporary file in the same directory.
fn write_atomic(path: &Path, contents: &str) -> Result<(), PresetError> {
    let write_err = |source: std::io::Error| PresetError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(write_err)?;

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    file.as_file()
        .set_permissions(output_permissions(path, file.as_file()).map_err(write_err)?)
        .map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests;
