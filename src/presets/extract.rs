//! Preset extraction - recovers preset definitions from catalog source text.
//!
//! Top-level entries are found by their indentation, and each entry's text runs
//! up to the start of the next entry. This assumes entries are written
//! contiguously and never nested inside one another, which holds for the
//! catalog this tool reads but is not a general parser: a catalog that breaks
//! the layout yields wrong or missing presets without any error.

use regex::Regex;

use super::error::PresetError;
use super::roles::is_known_role;
use super::scanner::{Block, Entry};
use super::schema::{PresetDef, PresetStyles, PropertyMap};
use crate::{log_debug, log_warn};

/// Indentation of top-level entries in the catalog.
pub const DEFAULT_ENTRY_INDENT: usize = 2;

/// Keys that can sit at entry indentation without naming a preset.
///
/// Hand-maintained: a new nesting key in the catalog has to be added here or it
/// will be taken for a preset.
pub const RESERVED_KEYS: [&str; 3] = ["styles", "light", "dark"];

/// Extracts preset definitions from catalog source.
#[derive(Debug, Clone)]
pub struct PresetExtractor {
    entry_re: Regex,
}

impl PresetExtractor {
    /// Build an extractor for entries indented by `indent` spaces or tabs.
    ///
    /// # Errors
    /// Returns an error if the entry pattern cannot be compiled.
    pub fn new(indent: usize) -> Result<Self, PresetError> {
        let pattern = format!(
            r#"(?m)^[ \t]{{{indent}}}(?:"([a-z][a-z0-9-]*)"|'([a-z][a-z0-9-]*)'|([a-z][a-z0-9]*))\s*:\s*\{{"#
        );
        let entry_re =
            Regex::new(&pattern).map_err(|source| PresetError::EntryPattern { indent, source })?;
        Ok(Self { entry_re })
    }

    /// Locate every top-level entry, in source order.
    pub fn entries<'a>(&self, source: &'a str) -> Vec<Entry<'a>> {
        let positions: Vec<(&str, usize)> = self
            .entry_re
            .captures_iter(source)
            .filter_map(|caps| {
                let start = caps.get(0)?.start();
                let name = caps
                    .get(1)
                    .or_else(|| caps.get(2))
                    .or_else(|| caps.get(3))?
                    .as_str();
                (!RESERVED_KEYS.contains(&name)).then_some((name, start))
            })
            .collect();

        positions
            .iter()
            .enumerate()
            .map(|(i, &(name, start))| {
                let end = positions
                    .get(i + 1)
                    .map_or(source.len(), |&(_, next)| next);
                Entry::parse(name, start, &source[start..end])
            })
            .collect()
    }

    /// Extract every preset with a non-empty light block, in source order.
    ///
    /// When a name repeats, the later definition replaces the earlier one in place.
    pub fn extract(&self, source: &str) -> Vec<PresetDef> {
        let mut presets: Vec<PresetDef> = Vec::new();

        for entry in self.entries(source) {
            let Some(preset) = preset_from_entry(&entry) else {
                log_debug!("Skipping '{}': no light styles", entry.name);
                continue;
            };

            if let Some(existing) = presets.iter_mut().find(|p| p.name == preset.name) {
                log_warn!(
                    "Preset '{}' is defined more than once; using the later definition",
                    preset.name
                );
                *existing = preset;
            } else {
                presets.push(preset);
            }
        }

        presets
    }
}

impl Default for PresetExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_ENTRY_INDENT).expect("default entry pattern should compile")
    }
}

/// Build a preset from a parsed entry, or `None` if it has no light styles.
fn preset_from_entry(entry: &Entry<'_>) -> Option<PresetDef> {
    let light = entry.light.as_ref().and_then(|b| block_styles(entry.name, b))?;
    let dark = entry.dark.as_ref().and_then(|b| block_styles(entry.name, b));

    Some(PresetDef {
        name: entry.name.to_string(),
        label: entry.label.unwrap_or(entry.name).to_string(),
        styles: PresetStyles { light, dark },
    })
}

/// Property map of a block, or `None` if the block holds no pairs.
fn block_styles(preset: &str, block: &Block<'_>) -> Option<PropertyMap> {
    if !block.terminated {
        log_warn!(
            "Unterminated {} block in preset '{}'; reading to the end of the entry",
            block.mode,
            preset
        );
    }
    if block.pairs.is_empty() {
        return None;
    }
    for pair in block.pairs.iter().filter(|p| !is_known_role(p.key)) {
        log_debug!("Preset '{}' sets '{}', which is never emitted", preset, pair.key);
    }
    Some(block.pairs.iter().map(|p| (p.key, p.value)).collect())
}

/// Extract presets using the default entry indentation.
pub fn extract_presets(source: &str) -> Vec<PresetDef> {
    PresetExtractor::default().extract(source)
}
