//! Data types flowing through the preset pipeline.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Light or dark half of a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    /// Both modes, light first.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// Key used for this mode's sub-block in the catalog source.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Role name -> raw value mapping.
///
/// Iteration order is unspecified; emitters walk the fixed role list instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap(HashMap<String, String>);

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value for a role, if set.
    pub fn get(&self, role: &str) -> Option<&str> {
        self.0.get(role).map(String::as_str)
    }

    /// Set a role, replacing any previous value.
    pub fn insert(&mut self, role: impl Into<String>, value: impl Into<String>) {
        self.0.insert(role.into(), value.into());
    }

    pub fn contains(&self, role: &str) -> bool {
        self.0.contains_key(role)
    }

    /// Layer `other` on top of `self`; roles set in `other` win.
    pub fn overlay(&mut self, other: &Self) {
        for (role, value) in &other.0 {
            self.0.insert(role.clone(), value.clone());
        }
    }

    /// Return a copy of `self` with `other` layered on top.
    #[must_use]
    pub fn overlaid(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.overlay(other);
        merged
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (role, value) in iter {
            map.insert(role, value);
        }
        map
    }
}

/// The light and dark property maps a preset declares in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetStyles {
    /// Always non-empty for an extracted preset.
    pub light: PropertyMap,
    pub dark: Option<PropertyMap>,
}

/// One named preset as recovered from the catalog source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetDef {
    /// Unique lowercase-kebab identifier.
    pub name: String,
    /// Display name; falls back to `name` when the source has no label.
    pub label: String,
    pub styles: PresetStyles,
}

/// A preset whose light and dark maps have been completed from the default theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedPreset {
    pub name: String,
    pub label: String,
    pub light: PropertyMap,
    pub dark: PropertyMap,
}

impl MergedPreset {
    /// The merged map for `mode`.
    pub const fn palette(&self, mode: Mode) -> &PropertyMap {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}
