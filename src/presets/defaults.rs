//! The default theme every preset is completed from.

use serde::{Deserialize, Serialize};

use super::roles::COLOR_ROLES;
use super::schema::{Mode, PropertyMap};

const DEFAULT_LIGHT: [(&str, &str); 33] = [
    ("background", "oklch(1 0 0)"),
    ("foreground", "oklch(0.145 0 0)"),
    ("card", "oklch(1 0 0)"),
    ("card-foreground", "oklch(0.145 0 0)"),
    ("popover", "oklch(1 0 0)"),
    ("popover-foreground", "oklch(0.145 0 0)"),
    ("primary", "oklch(0.205 0 0)"),
    ("primary-foreground", "oklch(0.985 0 0)"),
    ("secondary", "oklch(0.97 0 0)"),
    ("secondary-foreground", "oklch(0.205 0 0)"),
    ("muted", "oklch(0.97 0 0)"),
    ("muted-foreground", "oklch(0.556 0 0)"),
    ("accent", "oklch(0.97 0 0)"),
    ("accent-foreground", "oklch(0.205 0 0)"),
    ("destructive", "oklch(0.577 0.245 27.325)"),
    ("destructive-foreground", "oklch(1 0 0)"),
    ("border", "oklch(0.922 0 0)"),
    ("input", "oklch(0.922 0 0)"),
    ("ring", "oklch(0.708 0 0)"),
    ("chart-1", "oklch(0.81 0.10 252)"),
    ("chart-2", "oklch(0.62 0.19 260)"),
    ("chart-3", "oklch(0.55 0.22 263)"),
    ("chart-4", "oklch(0.49 0.22 264)"),
    ("chart-5", "oklch(0.42 0.18 266)"),
    ("radius", "0.625rem"),
    ("sidebar", "oklch(0.985 0 0)"),
    ("sidebar-foreground", "oklch(0.145 0 0)"),
    ("sidebar-primary", "oklch(0.205 0 0)"),
    ("sidebar-primary-foreground", "oklch(0.985 0 0)"),
    ("sidebar-accent", "oklch(0.97 0 0)"),
    ("sidebar-accent-foreground", "oklch(0.205 0 0)"),
    ("sidebar-border", "oklch(0.922 0 0)"),
    ("sidebar-ring", "oklch(0.708 0 0)"),
];

/// Dark values layered over the light defaults; roles not listed here keep their light value.
const DEFAULT_DARK: [(&str, &str); 32] = [
    ("background", "oklch(0.145 0 0)"),
    ("foreground", "oklch(0.985 0 0)"),
    ("card", "oklch(0.205 0 0)"),
    ("card-foreground", "oklch(0.985 0 0)"),
    ("popover", "oklch(0.269 0 0)"),
    ("popover-foreground", "oklch(0.985 0 0)"),
    ("primary", "oklch(0.922 0 0)"),
    ("primary-foreground", "oklch(0.205 0 0)"),
    ("secondary", "oklch(0.269 0 0)"),
    ("secondary-foreground", "oklch(0.985 0 0)"),
    ("muted", "oklch(0.269 0 0)"),
    ("muted-foreground", "oklch(0.708 0 0)"),
    ("accent", "oklch(0.371 0 0)"),
    ("accent-foreground", "oklch(0.985 0 0)"),
    ("destructive", "oklch(0.704 0.191 22.216)"),
    ("destructive-foreground", "oklch(0.985 0 0)"),
    ("border", "oklch(0.275 0 0)"),
    ("input", "oklch(0.325 0 0)"),
    ("ring", "oklch(0.556 0 0)"),
    ("chart-1", "oklch(0.81 0.10 252)"),
    ("chart-2", "oklch(0.62 0.19 260)"),
    ("chart-3", "oklch(0.55 0.22 263)"),
    ("chart-4", "oklch(0.49 0.22 264)"),
    ("chart-5", "oklch(0.42 0.18 266)"),
    ("sidebar", "oklch(0.205 0 0)"),
    ("sidebar-foreground", "oklch(0.985 0 0)"),
    ("sidebar-primary", "oklch(0.42 0.24 264.376)"),
    ("sidebar-primary-foreground", "oklch(0.985 0 0)"),
    ("sidebar-accent", "oklch(0.269 0 0)"),
    ("sidebar-accent-foreground", "oklch(0.985 0 0)"),
    ("sidebar-border", "oklch(0.275 0 0)"),
    ("sidebar-ring", "oklch(0.439 0 0)"),
];

/// Baseline light and dark palettes.
///
/// Passed explicitly into merging and metadata emission rather than read from
/// global state, so callers and tests can substitute their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultTheme {
    pub light: PropertyMap,
    pub dark: PropertyMap,
}

/// Per-mode role overrides for the builtin default theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultThemeOverrides {
    #[serde(default)]
    pub light: PropertyMap,
    #[serde(default)]
    pub dark: PropertyMap,
}

impl DefaultTheme {
    /// The builtin default theme.
    pub fn builtin() -> Self {
        let light: PropertyMap = DEFAULT_LIGHT.into_iter().collect();
        let dark = light.overlaid(&DEFAULT_DARK.into_iter().collect());
        Self { light, dark }
    }

    /// Layer per-mode overrides on top of this theme.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &DefaultThemeOverrides) -> Self {
        self.light.overlay(&overrides.light);
        self.dark.overlay(&overrides.dark);
        self
    }

    /// The baseline map for `mode`.
    pub const fn palette(&self, mode: Mode) -> &PropertyMap {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    /// Color roles missing or empty in either mode.
    pub fn missing_roles(&self) -> Vec<(Mode, &'static str)> {
        Mode::ALL
            .into_iter()
            .flat_map(|mode| {
                COLOR_ROLES
                    .into_iter()
                    .filter(move |role| self.palette(mode).get(role).is_none_or(str::is_empty))
                    .map(move |role| (mode, role))
            })
            .collect()
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_total() {
        let theme = DefaultTheme::builtin();
        assert!(theme.missing_roles().is_empty());
    }

    #[test]
    fn test_dark_inherits_radius() {
        let theme = DefaultTheme::builtin();
        assert_eq!(theme.dark.get("radius"), Some("0.625rem"));
        assert_eq!(theme.dark.get("primary"), Some("oklch(0.922 0 0)"));
        assert_eq!(theme.light.get("primary"), Some("oklch(0.205 0 0)"));
    }

    #[test]
    fn test_overrides_apply_per_mode() {
        let overrides = DefaultThemeOverrides {
            light: [("primary", "#ff0000")].into_iter().collect(),
            dark: PropertyMap::new(),
        };
        let theme = DefaultTheme::builtin().with_overrides(&overrides);
        assert_eq!(theme.light.get("primary"), Some("#ff0000"));
        assert_eq!(theme.dark.get("primary"), Some("oklch(0.922 0 0)"));
    }

    #[test]
    fn test_empty_override_is_reported_missing() {
        let overrides = DefaultThemeOverrides {
            light: PropertyMap::new(),
            dark: [("ring", "")].into_iter().collect(),
        };
        let theme = DefaultTheme::builtin().with_overrides(&overrides);
        assert_eq!(theme.missing_roles(), vec![(Mode::Dark, "ring")]);
    }
}
