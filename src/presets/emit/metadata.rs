//! Metadata rendering - a typed array of preset summaries for swatch previews.

use super::Banner;
use crate::presets::color::to_oklch;
use crate::presets::defaults::DefaultTheme;
use crate::presets::schema::{MergedPreset, PropertyMap};

/// Name of the always-present entry describing the default theme.
pub const DEFAULT_PRESET_NAME: &str = "default";

/// Label of the default entry.
pub const DEFAULT_PRESET_LABEL: &str = "Default";

/// Summary of one preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetMeta {
    pub name: String,
    pub label: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub primary_foreground_color: String,
}

impl PresetMeta {
    /// Summarise a light palette; colors are normalized to OKLCH.
    fn from_palette(name: &str, label: &str, light: &PropertyMap) -> Self {
        let color = |role: &str| to_oklch(light.get(role).unwrap_or_default());
        Self {
            name: name.to_string(),
            label: label.to_string(),
            primary_color: color("primary"),
            secondary_color: color("secondary"),
            primary_foreground_color: color("primary-foreground"),
        }
    }

    /// Entry for the default theme, which has no stylesheet block of its own.
    pub fn default_entry(defaults: &DefaultTheme) -> Self {
        Self::from_palette(DEFAULT_PRESET_NAME, DEFAULT_PRESET_LABEL, &defaults.light)
    }

    /// Entry for a merged preset.
    pub fn for_preset(preset: &MergedPreset) -> Self {
        Self::from_palette(&preset.name, &preset.label, &preset.light)
    }
}

/// The default entry followed by one entry per preset, in the given order.
pub fn collect_metadata(presets: &[MergedPreset], defaults: &DefaultTheme) -> Vec<PresetMeta> {
    std::iter::once(PresetMeta::default_entry(defaults))
        .chain(presets.iter().map(PresetMeta::for_preset))
        .collect()
}

/// Escape a value for a single-quoted string literal.
fn escape_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Render the metadata module.
pub fn render_metadata(entries: &[PresetMeta], banner: &Banner<'_>) -> String {
    let mut lines: Vec<String> = banner.line_comments().into();
    lines.extend(
        [
            "",
            "export type PresetMeta = {",
            "\tname: string;",
            "\tlabel: string;",
            "\tprimaryColor: string;",
            "\tsecondaryColor: string;",
            "\tprimaryForegroundColor: string;",
            "};",
            "",
            "export const presets: readonly PresetMeta[] = [",
        ]
        .map(String::from),
    );

    for entry in entries {
        lines.push("\t{".to_string());
        lines.push(format!("\t\tname: '{}',", entry.name));
        lines.push(format!("\t\tlabel: '{}',", escape_single_quoted(&entry.label)));
        lines.push(format!("\t\tprimaryColor: '{}',", entry.primary_color));
        lines.push(format!("\t\tsecondaryColor: '{}',", entry.secondary_color));
        lines.push(format!(
            "\t\tprimaryForegroundColor: '{}'",
            entry.primary_foreground_color
        ));
        lines.push("\t},".to_string());
    }

    lines.push("];".to_string());
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merged(name: &str, label: &str, light: &[(&str, &str)]) -> MergedPreset {
        MergedPreset {
            name: name.to_string(),
            label: label.to_string(),
            light: light.iter().copied().collect(),
            dark: PropertyMap::new(),
        }
    }

    #[test]
    fn test_default_entry_leads() {
        let defaults = DefaultTheme::builtin();
        let presets = vec![merged(
            "mono",
            "Mono",
            &[
                ("primary", "#000000"),
                ("secondary", "#ffffff"),
                ("primary-foreground", "#ffffff"),
            ],
        )];

        let entries = collect_metadata(&presets, &defaults);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "default");
        assert_eq!(entries[0].label, "Default");
        assert_eq!(entries[0].primary_color, "oklch(0.205 0 0)");
        assert_eq!(entries[0].secondary_color, "oklch(0.97 0 0)");
        assert_eq!(entries[0].primary_foreground_color, "oklch(0.985 0 0)");

        assert_eq!(entries[1].primary_color, "oklch(0 0 0)");
        assert_eq!(entries[1].secondary_color, "oklch(1 0 0)");
    }

    #[test]
    fn test_default_entry_with_no_presets() {
        let entries = collect_metadata(&[], &DefaultTheme::builtin());
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_label_escaping() {
        assert_eq!(escape_single_quoted("Mocha's Mousse"), r"Mocha\'s Mousse");
        assert_eq!(escape_single_quoted(r"a\b"), r"a\\b");
    }

    #[test]
    fn test_render_layout() {
        let entries = vec![PresetMeta {
            name: "solo".to_string(),
            label: "Solo's".to_string(),
            primary_color: "oklch(0.1 0 0)".to_string(),
            secondary_color: "oklch(0.2 0 0)".to_string(),
            primary_foreground_color: "oklch(0.3 0 0)".to_string(),
        }];

        let ts = render_metadata(&entries, &Banner::new("preset-gen"));

        let expected = "// Auto-generated by preset-gen -- DO NOT EDIT\n\
                        // Run: preset-gen\n\
                        \n\
                        export type PresetMeta = {\n\
                        \tname: string;\n\
                        \tlabel: string;\n\
                        \tprimaryColor: string;\n\
                        \tsecondaryColor: string;\n\
                        \tprimaryForegroundColor: string;\n\
                        };\n\
                        \n\
                        export const presets: readonly PresetMeta[] = [\n\
                        \t{\n\
                        \t\tname: 'solo',\n\
                        \t\tlabel: 'Solo\\'s',\n\
                        \t\tprimaryColor: 'oklch(0.1 0 0)',\n\
                        \t\tsecondaryColor: 'oklch(0.2 0 0)',\n\
                        \t\tprimaryForegroundColor: 'oklch(0.3 0 0)'\n\
                        \t},\n\
                        ];\n";
        assert_eq!(ts, expected);
    }
}
