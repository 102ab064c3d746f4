//! Default merging - completes each preset from the default theme.

use super::defaults::DefaultTheme;
use super::schema::{MergedPreset, PresetDef};

/// Merge one preset over the default theme.
///
/// Light is the default light palette overridden by the preset's light styles.
/// Dark is the default dark palette overridden first by the preset's light
/// styles and then by its dark styles, so a role customised only for light
/// carries into dark unless dark sets it again.
pub fn merge_preset(preset: &PresetDef, defaults: &DefaultTheme) -> MergedPreset {
    let light = defaults.light.overlaid(&preset.styles.light);

    let mut dark = defaults.dark.overlaid(&preset.styles.light);
    if let Some(dark_styles) = &preset.styles.dark {
        dark.overlay(dark_styles);
    }

    MergedPreset {
        name: preset.name.clone(),
        label: preset.label.clone(),
        light,
        dark,
    }
}

/// Merge every preset, keeping their order.
pub fn merge_all(presets: &[PresetDef], defaults: &DefaultTheme) -> Vec<MergedPreset> {
    presets
        .iter()
        .map(|preset| merge_preset(preset, defaults))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::roles::COLOR_ROLES;
    use crate::presets::schema::{Mode, PresetStyles, PropertyMap};

    fn preset(light: &[(&str, &str)], dark: Option<&[(&str, &str)]>) -> PresetDef {
        PresetDef {
            name: "sample".to_string(),
            label: "Sample".to_string(),
            styles: PresetStyles {
                light: light.iter().copied().collect(),
                dark: dark.map(|pairs| pairs.iter().copied().collect::<PropertyMap>()),
            },
        }
    }

    #[test]
    fn test_light_only_override_carries_into_dark() {
        let defaults = DefaultTheme::builtin();
        let merged = merge_preset(&preset(&[("primary", "#112233")], None), &defaults);

        assert_eq!(merged.light.get("primary"), Some("#112233"));
        assert_eq!(merged.dark.get("primary"), Some("#112233"));
        assert_eq!(merged.dark.get("background"), defaults.dark.get("background"));
    }

    #[test]
    fn test_dark_override_wins_over_light() {
        let defaults = DefaultTheme::builtin();
        let merged = merge_preset(
            &preset(
                &[("primary", "#112233"), ("accent", "#445566")],
                Some(&[("primary", "#aabbcc")]),
            ),
            &defaults,
        );

        assert_eq!(merged.light.get("primary"), Some("#112233"));
        assert_eq!(merged.dark.get("primary"), Some("#aabbcc"));
        assert_eq!(merged.dark.get("accent"), Some("#445566"));
    }

    #[test]
    fn test_merged_maps_are_total() {
        let defaults = DefaultTheme::builtin();
        let merged = merge_preset(&preset(&[("ring", "#123456")], None), &defaults);

        for mode in Mode::ALL {
            for role in COLOR_ROLES {
                assert!(
                    merged.palette(mode).get(role).is_some_and(|v| !v.is_empty()),
                    "{mode} is missing {role}"
                );
            }
        }
    }

    #[test]
    fn test_merge_all_keeps_order() {
        let defaults = DefaultTheme::builtin();
        let mut second = preset(&[("primary", "#000000")], None);
        second.name = "second".to_string();
        let merged = merge_all(&[preset(&[("primary", "#ffffff")], None), second], &defaults);

        let names: Vec<&str> = merged.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["sample", "second"]);
    }
}
