//! Stylesheet rendering - one light and one dark rule block per preset.

use super::Banner;
use crate::presets::color::to_oklch;
use crate::presets::roles::{COLOR_ROLES, PASSTHROUGH_ROLES};
use crate::presets::schema::{MergedPreset, PropertyMap};

/// Selector activating a preset in light mode.
pub fn light_selector(name: &str) -> String {
    format!(":root[data-preset=\"{name}\"]")
}

/// Selector activating a preset in dark mode.
pub fn dark_selector(name: &str) -> String {
    format!(".dark[data-preset=\"{name}\"]")
}

/// Render one rule block: color roles in vocabulary order, then passthrough roles verbatim.
pub fn render_block(selector: &str, styles: &PropertyMap) -> String {
    let mut lines = vec![format!("{selector} {{")];

    for role in COLOR_ROLES {
        if let Some(value) = styles.get(role) {
            lines.push(format!("  --{role}: {};", to_oklch(value)));
        }
    }

    for role in PASSTHROUGH_ROLES {
        if let Some(value) = styles.get(role) {
            lines.push(format!("  --{role}: {value};"));
        }
    }

    lines.push("}".to_string());
    lines.join("\n")
}

/// Render the complete stylesheet for `presets`, in the given order.
pub fn render_stylesheet(presets: &[MergedPreset], banner: &Banner<'_>) -> String {
    let mut blocks: Vec<String> = banner.css().into();
    blocks.push(String::new());

    for preset in presets {
        blocks.push(render_block(&light_selector(&preset.name), &preset.light));
        blocks.push(String::new());
        blocks.push(render_block(&dark_selector(&preset.name), &preset.dark));
        blocks.push(String::new());
    }

    blocks.join("\n")
}
