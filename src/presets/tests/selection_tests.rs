//! Tests for allow-list selection

use crate::presets::{PresetDef, PresetStyles, PropertyMap, select_presets};

fn preset(name: &str) -> PresetDef {
    PresetDef {
        name: name.to_string(),
        label: name.to_string(),
        styles: PresetStyles {
            light: PropertyMap::new(),
            dark: None,
        },
    }
}

fn names(presets: &[PresetDef]) -> Vec<&str> {
    presets.iter().map(|p| p.name.as_str()).collect()
}

fn allow(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

#[test]
fn test_source_order_wins_over_allow_list_order() {
    let catalog = vec![preset("notebook"), preset("darkmatter"), preset("modern-minimal")];
    let selected = select_presets(catalog, &allow(&["modern-minimal", "notebook"]));
    assert_eq!(names(&selected), ["notebook", "modern-minimal"]);
}

#[test]
fn test_empty_allow_list_keeps_everything() {
    let catalog = vec![preset("a"), preset("b")];
    let selected = select_presets(catalog, &[]);
    assert_eq!(names(&selected), ["a", "b"]);
}

#[test]
fn test_unknown_allowed_names_are_ignored() {
    let catalog = vec![preset("notebook")];
    let selected = select_presets(catalog, &allow(&["notebook", "missing"]));
    assert_eq!(names(&selected), ["notebook"]);
}

#[test]
fn test_catalog_default_is_dropped() {
    let catalog = vec![preset("default"), preset("notebook")];
    assert_eq!(names(&select_presets(catalog.clone(), &[])), ["notebook"]);
    assert_eq!(
        names(&select_presets(catalog, &allow(&["default", "notebook"]))),
        ["notebook"]
    );
}

#[test]
fn test_catalog_default_outside_allow_list_is_simply_excluded() {
    let catalog = vec![preset("default"), preset("notebook"), preset("darkmatter")];
    let selected = select_presets(catalog, &allow(&["darkmatter"]));
    assert_eq!(names(&selected), ["darkmatter"]);
}
