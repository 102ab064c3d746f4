//! The fixed role vocabulary shared by extraction, merging and emission.

/// Color roles, in the order they are emitted inside every rule block.
pub const COLOR_ROLES: [&str; 32] = [
    "background",
    "foreground",
    "card",
    "card-foreground",
    "popover",
    "popover-foreground",
    "primary",
    "primary-foreground",
    "secondary",
    "secondary-foreground",
    "muted",
    "muted-foreground",
    "accent",
    "accent-foreground",
    "destructive",
    "destructive-foreground",
    "border",
    "input",
    "ring",
    "chart-1",
    "chart-2",
    "chart-3",
    "chart-4",
    "chart-5",
    "sidebar",
    "sidebar-foreground",
    "sidebar-primary",
    "sidebar-primary-foreground",
    "sidebar-accent",
    "sidebar-accent-foreground",
    "sidebar-border",
    "sidebar-ring",
];

/// Non-color roles copied verbatim after the color roles.
pub const PASSTHROUGH_ROLES: [&str; 1] = ["radius"];

/// Whether `role` is a color role.
pub fn is_color_role(role: &str) -> bool {
    COLOR_ROLES.contains(&role)
}

/// Whether `role` belongs to the vocabulary at all.
pub fn is_known_role(role: &str) -> bool {
    is_color_role(role) || PASSTHROUGH_ROLES.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_roles_are_unique() {
        let unique: HashSet<_> = COLOR_ROLES.iter().collect();
        assert_eq!(unique.len(), COLOR_ROLES.len());
    }

    #[test]
    fn test_radius_is_not_a_color() {
        assert!(!is_color_role("radius"));
        assert!(is_known_role("radius"));
        assert!(is_known_role("sidebar-ring"));
        assert!(!is_known_role("font-sans"));
    }
}
