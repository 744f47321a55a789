//! Icons shipped with the plugin, embedded at compile time.
//!
//! Each asset holds only the inner SVG markup (no outer `<svg>` element),
//! the same convention `install` produces for custom icons.

/// Sorted by name for binary search.
const ICONS: &[(&str, &str)] = &[
    ("arrow-right", include_str!("../assets/icons/arrow-right.svg")),
    ("calendar", include_str!("../assets/icons/calendar.svg")),
    ("check", include_str!("../assets/icons/check.svg")),
    ("chevron-down", include_str!("../assets/icons/chevron-down.svg")),
    ("circle", include_str!("../assets/icons/circle.svg")),
    ("heart", include_str!("../assets/icons/heart.svg")),
    ("home", include_str!("../assets/icons/home.svg")),
    ("mail", include_str!("../assets/icons/mail.svg")),
    ("menu", include_str!("../assets/icons/menu.svg")),
    ("search", include_str!("../assets/icons/search.svg")),
    ("star", include_str!("../assets/icons/star.svg")),
    ("x", include_str!("../assets/icons/x.svg")),
];

pub(crate) fn bundled_icon(name: &str) -> Option<&'static str> {
    ICONS
        .binary_search_by_key(&name, |&(n, _)| n)
        .ok()
        .map(|idx| ICONS[idx].1)
}

#[cfg(test)]
pub(crate) fn bundled_names() -> impl Iterator<Item = &'static str> {
    ICONS.iter().map(|(n, _)| *n)
}
