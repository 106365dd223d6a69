use std::collections::HashMap;

use once_cell::sync::Lazy;

// Human-readable strings for protocol keywords. The application-level locale
// manager can shadow these; this table is the built-in English fallback.
static DISPLAY_STRINGS: &[(&str, &str)] = &[
    ("orientation.portrait", "Portrait"),
    ("orientation.landscape", "Landscape"),
    ("orientation.reverse-landscape", "Reverse Landscape"),
    ("orientation.reverse-portrait", "Reverse Portrait"),
    ("sides.one-sided", "One-Sided"),
    ("sides.two-sided-long-edge", "Two-Sided, Long Edge"),
    ("sides.two-sided-short-edge", "Two-Sided, Short Edge"),
];

static CATALOG: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| DISPLAY_STRINGS.iter().copied().collect());

/// Catalog string for `key`, falling back to the key itself.
pub(crate) fn text(key: &'static str) -> &'static str {
    CATALOG.get(key).copied().unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve_and_unknown_fall_back() {
        assert_eq!(text("sides.one-sided"), "One-Sided");
        assert_eq!(text("sides.unheard-of"), "sides.unheard-of");
    }
}
