//! Named color palettes.
//!
//! A small set of categorical palettes under their conventional d3 names.
//! Colors cycle when a graph has more nodes than the palette has entries.

/// The d3 Category10 palette.
pub const CATEGORY10: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// The d3 Category20 palette.
pub const CATEGORY20: &[&str] = &[
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728", "#ff9896",
    "#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7",
    "#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];

/// The d3 Category20b palette.
pub const CATEGORY20B: &[&str] = &[
    "#393b79", "#5254a3", "#6b6ecf", "#9c9ede", "#637939", "#8ca252", "#b5cf6b", "#cedb9c",
    "#8c6d31", "#bd9e39", "#e7ba52", "#e7cb94", "#843c39", "#ad494a", "#d6616b", "#e7969c",
    "#7b4173", "#a55194", "#ce6dbd", "#de9ed6",
];

/// The d3 Category20c palette.
pub const CATEGORY20C: &[&str] = &[
    "#3182bd", "#6baed6", "#9ecae1", "#c6dbef", "#e6550d", "#fd8d3c", "#fdae6b", "#fdd0a2",
    "#31a354", "#74c476", "#a1d99b", "#c7e9c0", "#756bb1", "#9e9ac8", "#bcbddc", "#dadaeb",
    "#636363", "#969696", "#bdbdbd", "#d9d9d9",
];

/// Look up a palette by name (case-insensitive).
#[must_use]
pub fn lookup(name: &str) -> Option<&'static [&'static str]> {
    match name.to_ascii_lowercase().as_str() {
        "category10" => Some(CATEGORY10),
        "category20" => Some(CATEGORY20),
        "category20b" => Some(CATEGORY20B),
        "category20c" => Some(CATEGORY20C),
        _ => None,
    }
}

/// Names of all available palettes.
#[must_use]
pub fn names() -> Vec<&'static str> {
    vec!["category10", "category20", "category20b", "category20c"]
}

/// Pick the color for the given index, cycling through the palette.
#[must_use]
pub fn color_for(palette: &'static [&'static str], index: usize) -> &'static str {
    palette[index % palette.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_names() {
        for name in names() {
            assert!(lookup(name).is_some(), "missing palette: {name}");
        }
    }

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(lookup("Category20"), Some(CATEGORY20));
        assert_eq!(lookup("CATEGORY20B"), Some(CATEGORY20B));
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup("viridis").is_none());
    }

    #[test]
    fn test_color_for_cycles() {
        assert_eq!(color_for(CATEGORY10, 0), CATEGORY10[0]);
        assert_eq!(color_for(CATEGORY10, 10), CATEGORY10[0]);
        assert_eq!(color_for(CATEGORY10, 13), CATEGORY10[3]);
    }

    #[test]
    fn test_palettes_are_hex_colors() {
        for palette in [CATEGORY10, CATEGORY20, CATEGORY20B, CATEGORY20C] {
            for color in palette {
                assert!(color.starts_with('#') && color.len() == 7, "bad color: {color}");
            }
        }
    }
}
