//! Static classification tables for the X11 core font directories

use crate::data::Style;

/// Proportional font filename prefix → (family, style)
///
/// Order here does not matter; lookups always try longer prefixes first.
pub static PROPORTIONAL: &[(&str, &str, Style)] = &[
    ("helvR", "X11Helv", Style::Regular),
    ("helvB", "X11Helv", Style::Bold),
    ("helvO", "X11Helv", Style::Oblique),
    ("helvBO", "X11Helv", Style::BoldOblique),
    ("luRS", "X11LuSans", Style::Regular),
    ("luBS", "X11LuSans", Style::Bold),
    ("luIS", "X11LuSans", Style::Oblique),
    ("luBIS", "X11LuSans", Style::BoldOblique),
    ("lubR", "X11LuSans", Style::Regular),
    ("lubB", "X11LuSans", Style::Bold),
    ("lubI", "X11LuSans", Style::Oblique),
    ("lubBI", "X11LuSans", Style::BoldOblique),
    ("lutRS", "X11LuType", Style::Regular),
    ("lutBS", "X11LuType", Style::Bold),
    ("termB", "X11Term", Style::Bold),
    ("term", "X11Term", Style::Regular),
];

/// Misc basenames that are never imported (non-Latin sets, cursors, etc.)
pub static MISC_SKIP_PREFIXES: &[&str] = &[
    "cl", "cu", "olgl", "ol", "nil", "micro", "dec", "cursor", "arabic", "hangl", "jiskan",
    "gb", "k14", "12x13ja", "18x18ja", "18x18ko", "12x24rk", "8x16rk",
];

/// Misc fixed-width basename → (family, style, nominal pixel size)
///
/// Families are grouped by cell width.
pub static MISC: &[(&str, &str, Style, u32)] = &[
    ("4x6", "X11Misc5x", Style::Regular, 6),
    ("5x7", "X11Misc5x", Style::Regular, 7),
    ("5x8", "X11Misc5x", Style::Regular, 8),
    ("6x9", "X11Misc6x", Style::Regular, 9),
    ("6x10", "X11Misc6x", Style::Regular, 10),
    ("6x12", "X11Misc6x", Style::Regular, 12),
    ("6x13", "X11Misc6x", Style::Regular, 13),
    ("6x13B", "X11Misc6x", Style::Bold, 13),
    ("6x13O", "X11Misc6x", Style::Oblique, 13),
    ("7x13", "X11Misc7x", Style::Regular, 13),
    ("7x13B", "X11Misc7x", Style::Bold, 13),
    ("7x13O", "X11Misc7x", Style::Oblique, 13),
    ("7x14", "X11Misc7x", Style::Regular, 14),
    ("7x14B", "X11Misc7x", Style::Bold, 14),
    ("8x13", "X11Misc8x", Style::Regular, 13),
    ("8x13B", "X11Misc8x", Style::Bold, 13),
    ("8x13O", "X11Misc8x", Style::Oblique, 13),
    ("8x16", "X11Misc8x", Style::Regular, 16),
    ("9x15", "X11Misc9x", Style::Regular, 15),
    ("9x15B", "X11Misc9x", Style::Bold, 15),
    ("9x18", "X11Misc9x", Style::Regular, 18),
    ("9x18B", "X11Misc9x", Style::Bold, 18),
    ("10x20", "X11Misc10x", Style::Regular, 20),
    ("12x24", "X11Misc12x", Style::Regular, 24),
];

/// Basename markers of charset-specific variants; only the default
/// (ISO10646) encodings are imported
pub static EXCLUDED_CHARSET_MARKERS: &[&str] = &["-ISO8859", "-KOI8", "-JISX"];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_keys_are_unique() {
        let prefixes: HashSet<_> = PROPORTIONAL.iter().map(|(p, _, _)| *p).collect();
        assert_eq!(prefixes.len(), PROPORTIONAL.len());

        let names: HashSet<_> = MISC.iter().map(|(n, _, _, _)| *n).collect();
        assert_eq!(names.len(), MISC.len());
    }

    #[test]
    fn misc_entries_are_not_shadowed_by_skip_prefixes() {
        for (name, ..) in MISC {
            assert!(
                !MISC_SKIP_PREFIXES.iter().any(|p| name.starts_with(p)),
                "{name} would never be imported"
            );
        }
    }
}
