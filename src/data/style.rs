//! Style identity for consolidated fonts
//!
//! Every output font is keyed by a family name plus one of four styles.
//! The style decides weight, the OS/2 and Mac style bits, and the
//! human-readable sub-family string written to the name table.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The closed set of styles X11 bitmap families are consolidated into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    Regular,
    Bold,
    Oblique,
    BoldOblique,
}

impl Style {
    pub const ALL: [Style; 4] = [
        Style::Regular,
        Style::Bold,
        Style::Oblique,
        Style::BoldOblique,
    ];

    /// Name used in file names and PostScript names
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Regular => "Regular",
            Style::Bold => "Bold",
            Style::Oblique => "Oblique",
            Style::BoldOblique => "BoldOblique",
        }
    }

    pub fn is_bold(self) -> bool {
        matches!(self, Style::Bold | Style::BoldOblique)
    }

    pub fn is_oblique(self) -> bool {
        matches!(self, Style::Oblique | Style::BoldOblique)
    }

    /// Sub-family string shown to users ("Oblique" reads as "Italic")
    pub fn subfamily_name(self) -> &'static str {
        match self {
            Style::Regular => "Regular",
            Style::Bold => "Bold",
            Style::Oblique => "Italic",
            Style::BoldOblique => "Bold Italic",
        }
    }

    pub fn weight_name(self) -> &'static str {
        if self.is_bold() {
            "Bold"
        } else {
            "Regular"
        }
    }

    /// OS/2 usWeightClass
    pub fn weight_class(self) -> u16 {
        if self.is_bold() {
            700
        } else {
            400
        }
    }

    /// OS/2 fsSelection bits
    ///
    /// Bit 0 italic, bit 5 bold, bit 6 regular, bit 9 oblique.
    pub fn fs_selection(self) -> u16 {
        match self {
            Style::Regular => 0x40,
            Style::Bold => 0x20,
            Style::Oblique => 0x201,
            Style::BoldOblique => 0x221,
        }
    }

    /// head.macStyle bits (bit 0 bold, bit 1 italic)
    pub fn mac_style(self) -> u16 {
        let mut bits = 0;
        if self.is_bold() {
            bits |= 0x1;
        }
        if self.is_oblique() {
            bits |= 0x2;
        }
        bits
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Styles sort by name so build order matches a plain sort of
// "Family Style" strings.
impl Ord for Style {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Style {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Grouping identity: one output font per key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FamilyStyleKey {
    pub family: String,
    pub style: Style,
}

impl FamilyStyleKey {
    pub fn new(family: impl Into<String>, style: Style) -> Self {
        Self {
            family: family.into(),
            style,
        }
    }

    /// `Family-Style`, used for the font name, the PostScript name and the
    /// output file stem
    pub fn font_name(&self) -> String {
        format!("{}-{}", self.family, self.style)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.family, self.style)
    }
}

impl fmt::Display for FamilyStyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_follows_bold_styles() {
        assert_eq!(Style::Regular.weight_class(), 400);
        assert_eq!(Style::Oblique.weight_class(), 400);
        assert_eq!(Style::Bold.weight_class(), 700);
        assert_eq!(Style::BoldOblique.weight_class(), 700);
        assert_eq!(Style::BoldOblique.weight_name(), "Bold");
    }

    #[test]
    fn style_bits_distinguish_all_four_styles() {
        let bits: Vec<(u16, u16)> = Style::ALL
            .iter()
            .map(|s| (s.fs_selection(), s.mac_style()))
            .collect();
        assert_eq!(bits, vec![(0x40, 0x0), (0x20, 0x1), (0x201, 0x2), (0x221, 0x3)]);
    }

    #[test]
    fn subfamily_renames_oblique_to_italic() {
        assert_eq!(Style::Oblique.subfamily_name(), "Italic");
        assert_eq!(Style::BoldOblique.subfamily_name(), "Bold Italic");
        assert_eq!(Style::Bold.subfamily_name(), "Bold");
    }

    #[test]
    fn keys_sort_by_family_then_style_name() {
        let mut keys = vec![
            FamilyStyleKey::new("X11Term", Style::Regular),
            FamilyStyleKey::new("X11Helv", Style::Regular),
            FamilyStyleKey::new("X11Helv", Style::Oblique),
            FamilyStyleKey::new("X11Helv", Style::BoldOblique),
            FamilyStyleKey::new("X11Helv", Style::Bold),
        ];
        keys.sort();
        let names: Vec<String> = keys.iter().map(|k| k.font_name()).collect();
        assert_eq!(
            names,
            vec![
                "X11Helv-Bold",
                "X11Helv-BoldOblique",
                "X11Helv-Oblique",
                "X11Helv-Regular",
                "X11Term-Regular",
            ]
        );
    }
}
