//! Filename classification
//!
//! Maps an X11 font basename (file name without `.pcf.gz`) to the family and
//! style it is consolidated into. Names that match nothing are skipped; that
//! is a filter, not an error.

pub mod tables;

use crate::data::{FamilyStyleKey, Style};

/// Result of a misc table lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiscEntry {
    pub key: FamilyStyleKey,
    /// Pixel size used when the BDF header does not declare one
    pub nominal_pixel_size: u32,
}

/// Strip the `.pcf.gz` suffix from a file name
pub fn basename_of(file_name: &str) -> &str {
    file_name.strip_suffix(".pcf.gz").unwrap_or(file_name)
}

/// True for charset-specific variants (`-ISO8859-1`, `-KOI8-R`, `-JISX0201`)
pub fn is_excluded_charset(basename: &str) -> bool {
    tables::EXCLUDED_CHARSET_MARKERS
        .iter()
        .any(|marker| basename.contains(marker))
}

/// Longest matching prefix wins, so `helvBO12` is BoldOblique, not Bold
pub fn classify_proportional(basename: &str) -> Option<FamilyStyleKey> {
    if is_excluded_charset(basename) {
        return None;
    }
    longest_prefix_match(tables::PROPORTIONAL, basename)
        .map(|(_, family, style)| FamilyStyleKey::new(*family, *style))
}

pub fn classify_misc(basename: &str) -> Option<MiscEntry> {
    if is_excluded_charset(basename) {
        return None;
    }
    if tables::MISC_SKIP_PREFIXES
        .iter()
        .any(|prefix| basename.starts_with(prefix))
    {
        return None;
    }
    tables::MISC
        .iter()
        .find(|(name, ..)| *name == basename)
        .map(|(_, family, style, px)| MiscEntry {
            key: FamilyStyleKey::new(*family, *style),
            nominal_pixel_size: *px,
        })
}

fn longest_prefix_match<'a>(
    table: &'a [(&'static str, &'static str, Style)],
    basename: &str,
) -> Option<&'a (&'static str, &'static str, Style)> {
    table
        .iter()
        .filter(|(prefix, ..)| basename.starts_with(prefix))
        .max_by_key(|(prefix, ..)| prefix.len())
}
