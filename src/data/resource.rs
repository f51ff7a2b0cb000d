//! Raw bitmap font resources found on disk

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Which input directory category a resource came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Proportional fonts from a `75dpi`/`100dpi` style directory
    Proportional,
    /// Fixed-width fonts from the `misc` directory
    Misc,
}

/// One converted bitmap font, ready to be grouped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontResource {
    /// The original `.pcf.gz` file
    pub source: PathBuf,
    /// The BDF produced from `source` in the scratch directory
    pub bdf: PathBuf,
    /// File name without the `.pcf.gz` suffix
    pub basename: String,
    /// Nominal pixel size, 0 when unresolved
    pub pixel_size: u32,
    pub kind: SourceKind,
}

impl FontResource {
    pub fn new(
        source: impl Into<PathBuf>,
        bdf: impl Into<PathBuf>,
        basename: impl Into<String>,
        pixel_size: u32,
        kind: SourceKind,
    ) -> Self {
        Self {
            source: source.into(),
            bdf: bdf.into(),
            basename: basename.into(),
            pixel_size,
            kind,
        }
    }

    pub fn bdf_path(&self) -> &Path {
        &self.bdf
    }

    pub fn is_resolved(&self) -> bool {
        self.pixel_size > 0
    }
}

impl fmt::Display for FontResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}px)", self.basename, self.pixel_size)
    }
}
