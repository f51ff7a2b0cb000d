//! Font engine abstraction
//!
//! Bitmap import, outline tracing and SFNT generation are not implemented
//! in this crate. The builder talks to an engine through these traits and
//! the shipped adapter (`fontforge`) forwards the work to FontForge.

pub mod fontforge;
pub mod script;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub use fontforge::{FontForgeEngine, FontForgeFont};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("bitmap source not found: {0}")]
    MissingInput(PathBuf),

    #[error("path is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),

    #[error("failed to write engine script: {0}")]
    Script(#[source] std::io::Error),

    #[error("failed to launch {executable}: {source}")]
    Spawn {
        executable: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{executable} exited with {status}: {stderr}")]
    Failed {
        executable: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("engine reported success but produced no output at {0}")]
    MissingOutput(PathBuf),
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Name table entries the importer writes (IDs 1, 2, 4 and 6)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameId {
    Family,
    SubFamily,
    FullName,
    PostScriptName,
}

/// One human-readable name table record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    pub language: &'static str,
    pub id: NameId,
    pub value: String,
}

impl NameEntry {
    pub const ENGLISH_US: &'static str = "English (US)";

    pub fn english(id: NameId, value: impl Into<String>) -> Self {
        Self {
            language: Self::ENGLISH_US,
            id,
            value: value.into(),
        }
    }
}

/// Naming, weight and style bits of an output font
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontNaming {
    pub family_name: String,
    pub font_name: String,
    pub full_name: String,
    pub weight_name: String,
    pub weight_class: u16,
    /// OS/2 fsSelection
    pub fs_selection: u16,
    /// head.macStyle
    pub mac_style: u16,
}

/// Opens bitmap fonts as editable structures
pub trait FontEngine {
    type Font: EditableFont;

    fn open(&mut self, bdf: &Path) -> Result<Self::Font>;
}

/// Operations the consolidated builder needs from an opened font
pub trait EditableFont {
    /// Import another BDF as an embedded strike, or into the glyph
    /// background layer when `background` is set
    fn import_bitmaps(&mut self, bdf: &Path, background: bool) -> Result<()>;

    fn set_em(&mut self, em: u32);

    /// Trace the background bitmaps into outlines
    fn auto_trace(&mut self) -> Result<()>;

    fn add_extrema(&mut self);

    fn simplify(&mut self);

    /// Round every advance width to the nearest multiple of `step`
    fn round_advance_widths(&mut self, step: u32);

    fn set_naming(&mut self, naming: &FontNaming);

    fn append_name(&mut self, entry: &NameEntry);

    fn set_copyright(&mut self, copyright: &str);

    fn set_comment(&mut self, comment: &str);

    /// Write a scalable font with the bitmap strikes embedded
    fn generate(&mut self, output: &Path) -> Result<()>;

    fn close(self);
}
