//! Data types shared by the importer pipeline
//!
//! - `style`: family/style identity of an output font
//! - `resource`: bitmap font files discovered on disk
//! - `bdf`: BDF header scanning for pixel size and metadata

pub mod bdf;
pub mod resource;
pub mod style;

pub use bdf::BdfHeader;
pub use resource::{FontResource, SourceKind};
pub use style::{FamilyStyleKey, Style};
