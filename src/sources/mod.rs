//! Finding and preparing the X11 bitmap fonts to import
//!
//! - `enumerate`: list `*.pcf.gz` files in the input directories
//! - `convert`: gunzip and `pcf2bdf` into the scratch directory
//! - `collect`: classify, convert and group everything found

pub mod collect;
pub mod convert;
pub mod enumerate;

pub use collect::{Collection, Collector, SkipReason, Skipped};
pub use convert::{BitmapConverter, ConvertError, Pcf2Bdf};
pub use enumerate::list_pcf_files;
