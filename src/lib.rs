//! X11 bitmap font importer
pub mod build;
pub mod classify;
pub mod core;
pub mod data;
pub mod engine;
pub mod grouping;
pub mod logging;
pub mod pipeline;
pub mod sources;
