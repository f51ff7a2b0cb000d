//! Consolidated font building
//!
//! `plan` decides names, em and style bits without touching an engine;
//! `builder` replays a plan against a [`crate::engine::FontEngine`].

pub mod builder;
pub mod plan;

pub use builder::{BuiltFont, ConsolidatedBuilder};
pub use plan::{compose_comment, round_to_grid, BuildPlan};
