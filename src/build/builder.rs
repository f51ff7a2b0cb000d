//! Consolidated font builder
//!
//! Turns one [`BuildGroup`] into one output font by driving a
//! [`FontEngine`]. The smallest member is the base font and metadata
//! source; the largest is traced into outlines and sets the em.

use super::plan::BuildPlan;
use crate::data::{bdf, FamilyStyleKey};
use crate::engine::{EditableFont, FontEngine};
use crate::grouping::BuildGroup;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

/// A font written by the builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuiltFont {
    pub key: FamilyStyleKey,
    pub path: PathBuf,
    pub file_name: String,
    pub strikes: Vec<u32>,
}

pub struct ConsolidatedBuilder<E: FontEngine> {
    engine: E,
    output_dir: PathBuf,
}

impl<E: FontEngine> ConsolidatedBuilder<E> {
    pub fn new(engine: E, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            engine,
            output_dir: output_dir.into(),
        }
    }

    /// Build and write the font for one group
    pub fn build(&mut self, key: &FamilyStyleKey, group: &BuildGroup) -> Result<BuiltFont> {
        let smallest = group.smallest();
        let largest = group.largest();

        let metadata = bdf::read_header_from_path(smallest.bdf_path())
            .with_context(|| format!("Failed to read metadata from {}", smallest.bdf.display()))?;
        let plan = BuildPlan::new(key, group, &metadata)?;

        let mut font = self
            .engine
            .open(smallest.bdf_path())
            .with_context(|| format!("Failed to open {}", smallest.bdf.display()))?;

        for member in group.additional_strikes() {
            font.import_bitmaps(member.bdf_path(), false)
                .with_context(|| format!("Failed to import strike {member}"))?;
        }
        font.import_bitmaps(largest.bdf_path(), true)
            .with_context(|| format!("Failed to import trace source {largest}"))?;

        // Resolved sizes, including misc nominal fallbacks
        let strikes = group.pixel_sizes();
        tracing::info!("  Bitmap strikes: {:?}", strikes);

        font.set_em(plan.em);
        font.auto_trace().context("Auto-trace failed")?;
        font.add_extrema();
        font.simplify();
        font.round_advance_widths(plan.advance_step);

        font.set_naming(&plan.naming);
        for entry in &plan.names {
            font.append_name(entry);
        }
        if let Some(copyright) = &plan.copyright {
            font.set_copyright(copyright);
        }
        font.set_comment(&plan.comment);

        let path = self.output_dir.join(&plan.file_name);
        let generated = font
            .generate(&path)
            .with_context(|| format!("Failed to generate {}", path.display()));
        font.close();
        generated?;

        Ok(BuiltFont {
            key: key.clone(),
            path,
            file_name: plan.file_name,
            strikes,
        })
    }
}
