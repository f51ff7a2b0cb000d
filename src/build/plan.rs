//! Engine-independent description of one consolidated font build

use crate::data::{BdfHeader, FamilyStyleKey};
use crate::engine::{FontNaming, NameEntry, NameId};
use crate::grouping::BuildGroup;
use anyhow::Result;

/// Font units per pixel of the largest strike
pub const UNITS_PER_PIXEL: u32 = 100;

/// head.unitsPerEm upper bound
pub const MAX_EM: u32 = 16384;

/// Extension of generated fonts
pub const OUTPUT_EXTENSION: &str = "ttf";

pub const PROVENANCE_NOTE: &str =
    "Converted from X11 bitmap fonts, all sizes as embedded bitmap strikes";

/// Round `width` to the nearest multiple of `step`, halves rounding up
///
/// Rounding an already rounded width returns it unchanged.
pub fn round_to_grid(width: i32, step: u32) -> i32 {
    if step == 0 {
        return width;
    }
    let step = step as f64;
    ((width as f64 / step + 0.5).floor() * step) as i32
}

/// Everything the builder sets on a font, decided up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    pub key: FamilyStyleKey,
    pub em: u32,
    /// Advance widths are rounded to multiples of this
    pub advance_step: u32,
    pub naming: FontNaming,
    pub names: Vec<NameEntry>,
    pub copyright: Option<String>,
    pub comment: String,
    pub file_name: String,
}

impl BuildPlan {
    /// `metadata` is the header of the group's smallest member
    ///
    /// Fails when the largest pixel size does not fit an em.
    pub fn new(key: &FamilyStyleKey, group: &BuildGroup, metadata: &BdfHeader) -> Result<Self> {
        let largest_px = group.largest().pixel_size;
        let em = largest_px
            .checked_mul(UNITS_PER_PIXEL)
            .filter(|em| *em <= MAX_EM)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Pixel size {largest_px} of {} is too large for an em of at most {MAX_EM} units",
                    group.largest()
                )
            })?;
        let style = key.style;

        let naming = FontNaming {
            family_name: key.family.clone(),
            font_name: key.font_name(),
            full_name: key.full_name(),
            weight_name: style.weight_name().to_string(),
            weight_class: style.weight_class(),
            fs_selection: style.fs_selection(),
            mac_style: style.mac_style(),
        };

        let names = vec![
            NameEntry::english(NameId::Family, key.family.clone()),
            NameEntry::english(NameId::SubFamily, style.subfamily_name()),
            NameEntry::english(NameId::FullName, key.full_name()),
            NameEntry::english(NameId::PostScriptName, key.font_name()),
        ];

        Ok(Self {
            key: key.clone(),
            em,
            advance_step: em / largest_px,
            naming,
            names,
            copyright: metadata.copyright.clone(),
            comment: compose_comment(metadata),
            file_name: format!("{}.{}", key.font_name(), OUTPUT_EXTENSION),
        })
    }
}

/// Notice, original foundry and the provenance note, one per line
pub fn compose_comment(metadata: &BdfHeader) -> String {
    let mut lines = Vec::new();
    if let Some(notice) = &metadata.notice {
        lines.push(notice.clone());
    }
    if let Some(foundry) = &metadata.foundry {
        lines.push(format!("Original foundry: {foundry}"));
    }
    lines.push(PROVENANCE_NOTE.to_string());
    lines.join("\n")
}
