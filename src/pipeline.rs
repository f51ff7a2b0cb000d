//! The import run: collect, group, build, summarize
//!
//! Generic over the converter and the font engine so the whole flow can be
//! exercised without `pcf2bdf` or FontForge installed.

use crate::build::{BuiltFont, ConsolidatedBuilder};
use crate::core::settings::ImporterSettings;
use crate::data::FamilyStyleKey;
use crate::engine::FontEngine;
use crate::grouping::GroupSet;
use crate::sources::{BitmapConverter, Collection, Collector, Skipped};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// One family/style as found on disk, before deduplication
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupReport {
    pub key: FamilyStyleKey,
    /// Number of BDFs collected for the key
    pub bdf_count: usize,
    /// Distinct pixel sizes, ascending
    pub sizes: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedGroup {
    pub key: FamilyStyleKey,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputFile {
    pub name: String,
    pub bytes: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub output_dir: PathBuf,
    /// Scratch directory of the run; removed at the end unless kept
    pub scratch_dir: PathBuf,
    pub dry_run: bool,
    pub groups: Vec<GroupReport>,
    pub built: Vec<BuiltFont>,
    pub failed: Vec<FailedGroup>,
    pub skipped: Vec<Skipped>,
    /// Every font in the output directory after the run
    pub output_files: Vec<OutputFile>,
}

/// Scan every configured directory into one collection
pub fn collect_all<C: BitmapConverter>(
    converter: &mut C,
    scratch: &Path,
    settings: &ImporterSettings,
) -> Collection {
    let mut collector = Collector::new(converter, scratch);

    tracing::info!(
        "Collecting proportional fonts from {}...",
        display_paths(&settings.proportional_dirs)
    );
    let mut collection = collector.collect_proportional(&settings.proportional_dirs);

    tracing::info!(
        "Collecting misc fixed-width fonts from {}...",
        settings.misc_dir.display()
    );
    collection.merge(collector.collect_misc(&settings.misc_dir));

    tracing::info!(
        "Collected {} fonts into {} groups",
        collection.groups.resource_count(),
        collection.groups.len()
    );
    collection
}

pub fn group_reports(groups: &GroupSet) -> Vec<GroupReport> {
    groups
        .keys()
        .map(|key| {
            let entries = groups.entries(key);
            let mut sizes: Vec<u32> = entries.iter().map(|r| r.pixel_size).collect();
            sizes.sort_unstable();
            sizes.dedup();
            GroupReport {
                key: key.clone(),
                bdf_count: entries.len(),
                sizes,
            }
        })
        .collect()
}

/// Collect, group and (unless `dry_run`) build every group
///
/// A group that fails to build is logged and recorded; the remaining groups
/// are still built. Each written font is announced on `progress` as soon as
/// its group completes.
pub fn run<C: BitmapConverter, E: FontEngine, W: Write>(
    settings: &ImporterSettings,
    converter: &mut C,
    engine: E,
    scratch: &Path,
    dry_run: bool,
    progress: &mut W,
) -> RunSummary {
    let collection = collect_all(converter, scratch, settings);
    for failure in collection.failures() {
        tracing::warn!("Not imported: {} ({:?})", failure.source.display(), failure.reason);
    }

    let mut summary = RunSummary {
        output_dir: settings.output_dir.clone(),
        scratch_dir: scratch.to_path_buf(),
        dry_run,
        groups: group_reports(&collection.groups),
        skipped: collection.skipped,
        ..Default::default()
    };

    let build_groups = collection.groups.into_build_groups();
    let mut builder = ConsolidatedBuilder::new(engine, &settings.output_dir);

    for ((key, group), report) in build_groups.iter().zip(&summary.groups) {
        tracing::info!(
            "{}: {} BDFs, sizes {:?}",
            key,
            report.bdf_count,
            report.sizes
        );
        if dry_run {
            continue;
        }

        match builder.build(key, group) {
            Ok(font) => {
                if let Err(e) = writeln!(progress, "  \u{2192} {}", font.file_name) {
                    tracing::debug!("Could not write progress: {}", e);
                }
                summary.built.push(font);
            }
            Err(e) => {
                tracing::error!("  Failed to build {}: {:#}", key, e);
                summary.failed.push(FailedGroup {
                    key: key.clone(),
                    error: format!("{e:#}"),
                });
            }
        }
    }

    if !dry_run {
        summary.output_files = match list_output_files(&settings.output_dir) {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!(
                    "Could not list {}: {}",
                    settings.output_dir.display(),
                    e
                );
                Vec::new()
            }
        };
    }

    summary
}

/// `.ttf` files in `dir`, sorted by name
pub fn list_output_files(dir: &Path) -> io::Result<Vec<OutputFile>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == crate::build::plan::OUTPUT_EXTENSION) {
            files.push(OutputFile {
                name: entry.file_name().to_string_lossy().into_owned(),
                bytes: entry.metadata()?.len(),
            });
        }
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

/// `1234567` -> `1,234,567`
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl RunSummary {
    /// Human-readable summary for stdout
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.dry_run {
            writeln!(out, "Dry run: {} groups would be built", self.groups.len())?;
            for report in &self.groups {
                writeln!(
                    out,
                    "  {}: {} BDFs, sizes {:?}",
                    report.key, report.bdf_count, report.sizes
                )?;
            }
            return Ok(());
        }

        writeln!(
            out,
            "\nGenerated {} fonts in {}/",
            self.built.len(),
            self.output_dir.display()
        )?;
        if !self.failed.is_empty() {
            writeln!(out, "Failed: {}", self.failed.len())?;
            for failed in &self.failed {
                writeln!(out, "  {}: {}", failed.key, failed.error)?;
            }
        }

        writeln!(out, "\nFile sizes:")?;
        for file in &self.output_files {
            writeln!(out, "  {}: {} bytes", file.name, format_thousands(file.bytes))?;
        }
        Ok(())
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(48213), "48,213");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn output_listing_only_includes_fonts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("X11Helv-Regular.ttf"), vec![0u8; 1500]).unwrap();
        fs::write(dir.path().join("X11Helv-Bold.ttf"), vec![0u8; 20]).unwrap();
        fs::write(dir.path().join("README"), b"notes").unwrap();

        let files = list_output_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![
                OutputFile {
                    name: "X11Helv-Bold.ttf".into(),
                    bytes: 20
                },
                OutputFile {
                    name: "X11Helv-Regular.ttf".into(),
                    bytes: 1500
                },
            ]
        );
    }
}
