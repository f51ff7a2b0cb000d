//! Resource collection: scan, classify, convert, resolve pixel size
//!
//! Classification runs before conversion so unmatched files never reach
//! `pcf2bdf`. Every dropped file is recorded with its reason.

use super::convert::BitmapConverter;
use super::enumerate::list_pcf_files;
use crate::classify::{self, basename_of, is_excluded_charset};
use crate::data::{bdf, FamilyStyleKey, FontResource, SourceKind};
use crate::grouping::GroupSet;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Why a source file did not become part of any group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// Charset-specific variant (`-ISO8859-*`, `-KOI8-*`, `-JISX*`)
    Charset,
    /// Matched no table entry, or a misc skip prefix
    Unclassified,
    ConversionFailed { error: String },
    UnresolvedPixelSize,
}

impl SkipReason {
    /// Filters are expected; the other reasons lose a font the tables asked for
    pub fn is_filter(&self) -> bool {
        matches!(self, SkipReason::Charset | SkipReason::Unclassified)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skipped {
    pub source: PathBuf,
    #[serde(flatten)]
    pub reason: SkipReason,
}

/// Grouped resources plus everything that was left out
#[derive(Debug, Default)]
pub struct Collection {
    pub groups: GroupSet,
    pub skipped: Vec<Skipped>,
}

impl Collection {
    pub fn merge(&mut self, other: Collection) {
        self.groups.merge(other.groups);
        self.skipped.extend(other.skipped);
    }

    /// Skips that are not plain filters
    pub fn failures(&self) -> impl Iterator<Item = &Skipped> {
        self.skipped.iter().filter(|s| !s.reason.is_filter())
    }
}

pub struct Collector<'a, C: BitmapConverter> {
    converter: &'a mut C,
    scratch: &'a Path,
}

impl<'a, C: BitmapConverter> Collector<'a, C> {
    pub fn new(converter: &'a mut C, scratch: &'a Path) -> Self {
        Self { converter, scratch }
    }

    /// Proportional fonts from every directory, e.g. `75dpi` and `100dpi`
    pub fn collect_proportional(&mut self, dirs: &[PathBuf]) -> Collection {
        let mut collection = Collection::default();
        let mut labels = HashSet::new();

        for (index, dir) in dirs.iter().enumerate() {
            let mut label = dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| format!("dir{index}"));
            if !labels.insert(label.clone()) {
                label = format!("{label}{index}");
                labels.insert(label.clone());
            }

            for source in list_pcf_files(dir) {
                let Some(basename) = self.basename(&source) else {
                    continue;
                };
                if is_excluded_charset(&basename) {
                    collection.skip(&source, SkipReason::Charset);
                    continue;
                }
                let Some(key) = classify::classify_proportional(&basename) else {
                    collection.skip(&source, SkipReason::Unclassified);
                    continue;
                };

                let bdf_path = self.scratch.join(format!("{basename}_{label}.bdf"));
                if let Err(reason) = self.convert(&source, &bdf_path) {
                    collection.skip(&source, reason);
                    continue;
                }

                let px = bdf::pixel_size(&bdf_path);
                if px == 0 {
                    tracing::warn!(
                        "No PIXEL_SIZE in {}, dropping it from {}",
                        source.display(),
                        key
                    );
                    collection.skip(&source, SkipReason::UnresolvedPixelSize);
                    continue;
                }

                let resource =
                    FontResource::new(&source, bdf_path, basename, px, SourceKind::Proportional);
                collection.add(key, resource);
            }
        }

        collection
    }

    /// Fixed-width fonts from the misc directory
    pub fn collect_misc(&mut self, dir: &Path) -> Collection {
        let mut collection = Collection::default();

        for source in list_pcf_files(dir) {
            let Some(basename) = self.basename(&source) else {
                continue;
            };
            if is_excluded_charset(&basename) {
                collection.skip(&source, SkipReason::Charset);
                continue;
            }
            let Some(entry) = classify::classify_misc(&basename) else {
                collection.skip(&source, SkipReason::Unclassified);
                continue;
            };

            let bdf_path = self.scratch.join(format!("misc_{basename}.bdf"));
            if let Err(reason) = self.convert(&source, &bdf_path) {
                collection.skip(&source, reason);
                continue;
            }

            let px = match bdf::pixel_size(&bdf_path) {
                0 => {
                    tracing::debug!(
                        "{} has no PIXEL_SIZE, using nominal {}",
                        basename,
                        entry.nominal_pixel_size
                    );
                    entry.nominal_pixel_size
                }
                px => px,
            };

            let resource = FontResource::new(&source, bdf_path, basename, px, SourceKind::Misc);
            collection.add(entry.key, resource);
        }

        collection
    }

    fn basename(&self, source: &Path) -> Option<String> {
        let file_name = source.file_name()?.to_str()?;
        Some(basename_of(file_name).to_string())
    }

    fn convert(&mut self, source: &Path, bdf_path: &Path) -> Result<(), SkipReason> {
        self.converter.convert(source, bdf_path).map_err(|e| {
            tracing::warn!("Conversion of {} failed: {}", source.display(), e);
            SkipReason::ConversionFailed {
                error: e.to_string(),
            }
        })
    }
}

impl Collection {
    fn add(&mut self, key: FamilyStyleKey, resource: FontResource) {
        tracing::debug!("{} -> {}", resource, key);
        self.groups.add(key, resource);
    }

    fn skip(&mut self, source: &Path, reason: SkipReason) {
        if reason.is_filter() {
            tracing::trace!("Skipping {} ({:?})", source.display(), reason);
        }
        self.skipped.push(Skipped {
            source: source.to_path_buf(),
            reason,
        });
    }
}
