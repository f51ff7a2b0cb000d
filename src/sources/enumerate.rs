//! Input directory scanning

use std::path::{Path, PathBuf};

/// File pattern of X11 core fonts
pub const PCF_GLOB: &str = "*.pcf.gz";

/// List `*.pcf.gz` files in `dir`, sorted by path
///
/// A missing directory is not an error; it simply holds no fonts.
pub fn list_pcf_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        tracing::info!("Skipping missing font directory {}", dir.display());
        return Vec::new();
    }

    let pattern = format!(
        "{}/{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        PCF_GLOB
    );

    let mut files: Vec<PathBuf> = match glob::glob(&pattern) {
        Ok(paths) => paths
            .filter_map(|entry| match entry {
                Ok(path) if path.is_file() => Some(path),
                Ok(_) => None,
                Err(e) => {
                    tracing::warn!("Unreadable entry in {}: {}", dir.display(), e);
                    None
                }
            })
            .collect(),
        Err(e) => {
            tracing::warn!("Invalid font directory pattern {}: {}", pattern, e);
            Vec::new()
        }
    };
    files.sort();
    tracing::debug!("Found {} fonts in {}", files.len(), dir.display());
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lists_only_compressed_pcf_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["helvR10.pcf.gz", "fonts.dir", "helvB12.pcf.gz", "notes.pcf"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("sub.pcf.gz")).unwrap();

        let names: Vec<String> = list_pcf_files(dir.path())
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["helvB12.pcf.gz", "helvR10.pcf.gz"]);
    }

    #[test]
    fn missing_directory_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_pcf_files(&dir.path().join("75dpi")).is_empty());
    }

    #[test]
    fn directories_with_glob_characters_are_escaped() {
        let dir = tempfile::tempdir().unwrap();
        let odd = dir.path().join("fonts [x11]");
        fs::create_dir(&odd).unwrap();
        fs::write(odd.join("6x13.pcf.gz"), b"x").unwrap();
        assert_eq!(list_pcf_files(&odd).len(), 1);
    }
}
