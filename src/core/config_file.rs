//! Optional JSON settings file
//!
//! Only read when `--config <FILE>` is given. Every field is optional;
//! missing fields fall back to the built-in defaults and CLI flags win
//! over anything set here.
//!
//! ```json
//! {
//!   "output_dir": "fonts/ttf",
//!   "proportional_dirs": ["/usr/share/fonts/X11/75dpi"],
//!   "misc_dir": "/usr/share/fonts/X11/misc",
//!   "fontforge": "/opt/fontforge/bin/fontforge",
//!   "pcf2bdf": "pcf2bdf",
//!   "prefer_potrace": true
//! }
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub output_dir: Option<PathBuf>,
    pub proportional_dirs: Option<Vec<PathBuf>>,
    pub misc_dir: Option<PathBuf>,
    pub fontforge: Option<PathBuf>,
    pub pcf2bdf: Option<PathBuf>,
    pub prefer_potrace: Option<bool>,
}

impl ConfigFile {
    /// Load settings from `path`
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let config: ConfigFile = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
        tracing::debug!("Loaded settings from {:?}", path);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_files_leave_other_fields_unset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "fontforge": "/opt/ff", "prefer_potrace": false }"#).unwrap();

        let config = ConfigFile::load(&path).unwrap();
        assert_eq!(config.fontforge, Some(PathBuf::from("/opt/ff")));
        assert_eq!(config.prefer_potrace, Some(false));
        assert_eq!(config.output_dir, None);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "theme": "dark" }"#).unwrap();

        let err = ConfigFile::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("unknown field"));
    }
}
