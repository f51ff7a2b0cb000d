//! Effective importer settings
//!
//! Priority order:
//! 1. CLI arguments
//! 2. Settings file (`--config`)
//! 3. Built-in defaults below

use crate::core::cli::CliArgs;
use crate::core::config_file::ConfigFile;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "ttf_output";
pub const DEFAULT_PROPORTIONAL_DIRS: [&str; 2] =
    ["/usr/share/fonts/X11/75dpi", "/usr/share/fonts/X11/100dpi"];
pub const DEFAULT_MISC_DIR: &str = "/usr/share/fonts/X11/misc";
pub const DEFAULT_FONTFORGE: &str = "fontforge";
pub const DEFAULT_PCF2BDF: &str = "pcf2bdf";

/// Prefix of the per-run scratch directory
pub const SCRATCH_PREFIX: &str = "x11font_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImporterSettings {
    pub output_dir: PathBuf,
    pub proportional_dirs: Vec<PathBuf>,
    pub misc_dir: PathBuf,
    pub fontforge: PathBuf,
    pub pcf2bdf: PathBuf,
    pub prefer_potrace: bool,
}

impl Default for ImporterSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            proportional_dirs: DEFAULT_PROPORTIONAL_DIRS
                .iter()
                .map(PathBuf::from)
                .collect(),
            misc_dir: PathBuf::from(DEFAULT_MISC_DIR),
            fontforge: PathBuf::from(DEFAULT_FONTFORGE),
            pcf2bdf: PathBuf::from(DEFAULT_PCF2BDF),
            prefer_potrace: true,
        }
    }
}

impl ImporterSettings {
    /// Layer CLI arguments over an optional settings file over defaults
    pub fn resolve(cli: &CliArgs, config: Option<ConfigFile>) -> Self {
        let defaults = Self::default();
        let config = config.unwrap_or_default();

        let proportional_dirs = if !cli.proportional_dirs.is_empty() {
            cli.proportional_dirs.clone()
        } else {
            config
                .proportional_dirs
                .unwrap_or(defaults.proportional_dirs)
        };

        Self {
            output_dir: cli
                .output
                .clone()
                .or(config.output_dir)
                .unwrap_or(defaults.output_dir),
            proportional_dirs,
            misc_dir: cli
                .misc_dir
                .clone()
                .or(config.misc_dir)
                .unwrap_or(defaults.misc_dir),
            fontforge: cli
                .fontforge
                .clone()
                .or(config.fontforge)
                .unwrap_or(defaults.fontforge),
            pcf2bdf: cli
                .pcf2bdf
                .clone()
                .or(config.pcf2bdf)
                .unwrap_or(defaults.pcf2bdf),
            prefer_potrace: if cli.no_potrace {
                false
            } else {
                config.prefer_potrace.unwrap_or(defaults.prefer_potrace)
            },
        }
    }
}
