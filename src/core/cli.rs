//! Command line interface for the X11 font importer
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs.

use clap::Parser;
use std::path::PathBuf;

/// x11-font-importer CLI arguments
///
/// Examples:
///   x11-font-importer                               # Import from /usr/share/fonts/X11
///   x11-font-importer -o fonts/                     # Write fonts to fonts/
///   x11-font-importer --dry-run -v                  # Show the groups without building
///   x11-font-importer --proportional-dir ./75dpi \
///                     --misc-dir ./misc             # Import from a local copy
///   x11-font-importer --config importer.json        # Read settings from a file
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "x11-font-importer",
    version,
    about = "Convert X11 bitmap fonts into TTF files with embedded bitmap strikes",
    long_about = "Groups the X11 core bitmap fonts (75dpi, 100dpi and misc) by family and style and writes one TTF per group. Every pixel size becomes an embedded bitmap strike, and outlines are auto-traced from the largest size. Requires gzip-compressed PCF input, pcf2bdf and FontForge."
)]
pub struct CliArgs {
    /// Directory the generated fonts are written to
    #[clap(
        long = "output",
        short = 'o',
        help = "Output directory (default: ttf_output)"
    )]
    pub output: Option<PathBuf>,

    /// Proportional font directories
    ///
    /// Replaces the default 75dpi and 100dpi directories when given.
    #[clap(
        long = "proportional-dir",
        help = "Proportional font directory, repeatable",
        long_help = "Directory of proportional X11 fonts (helv*, lu*, lut*, term*). May be given several times; replaces the default /usr/share/fonts/X11/75dpi and /usr/share/fonts/X11/100dpi."
    )]
    pub proportional_dirs: Vec<PathBuf>,

    /// Fixed-width (misc) font directory
    #[clap(long = "misc-dir", help = "Misc fixed-width font directory")]
    pub misc_dir: Option<PathBuf>,

    #[clap(long = "fontforge", help = "FontForge executable")]
    pub fontforge: Option<PathBuf>,

    #[clap(long = "pcf2bdf", help = "pcf2bdf executable")]
    pub pcf2bdf: Option<PathBuf>,

    #[clap(long = "no-potrace", help = "Use FontForge's own tracer instead of potrace")]
    pub no_potrace: bool,

    /// JSON settings file
    #[clap(
        long = "config",
        short = 'c',
        help = "JSON settings file",
        long_help = "JSON settings file with any of output_dir, proportional_dirs, misc_dir, fontforge, pcf2bdf and prefer_potrace. Command line flags override it."
    )]
    pub config: Option<PathBuf>,

    /// Classify, convert and group, but do not build any font
    #[clap(long = "dry-run", help = "Show the build groups without building")]
    pub dry_run: bool,

    /// Keep the scratch directory with the converted BDF files
    #[clap(long = "keep-temp", help = "Keep the scratch directory after the run")]
    pub keep_temp: bool,

    /// Print the run summary as JSON after the text summary
    #[clap(long = "json", help = "Also print the summary as JSON")]
    pub json: bool,

    /// Also write logs to the user's config directory
    #[clap(
        long = "log-file",
        help = "Also write logs to a file",
        long_help = "Also append logs to ~/.config/x11-font-importer/logs/x11-font-importer-YYYY-MM-DD.log"
    )]
    pub log_file: bool,

    #[clap(
        long = "verbose",
        short = 'v',
        action = clap::ArgAction::Count,
        help = "More log output (-v debug, -vv trace)"
    )]
    pub verbose: u8,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    pub fn validate(&self) -> Result<(), String> {
        if let Some(output) = &self.output {
            if output.exists() && !output.is_dir() {
                return Err(format!(
                    "Output path is not a directory: {}\nChoose a directory for the generated fonts.",
                    output.display()
                ));
            }
        }

        if let Some(config) = &self.config {
            if !config.is_file() {
                return Err(format!(
                    "Settings file does not exist: {}\nMake sure the path is correct and the file exists.",
                    config.display()
                ));
            }
        }

        Ok(())
    }
}
