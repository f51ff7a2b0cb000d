//! Application runner logic
//!
//! Resolves settings, owns the scratch directory and wires the concrete
//! `pcf2bdf` converter and FontForge engine into the pipeline.

use crate::core::cli::CliArgs;
use crate::core::config_file::ConfigFile;
use crate::core::settings::{ImporterSettings, SCRATCH_PREFIX};
use crate::engine::FontForgeEngine;
use crate::pipeline::{self, RunSummary};
use crate::sources::Pcf2Bdf;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;

/// Run one import with the given CLI arguments
pub fn run_app(cli_args: CliArgs) -> Result<RunSummary> {
    cli_args.validate().map_err(anyhow::Error::msg)?;

    let config = cli_args
        .config
        .as_deref()
        .map(ConfigFile::load)
        .transpose()?;
    let settings = ImporterSettings::resolve(&cli_args, config);
    tracing::debug!("Settings: {:?}", settings);

    if !cli_args.dry_run {
        fs::create_dir_all(&settings.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                settings.output_dir.display()
            )
        })?;
    }

    let scratch = tempfile::Builder::new()
        .prefix(SCRATCH_PREFIX)
        .tempdir()
        .context("Failed to create scratch directory")?;
    tracing::debug!("Scratch directory: {}", scratch.path().display());

    let mut converter = Pcf2Bdf::new(&settings.pcf2bdf);
    let engine = FontForgeEngine::new(&settings.fontforge, scratch.path())
        .with_potrace(settings.prefer_potrace);

    let stdout = std::io::stdout();
    let summary = pipeline::run(
        &settings,
        &mut converter,
        engine,
        scratch.path(),
        cli_args.dry_run,
        &mut stdout.lock(),
    );

    if cli_args.keep_temp {
        let kept = scratch.keep();
        tracing::info!("Kept scratch directory {}", kept.display());
    } else {
        let path = scratch.path().to_path_buf();
        if let Err(e) = scratch.close() {
            tracing::warn!(
                "Failed to remove scratch directory {}: {}",
                path.display(),
                e
            );
        }
    }

    let mut out = stdout.lock();
    summary.write_text(&mut out)?;
    if cli_args.json {
        serde_json::to_writer_pretty(&mut out, &summary)?;
        writeln!(out)?;
    }

    Ok(summary)
}
