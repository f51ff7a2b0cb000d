//! Convert X11 bitmap fonts into consolidated TTF files.
//!
//! Every pixel size of a family and style ends up as an embedded bitmap
//! strike in one font, next to outlines traced from the largest size.

use anyhow::Result;
use x11_font_importer::{core, logging};

/// Run the importer with the given CLI arguments.
fn run_app(cli_args: core::cli::CliArgs) -> Result<()> {
    let _log_guard = logging::init(cli_args.verbose, cli_args.log_file)?;
    let summary = core::run_app(cli_args)?;
    if !summary.failed.is_empty() {
        tracing::warn!("{} group(s) failed to build", summary.failed.len());
    }
    Ok(())
}

fn main() {
    let cli_args = core::platform::get_cli_args();
    if let Err(error) = run_app(cli_args) {
        core::platform::handle_error(error);
    }
}
