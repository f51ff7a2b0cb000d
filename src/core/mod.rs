//! Core application functionality
//!
//! This module contains the application shell around the import pipeline:
//! - CLI parsing and validation
//! - Settings resolution (CLI, settings file, defaults)
//! - The runner that owns the scratch directory and concrete adapters

pub mod cli;
pub mod config_file;
pub mod platform;
pub mod runner;
pub mod settings;

// Re-export commonly used items
pub use cli::CliArgs;
pub use config_file::ConfigFile;
pub use runner::run_app;
pub use settings::ImporterSettings;
