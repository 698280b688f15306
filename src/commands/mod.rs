//! Subcommand handlers.

pub mod completions;
pub mod config;
pub mod convert;
pub mod relink;

use anyhow::{Context, Result};
use humansize::{format_size, DECIMAL};

use deckmd::attachments::MigrationReport;
use deckmd::cli::Cli;
use deckmd::Config;

/// Load config from `--config` or the default location, then apply CLI overrides.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().context("Failed to load configuration")?,
    };
    cli.storage.apply(&mut config);
    Ok(config)
}

/// Print the migration summary line, if anything happened.
pub fn print_migration(report: &MigrationReport, config: &Config) {
    if report.migrated() > 0 {
        println!(
            "Moved/Migrated {} blob files to {} ({})",
            report.migrated(),
            config.storage.public_files_dir.display(),
            format_size(report.bytes, DECIMAL)
        );
    }
    if report.failed > 0 {
        eprintln!(
            "Warning: {} legacy attachment(s) could not be copied and were skipped",
            report.failed
        );
    }
}
