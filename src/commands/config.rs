//! Config subcommands handler

use std::path::Path;

use anyhow::{bail, Result};

use deckmd::Config;

/// Show effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write the default configuration to `path` (or the default location).
#[cfg(not(tarpaulin_include))]
pub fn handle_init(path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => Config::config_path()?,
    };

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to(&config_path)?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}
