//! Relink command handler

use std::path::Path;

use anyhow::Result;

use deckmd::attachments::sniffer_for;
use deckmd::deck::{relink_dir, Converter};
use deckmd::Config;

use super::print_migration;

/// Migrate attachments, then rewrite blob references in `dir`.
#[cfg(not(tarpaulin_include))]
pub fn handle(dir: &Path, config: &Config) -> Result<()> {
    let layout = config.storage.layout();
    let sniffer = sniffer_for(config.sniffer.kind);
    let converter = Converter::new(&layout, &config.storage.link_prefix, sniffer.as_ref());

    let (migration, resolver) = converter.prepare()?;
    print_migration(&migration, config);

    if !dir.is_dir() {
        eprintln!("Error: {} not found", dir.display());
        return Ok(());
    }

    let updated = relink_dir(dir, &resolver)?;
    for name in &updated {
        println!("Updated: {}", name);
    }
    println!("Updated {} markdown files", updated.len());
    Ok(())
}
