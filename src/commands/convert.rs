//! Convert command handler

use std::path::Path;

use anyhow::Result;

use deckmd::attachments::sniffer_for;
use deckmd::deck::{expand_inputs, output_dir_for, Converter};
use deckmd::Config;

use super::print_migration;

/// Convert every resolved source into `<output_root>/<stem>/`.
///
/// Unresolvable inputs are reported and skipped. Attachment migration
/// failures abort the run.
#[cfg(not(tarpaulin_include))]
pub fn handle(sources: &[String], output_root: &Path, config: &Config) -> Result<()> {
    let inputs = expand_inputs(sources);
    if inputs.is_empty() {
        eprintln!("Error: No files found");
        return Ok(());
    }

    let layout = config.storage.layout();
    let sniffer = sniffer_for(config.sniffer.kind);
    let converter = Converter::new(&layout, &config.storage.link_prefix, sniffer.as_ref());

    for source in &inputs {
        if !source.is_file() {
            eprintln!("Error: {} not found", source.display());
            continue;
        }

        println!("\nProcessing: {}", source.display());
        let output_dir = output_dir_for(output_root, source);
        println!("Creating markdown files in: {}", output_dir.display());

        let report = converter.convert(source, &output_dir)?;
        print_migration(&report.migration, config);

        println!("Found {} cards in the deck", report.card_count());
        for name in &report.written {
            println!("Created: {}", name);
        }
        println!(
            "\nConversion complete! {} markdown files created in '{}' directory.",
            report.card_count(),
            report.output_dir.display()
        );
    }

    Ok(())
}
