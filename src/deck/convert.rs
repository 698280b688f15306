//! Deck → markdown conversion.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::extract::{self, Card};
use crate::attachments::{BlobResolver, ContentSniffer, MigrationReport, Migrator, StorageLayout};
use crate::files::filename;

/// Result of converting one deck.
#[derive(Debug, Clone, Default)]
pub struct ConvertReport {
    /// Attachment migration performed before extraction.
    pub migration: MigrationReport,
    /// Directory the card documents were written to.
    pub output_dir: PathBuf,
    /// File names written, in card order.
    pub written: Vec<String>,
}

impl ConvertReport {
    pub fn card_count(&self) -> usize {
        self.written.len()
    }
}

/// Converts deck exports into one markdown document per card.
pub struct Converter<'a> {
    layout: &'a StorageLayout,
    link_prefix: &'a str,
    sniffer: &'a dyn ContentSniffer,
}

impl<'a> Converter<'a> {
    pub fn new(
        layout: &'a StorageLayout,
        link_prefix: &'a str,
        sniffer: &'a dyn ContentSniffer,
    ) -> Self {
        Self {
            layout,
            link_prefix,
            sniffer,
        }
    }

    /// Migrate attachments, then build a resolver over canonical storage.
    pub fn prepare(&self) -> Result<(MigrationReport, BlobResolver)> {
        let migration = Migrator::new(self.layout, self.sniffer)
            .run()
            .context("Attachment migration failed")?;
        let resolver = BlobResolver::scan(&self.layout.canonical, self.link_prefix);
        Ok((migration, resolver))
    }

    /// Convert `source` into card documents under `output_dir`.
    ///
    /// Existing documents with the same names are overwritten.
    pub fn convert(&self, source: &Path, output_dir: &Path) -> Result<ConvertReport> {
        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

        let (migration, resolver) = self.prepare()?;

        let raw = fs::read_to_string(source)
            .with_context(|| format!("Failed to read deck {}", source.display()))?;
        let cards = extract::extract(&raw, &resolver);
        debug!(source = %source.display(), cards = cards.len(), "extracted cards");

        let written = write_cards(&cards, output_dir)?;

        Ok(ConvertReport {
            migration,
            output_dir: output_dir.to_path_buf(),
            written,
        })
    }
}

/// Render a card document.
pub fn render_card(card: &Card) -> String {
    format!(
        "# Card {}\n\n## Front\n{}\n\n## Back\n{}\n",
        card.ordinal, card.front, card.back
    )
}

/// Write one document per card, returning the file names in card order.
pub fn write_cards(cards: &[Card], output_dir: &Path) -> Result<Vec<String>> {
    let mut written = Vec::with_capacity(cards.len());
    for card in cards {
        let name = filename::card_filename(card.ordinal, &card.front);
        let path = output_dir.join(&name);
        fs::write(&path, render_card(card))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(name);
    }
    Ok(written)
}

/// Per-deck output directory: `<root>/<source file stem>`.
pub fn output_dir_for(root: &Path, source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "deck".into());
    root.join(stem)
}

/// Expand CLI source arguments.
///
/// Arguments containing `*` or `?` are glob patterns and contribute the
/// matching paths (possibly none). Other arguments are taken literally and
/// may not exist; callers report those individually.
pub fn expand_inputs<S: AsRef<str>>(args: &[S]) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for arg in args {
        let arg = arg.as_ref();
        if arg.contains('*') || arg.contains('?') {
            match glob::glob(arg) {
                Ok(matches) => paths.extend(matches.filter_map(|m| m.ok())),
                Err(e) => warn!(pattern = arg, error = %e, "invalid glob pattern"),
            }
        } else {
            paths.push(PathBuf::from(arg));
        }
    }
    paths
}
