//! Rewriting blob references inside already-generated markdown files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::attachments::BlobResolver;

/// Files never rewritten.
const SKIPPED_FILES: &[&str] = &["README.md"];

/// Rewrite `{{blob <hash>}}` references in every `*.md` file directly in `dir`.
///
/// Only files whose content changes are written. Returns the names of the
/// updated files, sorted.
pub fn relink_dir(dir: &Path, resolver: &BlobResolver) -> Result<Vec<String>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read directory {}", dir.display()))?
            .path();
        let is_markdown = path.extension().map(|e| e == "md").unwrap_or(false);
        if !path.is_file() || !is_markdown {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) if !SKIPPED_FILES.contains(&name) => name.to_string(),
            _ => continue,
        };
        candidates.push((name, path));
    }
    candidates.sort();

    let mut updated = Vec::new();
    for (name, path) in candidates {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let relinked = resolver.resolve_all(&content);
        if relinked != content {
            fs::write(&path, relinked)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            updated.push(name);
        }
    }
    Ok(updated)
}
