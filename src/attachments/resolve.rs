//! Rewriting of inline `{{blob <hash>}}` references into markdown links.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `{{blob <lowercase hex>}}`, with any whitespace run after `blob`.
static BLOB_REF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{blob\s+([a-f0-9]+)\}\}").expect("valid blob reference regex"));

/// Extensions rendered as image embeds rather than plain links.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "svg"];

/// Resolves attachment hashes against a snapshot of canonical storage.
///
/// The directory listing is taken once, in [`BlobResolver::scan`] or
/// [`BlobResolver::refresh`]; lookups do no I/O. When several files share a
/// hash (e.g. `h.png` and `h.bin` left by runs with different sniffers) the
/// lexicographically first name wins.
#[derive(Debug, Clone)]
pub struct BlobResolver {
    canonical: PathBuf,
    link_prefix: String,
    names: Vec<String>,
}

impl BlobResolver {
    /// Index `canonical`. A missing or unreadable directory yields an empty index.
    pub fn scan(canonical: impl Into<PathBuf>, link_prefix: impl Into<String>) -> Self {
        let mut resolver = Self {
            canonical: canonical.into(),
            link_prefix: link_prefix.into().trim_end_matches('/').to_string(),
            names: Vec::new(),
        };
        resolver.refresh();
        resolver
    }

    /// Re-read the canonical directory.
    pub fn refresh(&mut self) {
        self.names = list_names(&self.canonical);
    }

    /// Canonical file name for `hash`, if any.
    pub fn lookup(&self, hash: &str) -> Option<&str> {
        let prefix = format!("{}.", hash);
        // Sorted, so the first match is the lexicographically first.
        let start = self.names.partition_point(|n| n.as_str() < prefix.as_str());
        self.names[start..]
            .first()
            .filter(|n| n.starts_with(&prefix))
            .map(String::as_str)
    }

    /// Markdown for a single reference.
    pub fn resolve(&self, hash: &str) -> String {
        match self.lookup(hash) {
            None => format!("[Missing blob: {}]", hash),
            Some(name) if is_image_name(name) => {
                format!("![Image]({}/{})", self.link_prefix, name)
            }
            Some(name) => format!("[File]({}/{})", self.link_prefix, name),
        }
    }

    /// Replace every blob reference in `text`.
    ///
    /// Repeated references to one hash resolve to the same link. Text that is
    /// not an exact reference (uppercase hex, missing braces) is left alone.
    pub fn resolve_all(&self, text: &str) -> String {
        let mut cache: HashMap<String, String> = HashMap::new();
        BLOB_REF_RE
            .replace_all(text, |caps: &Captures| {
                let hash = &caps[1];
                cache
                    .entry(hash.to_string())
                    .or_insert_with(|| self.resolve(hash))
                    .clone()
            })
            .into_owned()
    }
}

fn is_image_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(_) => Vec::new(),
    };
    names.sort();
    names
}
