//! In-process sniffer using magic bytes.

use crate::attachments::sniff::{Category, ContentSniffer};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::warn;

/// Bytes read from each attachment; also how far to look for an `<svg` tag.
///
/// Generous enough for editor exports that put long comments or DOCTYPE
/// entity blocks ahead of the root element.
const HEADER_LEN: usize = 64 * 1024;

/// Classifies attachments from their leading bytes via `infer`.
///
/// SVG has no magic number, so it is recognized by an `<svg` tag near the start
/// of a UTF-8 file.
pub struct MagicBytes;

impl MagicBytes {
    pub fn new() -> Self {
        Self
    }

    /// Classify an in-memory buffer.
    pub fn classify_bytes(data: &[u8]) -> Category {
        // infer reports `<?xml` prologues as text/xml, so SVG still needs the probe.
        if let Some(kind) = infer::get(data) {
            let category = Category::from_mime(kind.mime_type());
            if category != Category::Unknown {
                return category;
            }
        }

        let probe = &data[..data.len().min(HEADER_LEN)];
        // The probe may cut a multi-byte char; only the valid prefix matters.
        let text = match std::str::from_utf8(probe) {
            Ok(s) => s,
            Err(e) => match std::str::from_utf8(&probe[..e.valid_up_to()]) {
                Ok(s) if e.error_len().is_none() => s,
                _ => return Category::Unknown,
            },
        };

        if text.to_lowercase().contains("<svg") {
            Category::Svg
        } else {
            Category::Unknown
        }
    }
}

impl ContentSniffer for MagicBytes {
    fn name(&self) -> &'static str {
        "magic"
    }

    fn classify(&self, path: &Path) -> Category {
        match read_header(path) {
            Ok(data) => Self::classify_bytes(&data),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read attachment, treating as binary");
                Category::Unknown
            }
        }
    }
}

fn read_header(path: &Path) -> io::Result<Vec<u8>> {
    let mut data = Vec::with_capacity(HEADER_LEN);
    File::open(path)?
        .take(HEADER_LEN as u64)
        .read_to_end(&mut data)?;
    Ok(data)
}

impl Default for MagicBytes {
    fn default() -> Self {
        Self::new()
    }
}
