//! ContentSniffer trait and the closed set of attachment categories.

use std::path::Path;

/// A capability that guesses what kind of file an attachment is.
///
/// Implementations must never fail: anything they cannot recognize, including
/// their own errors (tool missing, unreadable file), is reported as
/// [`Category::Unknown`].
pub trait ContentSniffer {
    /// Human-readable name for log messages.
    fn name(&self) -> &'static str;

    /// Classify the file at `path`.
    fn classify(&self, path: &Path) -> Category;
}

/// Detected attachment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Png,
    Jpeg,
    Gif,
    Svg,
    Pdf,
    /// Anything else, or the sniffer could not tell.
    Unknown,
}

impl Category {
    /// Canonical file extension, including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => ".png",
            Self::Jpeg => ".jpg",
            Self::Gif => ".gif",
            Self::Svg => ".svg",
            Self::Pdf => ".pdf",
            Self::Unknown => ".bin",
        }
    }

    /// Map a free-form type description (such as `file -b` output) to a category.
    ///
    /// Matching is by case-insensitive substring, checked in a fixed order so a
    /// description mentioning several formats resolves deterministically.
    pub fn from_description(description: &str) -> Self {
        let lower = description.to_lowercase();
        if lower.contains("png") {
            Self::Png
        } else if lower.contains("jpeg") || lower.contains("jpg") {
            Self::Jpeg
        } else if lower.contains("gif") {
            Self::Gif
        } else if lower.contains("svg") {
            Self::Svg
        } else if lower.contains("pdf") {
            Self::Pdf
        } else {
            Self::Unknown
        }
    }

    /// Map a MIME type to a category.
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            "image/png" => Self::Png,
            "image/jpeg" => Self::Jpeg,
            "image/gif" => Self::Gif,
            "image/svg+xml" => Self::Svg,
            "application/pdf" => Self::Pdf,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
