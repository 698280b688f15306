//! Rich-text to plain-text cleanup.

use once_cell::sync::Lazy;
use regex::Regex;

/// A `<...>` span with at least one character inside. Spans may cross lines.
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Strip markup tags and collapse whitespace.
///
/// Unbalanced `<` or `>` that do not form a tag-shaped span stay as literal
/// text. The result is trimmed and contains no runs of whitespace, and
/// `sanitize(sanitize(x)) == sanitize(x)`.
pub fn sanitize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let stripped = TAG_RE.replace_all(text, "");
    let collapsed = WHITESPACE_RE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}
