//! Filename generation and sanitization for card documents.
//!
//! Card files are named `<ordinal>_<front prefix>.md`, with the ordinal
//! zero-padded to three digits and the prefix made filesystem-safe.

/// Characters that are invalid in filenames on common filesystems.
const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replacement for invalid characters and whitespace runs.
const REPLACEMENT: char = '_';

/// Maximum length (in characters) of a sanitized fragment.
pub const MAX_FRAGMENT_LENGTH: usize = 100;

/// How many characters of the front text feed the filename.
pub const FRONT_PREFIX_LENGTH: usize = 50;

/// Name used when a card has no front text.
const FALLBACK_NAME: &str = "card";

/// Extension of generated card documents.
const EXTENSION: &str = "md";

/// Sanitizes a string for use as a filename fragment.
///
/// Applies the following transformations in order:
/// 1. Invalid filesystem characters (`< > : " / \ | ? *`) → `_`
/// 2. Leading/trailing whitespace trimmed
/// 3. Internal whitespace runs → a single `_`
/// 4. Truncation to [`MAX_FRAGMENT_LENGTH`] characters
///
/// Every other character, including non-ASCII, is kept.
pub fn sanitize(input: &str) -> String {
    let replaced: String = input
        .chars()
        .map(|c| if INVALID_CHARS.contains(&c) { REPLACEMENT } else { c })
        .collect();

    let mut result = String::with_capacity(replaced.len());
    let mut in_whitespace = false;
    for c in replaced.trim().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                result.push(REPLACEMENT);
                in_whitespace = true;
            }
        } else {
            result.push(c);
            in_whitespace = false;
        }
    }

    truncate_to_length(&result, MAX_FRAGMENT_LENGTH)
}

/// Generates the document filename for a card.
///
/// Uses the first [`FRONT_PREFIX_LENGTH`] characters of `front`, or
/// `<ordinal>_card.md` when `front` is blank.
pub fn card_filename(ordinal: usize, front: &str) -> String {
    if front.trim().is_empty() {
        return format!("{:03}_{}.{}", ordinal, FALLBACK_NAME, EXTENSION);
    }
    let prefix = truncate_to_length(front, FRONT_PREFIX_LENGTH);
    format!("{:03}_{}.{}", ordinal, sanitize(&prefix), EXTENSION)
}

/// Truncates a string to the specified number of characters.
fn truncate_to_length(s: &str, max_len: usize) -> String {
    match s.char_indices().nth(max_len) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
