//! Card extraction from deck exports.
//!
//! Deck exports look like XML but routinely contain unescaped markup inside
//! fields, so this is a tolerant pattern scan rather than a parser:
//!
//! ```text
//! <card>
//!   <rich-text name='Front'>What is <b>Rust</b>? {{blob ab12}}</rich-text>
//!   <rich-text name='Back'>A systems language.</rich-text>
//! </card>
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use super::text;
use crate::attachments::BlobResolver;

static CARD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<card>(.*?)</card>").expect("valid card regex"));
static FRONT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<rich-text name=['"]Front['"]>(.*?)</rich-text>"#).expect("valid front regex")
});
static BACK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<rich-text name=['"]Back['"]>(.*?)</rich-text>"#).expect("valid back regex")
});

/// Unprocessed field markup of one card block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCard<'a> {
    pub front: &'a str,
    pub back: &'a str,
}

/// A card with references resolved and markup stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// 1-based position in the source document.
    pub ordinal: usize,
    pub front: String,
    pub back: String,
}

/// Find every `<card>` block in document order.
///
/// Blocks do not overlap; a missing field is an empty string.
pub fn extract_raw(raw: &str) -> Vec<RawCard<'_>> {
    CARD_RE
        .captures_iter(raw)
        .filter_map(|caps| caps.get(1))
        .map(|body| {
            let body = body.as_str();
            RawCard {
                front: first_field(&FRONT_RE, body),
                back: first_field(&BACK_RE, body),
            }
        })
        .collect()
}

/// Extract cards, resolving blob references before stripping markup.
pub fn extract(raw: &str, resolver: &BlobResolver) -> Vec<Card> {
    extract_raw(raw)
        .into_iter()
        .enumerate()
        .map(|(i, card)| Card {
            ordinal: i + 1,
            front: text::sanitize(&resolver.resolve_all(card.front)),
            back: text::sanitize(&resolver.resolve_all(card.back)),
        })
        .collect()
}

fn first_field<'a>(re: &Regex, body: &'a str) -> &'a str {
    re.captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or("")
}
