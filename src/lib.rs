//! deckmd - convert flashcard deck exports into markdown.
//!
//! A deck export is an XML-like document of `<card>` blocks whose `Front` and
//! `Back` rich-text fields may embed `{{blob <hash>}}` attachment references.
//! Conversion:
//!
//! 1. migrates legacy attachment files into canonical storage as `<hash><ext>`
//!    ([`attachments::Migrator`]),
//! 2. extracts cards, rewriting references into links and stripping markup
//!    ([`deck::extract`]),
//! 3. writes one markdown document per card ([`deck::Converter`]).

pub mod attachments;
pub mod cli;
pub mod config;
pub mod deck;
pub mod files;

pub use config::Config;
