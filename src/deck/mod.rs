//! Flashcard deck conversion.
//!
//! # Module Structure
//!
//! - [`extract`] - tolerant `<card>` block scanning
//! - [`text`] - markup stripping and whitespace cleanup
//! - [`convert`] - per-deck orchestration and document rendering
//! - [`relink`] - blob reference rewriting in existing markdown

pub mod convert;
pub mod extract;
pub mod relink;
pub mod text;

pub use convert::{expand_inputs, output_dir_for, render_card, ConvertReport, Converter};
pub use extract::{extract, extract_raw, Card, RawCard};
pub use relink::relink_dir;
