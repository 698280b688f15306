//! Attachment storage: sniffing, migration into canonical storage, and
//! resolution of inline blob references.
//!
//! # Module Structure
//!
//! - [`sniff`] - `ContentSniffer` trait and attachment categories
//! - [`sniffers`] - `file`-command and magic-byte sniffers
//! - [`migrate`] - legacy → canonical migration
//! - [`resolve`] - `{{blob <hash>}}` → markdown link rewriting

mod error;
pub mod migrate;
pub mod resolve;
pub mod sniff;
pub mod sniffers;

pub use error::MigrationError;
pub use migrate::{MigrationReport, Migrator, StorageLayout};
pub use resolve::BlobResolver;
pub use sniff::{Category, ContentSniffer};
pub use sniffers::{sniffer_for, FileCommand, MagicBytes};
