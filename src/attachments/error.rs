//! Attachment migration errors.

use std::path::PathBuf;

/// Errors that abort an attachment migration.
///
/// Only the primary (move) step produces these. Failures while salvaging the
/// secondary location are logged and skipped instead.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Failed to create attachment directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read attachment directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to move attachment {from} to {to}: {source}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}
