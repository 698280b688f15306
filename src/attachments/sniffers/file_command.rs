//! Sniffer backed by the external `file` utility.

use crate::attachments::sniff::{Category, ContentSniffer};
use std::path::Path;
use std::process::Command;
use tracing::warn;

/// Classifies attachments by running `file -b <path>`.
///
/// The call is synchronous and has no timeout.
pub struct FileCommand {
    program: String,
}

impl FileCommand {
    /// Create a sniffer that invokes `file` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("file")
    }

    /// Create a sniffer that invokes a specific program (for testing).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn describe(&self, path: &Path) -> Result<String, String> {
        let output = Command::new(&self.program)
            .arg("-b")
            .arg(path)
            .output()
            .map_err(|e| e.to_string())?;

        if !output.status.success() {
            return Err(format!("{} exited with {}", self.program, output.status));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl ContentSniffer for FileCommand {
    fn name(&self) -> &'static str {
        "file"
    }

    fn classify(&self, path: &Path) -> Category {
        match self.describe(path) {
            Ok(description) => Category::from_description(&description),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "file sniffing failed, treating as binary");
                Category::Unknown
            }
        }
    }
}

impl Default for FileCommand {
    fn default() -> Self {
        Self::new()
    }
}
