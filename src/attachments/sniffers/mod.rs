//! Content sniffer implementations.

mod file_command;
mod magic;

pub use file_command::FileCommand;
pub use magic::MagicBytes;

use super::sniff::ContentSniffer;
use crate::config::SnifferKind;

/// Get the sniffer selected by configuration.
pub fn sniffer_for(kind: SnifferKind) -> Box<dyn ContentSniffer> {
    match kind {
        SnifferKind::File => Box::new(FileCommand::new()),
        SnifferKind::Magic => Box::new(MagicBytes::new()),
    }
}
