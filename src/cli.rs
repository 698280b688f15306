//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can render man pages from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, SnifferKind};

/// Version string with git SHA and build date.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("DECKMD_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(
    name = "deckmd",
    version,
    long_version = LONG_VERSION,
    about = "Convert flashcard deck exports into markdown files",
    long_about = "Convert flashcard deck exports into one markdown file per card.\n\n\
        Attachments referenced as {{blob <hash>}} are migrated into public storage \
        with a detected extension and rewritten into image or file links."
)]
pub struct Cli {
    /// Config file (default: <config dir>/deckmd/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Per-run overrides for attachment storage.
#[derive(Debug, Default, Args)]
pub struct StorageArgs {
    /// Primary legacy attachment directory (files are moved out)
    #[arg(long, global = true, value_name = "DIR")]
    pub blobs_dir: Option<PathBuf>,

    /// Secondary legacy attachment directory (files are copied out)
    #[arg(long, global = true, value_name = "DIR")]
    pub legacy_dir: Option<PathBuf>,

    /// Public attachment directory
    #[arg(long, global = true, value_name = "DIR")]
    pub public_dir: Option<PathBuf>,

    /// How attachment types are detected
    #[arg(long, global = true, value_enum, value_name = "KIND")]
    pub sniffer: Option<SnifferKind>,
}

impl StorageArgs {
    /// Apply the overrides that were given.
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.blobs_dir {
            config.storage.blobs_dir = dir.clone();
        }
        if let Some(dir) = &self.legacy_dir {
            config.storage.legacy_files_dir = dir.clone();
        }
        if let Some(dir) = &self.public_dir {
            config.storage.public_files_dir = dir.clone();
        }
        if let Some(kind) = self.sniffer {
            config.sniffer.kind = kind;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert deck exports into per-card markdown files
    #[command(long_about = "Convert deck exports into per-card markdown files.\n\n\
        Each SOURCE may be a path or a glob pattern (quote it to stop the shell \
        expanding it). Cards from deck `name.xml` are written to `<output>/name/`.")]
    Convert {
        /// Deck export files or glob patterns
        #[arg(required = true, value_name = "SOURCE")]
        sources: Vec<String>,

        /// Output root directory (overrides config)
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Migrate attachments and rewrite blob references in existing markdown files
    Relink {
        /// Directory containing generated markdown files
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },

    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
