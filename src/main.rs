use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use deckmd::cli::{Cli, Commands, ConfigCommands};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Completions and `config init` must work even when the existing config
    // file is broken, so only the other commands load it.
    match &cli.command {
        Commands::Completions { shell } => {
            commands::completions::handle(*shell);
            Ok(())
        }
        Commands::Config {
            command: ConfigCommands::Init { force },
        } => commands::config::handle_init(cli.config.as_deref(), *force),
        Commands::Config {
            command: ConfigCommands::Show,
        } => commands::config::handle_show(&commands::load_config(&cli)?),
        Commands::Convert {
            sources,
            output_dir,
        } => {
            let config = commands::load_config(&cli)?;
            let root = output_dir
                .clone()
                .unwrap_or_else(|| config.output.root.clone());
            commands::convert::handle(sources, &root, &config)
        }
        Commands::Relink { dir } => commands::relink::handle(dir, &commands::load_config(&cli)?),
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "deckmd=debug" } else { "deckmd=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
