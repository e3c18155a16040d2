//! AMPscore — composite desirability scoring for antimicrobial peptides.
//! Entry point for the `ampscore` binary.

mod cli;
mod commands;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ampscore=info,warn")),
        )
        .init();

    info!("AMPscore {}", env!("CARGO_PKG_VERSION"));

    let cli = cli::Cli::parse();
    match cli.command {
        cli::Commands::Score(args) => commands::score::run(args),
        cli::Commands::Batch(args) => commands::batch::run(args).await,
        cli::Commands::Index(args) => commands::index::run(args).await,
        cli::Commands::InitConfig(args) => commands::init_config::run(args),
    }
}
