//! tabscore - Main Entry Point
//!
//! One-shot scoring CLI: load a trained model artifact, score one record,
//! emit the JSON result on stdout.

use clap::Parser;
use tabscore::cli::{cmd_inspect, cmd_predict, Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize logging; stderr only, stdout carries the JSON result
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tabscore=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Predict { model, input } => {
            cmd_predict(&model, &input)?;
        }
        Commands::Inspect { model } => {
            cmd_inspect(&model)?;
        }
    }

    Ok(())
}
