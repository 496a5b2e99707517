//! Bolsa CLI binary.
//!
//! Provides the command-line interface for the Bolsa stock-scoring toolkit.

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process;

#[derive(Parser)]
#[command(name = "bolsa")]
#[command(about = "Multi-factor stock scoring", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an instrument across all registered factors
    Score {
        /// Instrument code (e.g. 600660)
        code: String,

        /// Emit the full result as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// List registered factors
    Factors {
        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score { code, json } => {
            cmd::score::score_instrument(&code, json).await?;
        }
        Commands::Factors { verbose } => {
            cmd::factors::list_factors(verbose);
        }
    }

    Ok(())
}
