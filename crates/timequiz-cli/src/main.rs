//! timequiz CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "timequiz", version, about = "Timed quizzes from CSV files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a timed quiz in the terminal
    Run {
        /// CSV file in the format 'question,answer' (default: problems.csv)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Time limit for the whole quiz in seconds (default: 30)
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,

        /// Shuffle the question order
        #[arg(long)]
        shuffle: bool,

        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print a per-question review table after the score
        #[arg(long)]
        review: bool,

        /// Print the session report as JSON on stdout; prompts go to stderr
        #[arg(long, conflicts_with = "review")]
        json: bool,
    },

    /// Check a question file for problems
    Validate {
        /// CSV file to check
        #[arg(long)]
        csv: PathBuf,
    },

    /// Create a starter question file and config
    Init,
}

#[tokio::main]
async fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("timequiz=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            csv,
            limit,
            shuffle,
            seed,
            config,
            review,
            json,
        } => {
            let overrides = config::Overrides {
                source: csv,
                time_limit_secs: limit,
                shuffle,
                seed,
            };
            commands::run::execute(config, overrides, review, json).await
        }
        Commands::Validate { csv } => commands::validate::execute(csv),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
