//! # blogsmith CLI
//!
//! Command-line interface for blogsmith - an autonomous blogging pipeline.
//!
//! ## Usage
//!
//! - `blogsmith "topic"` - Run the full pipeline for a topic
//! - `blogsmith check` - Load and validate the configuration
//! - `blogsmith stages` - Show the pipeline stages in order
//!
//! The pipeline outcome is printed as JSON; the exit code is 0 on success
//! and 1 when the pipeline reports an error.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;

use commands::{check_command, run_command, stages_command};
use config::CliConfigLoader;

/// blogsmith - an autonomous blogging pipeline
#[derive(Parser)]
#[command(name = "blogsmith")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "An autonomous blogging pipeline written in Rust")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// The blog topic to process (runs the full pipeline)
    topic: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate the configuration
    Check,

    /// Show the pipeline stages in order
    Stages,
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    blogsmith_core::init_tracing_with_debug(cli.verbose);

    let config_loader = build_config_loader(&cli);

    match (cli.topic, cli.command) {
        // If a topic is provided, run the full pipeline
        (Some(topic), None) => run_command(topic, config_loader).await,
        // A topic combined with a subcommand is ambiguous
        (Some(_), Some(_)) => {
            tracing::error!("Error: Cannot specify both a topic and a subcommand");
            std::process::exit(2);
        }
        (None, Some(Commands::Check)) => check_command(config_loader).await,
        (None, Some(Commands::Stages)) => stages_command().await,
        (None, None) => {
            eprintln!("error: a topic or a subcommand is required (try --help)");
            std::process::exit(2);
        }
    }
}
