mod commands;
mod settings;
mod summary;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sidekick", about = "Image animation, comparison and line-art tools")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Defaults file (TOML), see `sidekick config`
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate a still image into a PNG frame sequence
    Animate(commands::animate::AnimateArgs),
    /// Compare two images and report similarity metrics
    Compare(commands::compare::CompareArgs),
    /// Clean up a line-art drawing
    Cleanup(commands::cleanup::CleanupArgs),
    /// Print or save the default configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = settings::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Animate(args) => commands::animate::run(args, &config),
        Commands::Compare(args) => commands::compare::run(args, &config),
        Commands::Cleanup(args) => commands::cleanup::run(args, &config),
        Commands::Config(args) => commands::config::run(args, &config),
    }
}
