//! Guidepack CLI - builds the interactive testing guide and packages the
//! tester distribution.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "guidepack")]
#[command(about = "Testing-guide builder and tester distribution packager")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to guidepack.toml config file
    #[arg(short, long, default_value = "guidepack.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the interactive HTML testing guide
    Build {
        /// Output file (defaults to config or TESTING_GUIDES/testing-guide.html)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Assemble the tester distribution zip archive
    Package {
        /// Directory to write the archive into (defaults to the project root)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Build { output } => {
            commands::build::run(&cli.config, output)?;
        }
        Commands::Package { output_dir } => {
            commands::package::run(&cli.config, output_dir)?;
        }
    }

    Ok(())
}
