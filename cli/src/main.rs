//! # Linkstamp Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `linkstamp` binary.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and building the `LinkFileWriter`
//! - Routing execution to the subcommand handlers
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! linkstamp --help
//!
//! # Write a link file with debug logging
//! linkstamp -vv write dist/index.js --content "export * from './a';"
//!
//! # Use a specific configuration file
//! linkstamp --config ./ci/linkstamp.toml inspect dist/index.js
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration and build the writer
//! 4. Route to the subcommand handler
//! 5. Format and display any errors that occur
//!
use clap::Parser;
use linkstamp::common::fs::io::expand_tilde;
use linkstamp::core::config;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Subcommand argument structs and handlers.

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "linkstamp",
    about = "Write generated link files without clobbering hand-edited ones",
    long_about = "Writes generated link files idempotently. Files carrying the generated-file\n\
                  stamp are refreshed, hand-edited files are left alone unless --override is\n\
                  given, and symlinks are never overwritten.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the user and project files.
    #[arg(long, global = true, value_name = "FILE", env = "LINKSTAMP_CONFIG")]
    config: Option<String>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "w")]
    Write(commands::write::WriteArgs),
    #[command(alias = "i")]
    Inspect(commands::inspect::InspectArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.as_deref().map(expand_tilde);
    let cfg = config::load_config(config_path.as_deref())?;
    let writer = cfg.writer()?;

    match cli.command {
        Commands::Write(args) => commands::write::handle_write(args, &writer).await,
        Commands::Inspect(args) => commands::inspect::handle_inspect(args, &writer).await,
    }
}
