//! Inbound CLI - resolve navigation intents against inbound catalogs
//!
//! - Rank the inbounds of a catalog that match an intent
//! - Report unresolved user default references
//! - Validate catalogs for configuration errors

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod input;
mod output;

use commands::{resolve, validate};
use config::CliConfig;
use error::CliResult;
use output::OutputFormat;

/// Inbound CLI application
#[derive(Parser)]
#[command(name = "inbound")]
#[command(about = "Inbound - navigation target resolution CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "INBOUND_CONFIG")]
    config: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long, global = true)]
    output: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Rank the inbounds matching an intent
    Resolve(resolve::ResolveArgs),

    /// Check an inbound catalog for configuration errors
    Validate(validate::ValidateArgs),

    /// Show configuration
    Config,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    // Load config
    let config = CliConfig::load(cli.config.as_deref())?;
    let format = cli.output.or(config.default_output).unwrap_or_default();

    // Execute command
    match cli.command {
        Commands::Resolve(args) => resolve::execute(args, &config, format).await,
        Commands::Validate(args) => validate::execute(args, format).await,
        Commands::Config => {
            let path = match cli.config {
                Some(path) => path,
                None => CliConfig::default_config_path()?.display().to_string(),
            };
            println!("Config file: {}", path);
            output::print_document(&config, format)
        }
    }
}
