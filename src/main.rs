use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use iatest::cli;

#[derive(Parser)]
#[command(name = "iatest", version)]
#[command(about = "Generate Jest unit tests for a JavaScript file with an LLM", long_about = None)]
struct Cli {
    /// JavaScript file to generate tests for (e.g. ./src/math.js)
    path: Option<String>,

    /// Path to config file (defaults to ./iatest.toml or ~/.config/iatest/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Use mock LLM client for testing
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load `.env` from the working directory only. Parent directories are not searched.
fn load_dotenv() -> Result<(), dotenvy::Error> {
    dotenvy::from_path(".env")
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Before logging, so RUST_LOG from .env reaches the filter
    let dotenv = load_dotenv();
    init_logging(cli.verbose);
    if let Err(e) = dotenv {
        if !matches!(e, dotenvy::Error::Io(_)) {
            tracing::warn!("Failed to load .env file: {}", e);
        }
    }

    match cli::generate::run(cli.path, cli.config, cli.dry_run).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
