//! Gudang Portal: command-line front end to the warehouse portal session.
//!
//! Loads configuration, sets up logging and dispatches to a subcommand.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

mod commands;
mod navigator;
mod output;

use commands::Cli;
use portal_core::config::AppConfig;
use portal_core::error::AppError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            output::print_error(&format!("Failed to load configuration: {}", e.message));
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = cli.execute(config).await {
        output::print_error(&e.message);
        std::process::exit(1);
    }
}

/// Load configuration from the given file, the environment overlay and
/// `GUDANG__` variables.
fn load_configuration(config_path: &str) -> Result<AppConfig, AppError> {
    let env = std::env::var("GUDANG_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(config_path, &env)
}

/// Initialize tracing/logging. Logs go to stderr so command output stays
/// machine-readable.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
