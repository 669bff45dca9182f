//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `iss_flyover` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All lookups are implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use iss_flyover::app::{format_coordinates, print_pass_times};
use iss_flyover::config::{Cli, Command};
use iss_flyover::initialization::init_logger_with;
use iss_flyover::{Config, FlyoverError, HttpFlyoverChain};

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; it is only a convenient place to put RUST_LOG
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Next);
    let config = Config::from(cli.global);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    config.validate().context("Invalid configuration")?;

    let chain = HttpFlyoverChain::from_config(&config).context("Failed to build HTTP client")?;

    match command {
        Command::Next => {
            let passes = chain.next_pass_times().await.unwrap_or_else(|e| fail(e));
            print_pass_times(&passes).context("Failed to write pass times")?;
        }
        Command::Ip => {
            let ip = chain.my_ip().await.unwrap_or_else(|e| fail(e));
            println!("{}", ip);
        }
        Command::Coords => {
            let coords = chain.my_coordinates().await.unwrap_or_else(|e| fail(e));
            println!("{}", format_coordinates(&coords));
        }
    }

    Ok(())
}

/// Reports a failed lookup and exits with status 1.
fn fail(e: FlyoverError) -> ! {
    eprintln!("It didn't work! {}", e);
    process::exit(1);
}
