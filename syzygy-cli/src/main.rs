use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands};
use syzygy_core::SyzygyError;

fn main() {
    // Initialize logging with SYZYGY_LOG environment variable support
    let log_level = std::env::var("SYZYGY_LOG").unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<SyzygyError>() {
            Some(SyzygyError::Configuration(_)) => 2,
            Some(SyzygyError::Io(_)) => 3,
            Some(SyzygyError::Parse(_)) => 4,
            Some(SyzygyError::InvalidInput(_)) => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Align(args) => crate::cli::commands::align::run(args),
    }
}
