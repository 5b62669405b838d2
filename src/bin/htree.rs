//! htree CLI Binary
//!
//! Command-line interface for parallel Merkle tree file fingerprinting.

use clap::Parser;
use htree::cli::{run, Cli, OutputFormat};
use htree::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::info;

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let Some(format) = OutputFormat::parse(&cli.format) else {
        eprintln!(
            "Error: invalid output format: {} (must be 'text' or 'json')",
            cli.format
        );
        process::exit(1);
    };

    info!(files = cli.files.len(), "htree starting");

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let all_ok = run(&cli, format, &mut stdout.lock(), &mut stderr.lock());
    process::exit(if all_ok { 0 } else { 1 });
}

/// Build logging configuration from CLI arguments.
///
/// Logging is off unless --verbose or an explicit level is given.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig::default();

    if !cli.verbose && cli.log_level.is_none() {
        config.level = "off".to_string();
        return config;
    }

    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
