//! CLI parse: clap types for htree. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// htree CLI - parallel Merkle tree file fingerprinting
#[derive(Parser)]
#[command(name = "htree")]
#[command(about = "Compute Merkle tree content fingerprints of files")]
pub struct Cli {
    /// Files to fingerprint, one root digest line per file
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}
