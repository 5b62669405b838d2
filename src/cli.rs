//! CLI domain: parse, precheck, per-file driver, and output only.
//! Every input file is prechecked, hashed, and reported independently.

mod output;
mod parse;

pub use output::{format_digest_json, format_digest_line};
pub use parse::Cli;

use crate::error::PrecheckError;
use crate::tree;
use std::io::Write;
use std::path::Path;
use tracing::error;

/// Output format for digest lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a `--format` argument value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Verify that `path` is an existing, readable, non-directory file.
///
/// Runs before the hashing core so these conditions surface as distinct
/// errors rather than as read failures mid-pipeline.
pub fn precheck(path: &Path) -> Result<(), PrecheckError> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(PrecheckError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(PrecheckError::NotReadable(path.to_path_buf(), e)),
    };
    if metadata.is_dir() {
        return Err(PrecheckError::IsDirectory(path.to_path_buf()));
    }
    // Probe read permission the way access(R_OK) would.
    match std::fs::File::open(path) {
        Ok(_) => Ok(()),
        Err(e) => Err(PrecheckError::NotReadable(path.to_path_buf(), e)),
    }
}

/// Hash every file in `cli.files` in argument order, writing one digest line
/// per file to `out` and one line per failure to `err`.
///
/// Each file's pipeline is fully independent: a failing file is reported and
/// the remaining files are still processed. Output is flushed before
/// returning. Returns `true` when every file hashed successfully.
pub fn run<W: Write, E: Write>(
    cli: &Cli,
    format: OutputFormat,
    out: &mut W,
    err: &mut E,
) -> bool {
    let mut all_ok = true;

    for file in &cli.files {
        if let Err(e) = precheck(file) {
            error!(file = %file.display(), "precheck failed: {e}");
            let _ = writeln!(err, "Error: {e}");
            all_ok = false;
            continue;
        }

        match tree::hash_file(file) {
            Ok(root) => {
                let line = match format {
                    OutputFormat::Text => format_digest_line(&root, file),
                    OutputFormat::Json => format_digest_json(&root, file),
                };
                let _ = writeln!(out, "{line}");
            }
            Err(e) => {
                error!(file = %file.display(), "hashing failed: {e}");
                let _ = writeln!(err, "Error: {e}");
                all_ok = false;
            }
        }
    }

    let _ = out.flush();
    let _ = err.flush();
    all_ok
}
