//! CLI output: digest line formatting.

use crate::types::Digest;
use serde_json::json;
use std::path::Path;

/// Render a root digest as `<hex> <filename>`: 64 lowercase hex characters,
/// one space, then the filename as given on the command line.
pub fn format_digest_line(digest: &Digest, file: &Path) -> String {
    format!("{} {}", hex::encode(digest), file.display())
}

/// Render a root digest as a single-line JSON object.
pub fn format_digest_json(digest: &Digest, file: &Path) -> String {
    json!({
        "digest": hex::encode(digest),
        "file": file.display().to_string(),
    })
    .to_string()
}
