//! Error types for the file fingerprinting pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while hashing a single file.
///
/// Each file's pipeline is independent; a `HashError` aborts that file only.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to query size of {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read error in {} at offset {offset}: {source}", path.display())]
    Read {
        path: PathBuf,
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    /// Internal defect: the reduction terminated with other than one digest.
    /// Never a user error; must not be coerced into a result.
    #[error("invalid tree root count: {0}")]
    InvalidRootCount(usize),
}

/// Precondition failures detected before the hashing core runs.
#[derive(Debug, Error)]
pub enum PrecheckError {
    #[error("file {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("file {} is not readable: {}", .0.display(), .1)]
    NotReadable(PathBuf, #[source] std::io::Error),

    #[error("{} is a directory", .0.display())]
    IsDirectory(PathBuf),
}

/// Logging configuration errors.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("invalid log format: {0} (must be 'json' or 'text')")]
    InvalidFormat(String),
}
