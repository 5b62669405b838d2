//! File Merkle Tree Fingerprinting
//!
//! Builds a binary-style hash tree over fixed-size blocks of a file and
//! folds it to a single root digest, the file's content fingerprint. Two
//! files differing anywhere produce different roots with overwhelming
//! probability.

pub mod hasher;
pub mod leaves;
pub mod reduce;

use crate::error::HashError;
use crate::io::BlockFile;
use crate::types::{Digest, BLOCK_SIZE, DIGEST_LEN};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Compute the root digest of the file at `path`.
///
/// The caller is expected to have validated `path` as an existing, readable,
/// non-directory file; failures here surface as per-file fatal errors.
#[instrument(skip_all, fields(file = %path.display()))]
pub fn hash_file(path: &Path) -> Result<Digest, HashError> {
    hash_file_with_block_size(path, BLOCK_SIZE)
}

/// Compute the root digest of the file at `path` with an explicit block size.
///
/// `block_size` must exceed one digest length or a reduction pass cannot
/// shrink the sequence.
pub fn hash_file_with_block_size(path: &Path, block_size: usize) -> Result<Digest, HashError> {
    debug_assert!(block_size > DIGEST_LEN);
    let start = Instant::now();

    let file = BlockFile::open(path)?;
    let size = file.size();
    let leaves = leaves::compute_leaves(&file, block_size)?;
    // The reduction never touches the file; release the handle first.
    drop(file);
    debug!(size, leaves = leaves.len(), "leaf digests complete");

    let root = reduce::reduce_to_root(leaves, block_size)?;
    info!(
        size,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "file fingerprinted"
    );
    Ok(root)
}
