//! Tree reduction: fold a digest sequence into a single root.

use crate::error::HashError;
use crate::tree::hasher;
use crate::types::{Digest, DIGEST_LEN};
use std::mem;
use tracing::trace;

/// Fold `digests` until a single root digest remains.
///
/// Each pass views the current sequence as one contiguous byte buffer and
/// hashes consecutive `block_size` chunks of it, in index order, into the
/// next sequence. The two sequences are owned buffers swapped each pass, so
/// the fold runs iteratively with no recursion.
///
/// A length-1 sequence is terminal and returned unchanged, so a single-block
/// file's root equals its only leaf digest. The reduction performs no I/O;
/// terminating with other than exactly one digest is an internal defect.
pub fn reduce_to_root(mut digests: Vec<Digest>, block_size: usize) -> Result<Digest, HashError> {
    debug_assert!(block_size > DIGEST_LEN);

    let mut next: Vec<Digest> = Vec::new();
    while digests.len() > 1 {
        let total_bytes = digests.len() * DIGEST_LEN;
        next.clear();
        next.reserve(total_bytes.div_ceil(block_size));
        for chunk in digests.as_flattened().chunks(block_size) {
            next.push(hasher::compute_digest(chunk));
        }
        trace!(from = digests.len(), to = next.len(), "reduction pass");
        mem::swap(&mut digests, &mut next);
    }

    match digests.as_slice() {
        [root] => Ok(*root),
        other => Err(HashError::InvalidRootCount(other.len())),
    }
}
