//! Digest computation using BLAKE2b-256

use crate::types::Digest;
use blake2::digest::consts::U32;
use blake2::Blake2b;
use blake2::Digest as _;

/// BLAKE2b keyed to a 256-bit output.
type Blake2b256 = Blake2b<U32>;

/// Compute the digest of a byte slice.
///
/// Every call uses a fresh hasher instance: hash computations are single-use
/// accumulators and are never shared across workers.
pub fn compute_digest(data: &[u8]) -> Digest {
    Blake2b256::digest(data).into()
}
