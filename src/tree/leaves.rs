//! Leaf digest production: one digest per fixed-size file block.

use crate::concurrency;
use crate::error::HashError;
use crate::io::BlockFile;
use crate::tree::hasher;
use crate::types::{Digest, DIGEST_LEN};
use std::thread;
use tracing::{debug, trace};

/// Number of blocks for a file of `size` bytes.
///
/// A minimum of one, so an empty file still yields a single (zero-length)
/// block.
pub fn block_count(size: u64, block_size: usize) -> usize {
    (size.div_ceil(block_size as u64) as usize).max(1)
}

/// Compute the ordered leaf digest sequence for `file`.
///
/// Entry `i` is the digest of the block at byte offset `i * block_size`.
/// Single-block files are hashed on the calling thread; larger files are
/// statically partitioned into contiguous index ranges across a bounded pool
/// of scoped worker threads. Each worker reuses one read buffer and writes
/// into its own disjoint range of the pre-sized output, so sequence order
/// matches block index order regardless of completion order.
///
/// The caller blocks until every worker completes. The first worker error
/// aborts the whole file; partially filled slots are discarded.
pub fn compute_leaves(file: &BlockFile, block_size: usize) -> Result<Vec<Digest>, HashError> {
    let blocks = block_count(file.size(), block_size);
    let mut digests = vec![[0u8; DIGEST_LEN]; blocks];

    // Exactly one block: no pool overhead for small inputs.
    if file.size() < block_size as u64 {
        let mut buffer = vec![0u8; block_size];
        hash_block(file, 0, block_size, &mut buffer, &mut digests[0])?;
        return Ok(digests);
    }

    let workers = concurrency::worker_count(blocks);
    let per_worker = blocks.div_ceil(workers);
    debug!(blocks, workers, "computing leaf digests");

    let mut outcomes: Vec<Result<(), HashError>> = Vec::with_capacity(workers);
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(workers);
        for (worker, slots) in digests.chunks_mut(per_worker).enumerate() {
            let base = worker * per_worker;
            handles.push(scope.spawn(move || {
                let mut buffer = vec![0u8; block_size];
                for (k, slot) in slots.iter_mut().enumerate() {
                    hash_block(file, base + k, block_size, &mut buffer, slot)?;
                }
                Ok(())
            }));
        }
        for handle in handles {
            match handle.join() {
                Ok(outcome) => outcomes.push(outcome),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
    });
    for outcome in outcomes {
        outcome?;
    }

    Ok(digests)
}

/// Hash block `index` of `file` into `slot`, reusing `buffer` for the read.
fn hash_block(
    file: &BlockFile,
    index: usize,
    block_size: usize,
    buffer: &mut [u8],
    slot: &mut Digest,
) -> Result<(), HashError> {
    let offset = index as u64 * block_size as u64;
    let nbytes = file.read_block(offset, buffer)?;
    *slot = hasher::compute_digest(&buffer[..nbytes]);
    trace!(index, nbytes, "hashed block");
    Ok(())
}
