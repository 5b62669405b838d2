//! Root digest scenario tests
//!
//! Exercises the full pipeline from file bytes to root digest, including the
//! block-size boundaries where reduction folding starts.

use super::test_utils::{patterned, write_file};
use htree::tree::{hash_file, hash_file_with_block_size, hasher};
use tempfile::TempDir;

/// An empty file yields one leaf equal to the digest of the empty byte
/// sequence, and the root equals that same digest.
#[test]
fn test_empty_file_root_is_empty_digest() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "empty", b"");

    let root = hash_file(&path).unwrap();
    assert_eq!(root, hasher::compute_digest(b""));
}

/// Files smaller than one block never fold: root == digest of the content.
#[test]
fn test_single_block_root_equals_content_digest() {
    let dir = TempDir::new().unwrap();
    for size in [1usize, 100, 4096, 100_000] {
        let content = patterned(size);
        let path = write_file(&dir, &format!("f{size}"), &content);

        let root = hash_file(&path).unwrap();
        assert_eq!(root, hasher::compute_digest(&content), "size {size}");
    }
}

/// A file of exactly one block produces one leaf; root == digest of the block.
#[test]
fn test_exact_block_size_boundary() {
    let dir = TempDir::new().unwrap();
    let block_size = 4096;
    let content = patterned(block_size);
    let path = write_file(&dir, "exact", &content);

    let root = hash_file_with_block_size(&path, block_size).unwrap();
    assert_eq!(root, hasher::compute_digest(&content));
}

/// One byte past the block size produces two leaves, folded into a root
/// computed from the 64-byte concatenation of the two leaf digests.
#[test]
fn test_block_size_plus_one_folds_two_leaves() {
    let dir = TempDir::new().unwrap();
    let block_size = 4096;
    let content = patterned(block_size + 1);
    let path = write_file(&dir, "plus-one", &content);

    let leaf0 = hasher::compute_digest(&content[..block_size]);
    let leaf1 = hasher::compute_digest(&content[block_size..]);
    let expected = hasher::compute_digest(&[leaf0, leaf1].concat());

    let root = hash_file_with_block_size(&path, block_size).unwrap();
    assert_eq!(root, expected);
}

/// Three full blocks with distinct content: the 96 packed bytes fit one
/// chunk, so a single reduction pass hashes the concatenation of the three
/// leaves directly into the root.
#[test]
fn test_three_blocks_single_reduction_pass() {
    let dir = TempDir::new().unwrap();
    let block_size = 96;
    let mut content = Vec::new();
    content.extend(vec![0xAAu8; block_size]);
    content.extend(vec![0xBBu8; block_size]);
    content.extend(vec![0xCCu8; block_size]);
    let path = write_file(&dir, "three", &content);

    let leaves: Vec<_> = content
        .chunks(block_size)
        .map(hasher::compute_digest)
        .collect();
    assert_eq!(leaves.len(), 3);
    let expected = hasher::compute_digest(&leaves.concat());

    let root = hash_file_with_block_size(&path, block_size).unwrap();
    assert_eq!(root, expected);
}

/// Hashing the same file twice yields the same root regardless of worker
/// scheduling.
#[test]
fn test_root_is_deterministic_across_runs() {
    let dir = TempDir::new().unwrap();
    // Enough blocks to spread across all workers.
    let content = patterned(64 * 1024);
    let path = write_file(&dir, "many-blocks", &content);

    let first = hash_file_with_block_size(&path, 512).unwrap();
    for _ in 0..5 {
        assert_eq!(hash_file_with_block_size(&path, 512).unwrap(), first);
    }
}

/// Hashing a missing path fails with an open error rather than panicking.
#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(hash_file(&dir.path().join("missing")).is_err());
}
