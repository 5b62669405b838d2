//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `content` to a file named `name` inside `dir` and return its path.
pub fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Deterministic pseudo-random content of the given length.
pub fn patterned(len: usize) -> Vec<u8> {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 33) as u8
        })
        .collect()
}
