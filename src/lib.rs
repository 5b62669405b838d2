//! htree: Parallel Merkle Tree File Fingerprinting
//!
//! Computes a single fixed-size content fingerprint for a file by hashing
//! fixed-size blocks concurrently and folding the resulting digests upward
//! until one root digest remains.

pub mod cli;
pub mod concurrency;
pub mod error;
pub mod io;
pub mod logging;
pub mod tree;
pub mod types;
