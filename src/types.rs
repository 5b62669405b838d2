//! Shared type and constant definitions.

/// Number of bytes in a digest (256-bit BLAKE2b output).
pub const DIGEST_LEN: usize = 32;

/// A 256-bit content digest. Compared and stored only by value.
pub type Digest = [u8; DIGEST_LEN];

/// Size in bytes of one file block (16 MiB).
///
/// Compiled in, not runtime-configurable. Changing this changes every
/// produced root.
pub const BLOCK_SIZE: usize = 1 << 24;
