//! Read-only positional file access for block hashing.

use crate::error::HashError;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// An open read-only file plus its total size in bytes.
///
/// Owned exclusively by the hashing operation for one file. Positional reads
/// carry no shared cursor state, so multiple workers can read concurrently
/// through a shared reference.
#[derive(Debug)]
pub struct BlockFile {
    file: File,
    size: u64,
    path: PathBuf,
}

impl BlockFile {
    /// Open `path` read-only and query its size.
    pub fn open(path: &Path) -> Result<Self, HashError> {
        let file = File::open(path).map_err(|source| HashError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let size = file
            .metadata()
            .map_err(|source| HashError::Metadata {
                path: path.to_path_buf(),
                source,
            })?
            .len();
        Ok(Self {
            file,
            size,
            path: path.to_path_buf(),
        })
    }

    /// Total file size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Read into `buf` starting at byte `offset`, returning the count filled.
    ///
    /// Interrupted and would-block conditions are retried in place and never
    /// surfaced. Short positional reads are continued until the buffer is
    /// full or end of file, so a short count is only returned at end of file.
    pub fn read_block(&self, offset: u64, buf: &mut [u8]) -> Result<usize, HashError> {
        let mut filled = 0;
        while filled < buf.len() {
            match read_at(&self.file, offset + filled as u64, &mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e)
                    if e.kind() == ErrorKind::Interrupted
                        || e.kind() == ErrorKind::WouldBlock =>
                {
                    continue;
                }
                Err(source) => {
                    return Err(HashError::Read {
                        path: self.path.clone(),
                        offset: offset + filled as u64,
                        source,
                    });
                }
            }
        }
        Ok(filled)
    }
}

#[cfg(unix)]
fn read_at(file: &File, offset: u64, buf: &mut [u8]) -> std::io::Result<usize> {
    use std::os::unix::fs::FileExt;
    file.read_at(buf, offset)
}

#[cfg(windows)]
fn read_at(file: &File, offset: u64, buf: &mut [u8]) -> std::io::Result<usize> {
    use std::os::windows::fs::FileExt;
    file.seek_read(buf, offset)
}
