//! Data File Accessor
//!
//! Raw byte-range operations on the data file. Knows nothing about keys.
//! Every call opens the file, does its work, and closes it again; no handle
//! is held between calls.

use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, StorageError};
use crate::index::ByteRange;

/// Accessor for one data file on disk
#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    /// Bind an accessor to `path`. No I/O happens until an operation runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current file length in bytes (0 if the file does not exist yet)
    pub fn len(&self) -> Result<u64> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Read exactly `range.length` bytes at `range.start`
    ///
    /// Fails with an I/O error (`UnexpectedEof`) when the file is shorter
    /// than `range.end()`, which means the index and file have diverged.
    /// The bound is checked before any buffer is allocated.
    pub fn read_bytes(&self, range: ByteRange) -> Result<Vec<u8>> {
        let mut file = File::open(&self.path)?;
        let file_len = file.metadata()?.len();

        match range.end() {
            Some(end) if end <= file_len => {}
            _ => {
                return Err(io::Error::new(
                    ErrorKind::UnexpectedEof,
                    format!(
                        "range start {} length {} runs past end of data file ({} bytes)",
                        range.start, range.length, file_len
                    ),
                )
                .into())
            }
        }

        file.seek(SeekFrom::Start(range.start))?;

        let mut buf = vec![0u8; range.length as usize];
        file.read_exact(&mut buf)?;

        Ok(buf)
    }

    /// Read a range and decode it as UTF-8 text
    pub fn read_range(&self, range: ByteRange) -> Result<String> {
        let bytes = self.read_bytes(range)?;
        String::from_utf8(bytes).map_err(|e| {
            StorageError::Corruption(format!(
                "bytes at start {} length {} are not valid UTF-8: {}",
                range.start, range.length, e
            ))
        })
    }

    /// Append `bytes` at the end of the file, returning where they landed
    pub fn append(&self, bytes: &[u8]) -> Result<ByteRange> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&self.path)?;

        let start = file.seek(SeekFrom::End(0))?;
        file.write_all(bytes)?;
        file.flush()?;

        Ok(ByteRange::new(start, bytes.len() as u64))
    }

    /// Remove `range` from the file, shifting everything after it left
    ///
    /// This is a full rewrite of the file, O(file size). Returns the new
    /// file length.
    pub fn excise(&self, range: ByteRange) -> Result<u64> {
        let bytes = fs::read(&self.path)?;
        let file_len = bytes.len() as u64;

        let end = match range.end() {
            Some(end) if end <= file_len => end as usize,
            _ => {
                return Err(StorageError::Corruption(format!(
                    "range start {} length {} extends past end of data file ({} bytes)",
                    range.start, range.length, file_len
                )))
            }
        };
        let start = range.start as usize;

        let mut kept = Vec::with_capacity(bytes.len() - (end - start));
        kept.extend_from_slice(&bytes[..start]);
        kept.extend_from_slice(&bytes[end..]);

        fs::write(&self.path, &kept)?;

        Ok(kept.len() as u64)
    }

    /// Drop every byte in the file
    pub fn truncate(&self) -> Result<()> {
        File::create(&self.path)?;
        Ok(())
    }
}
