//! Index implementation
//!
//! BTreeMap-backed key → range table with JSON persistence.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StorageError};

use super::ByteRange;

/// In-memory key → range table
///
/// Keys enumerate in sorted order, so `keys()` is deterministic across calls
/// and across reopen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Index {
    entries: BTreeMap<String, ByteRange>,
}

impl Index {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the index from its side-car file
    ///
    /// A missing, empty or unparsable file yields an empty index, and the
    /// file is reset to `{}` so it is never left corrupt. Other I/O failures are
    /// returned as errors.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "index file missing, starting empty");
                let index = Self::new();
                index.persist(path)?;
                return Ok(index);
            }
            Err(e) => return Err(e.into()),
        };

        // Fresh namespaces start with a 0-byte side-car
        if bytes.is_empty() {
            tracing::debug!(path = %path.display(), "index file empty, starting empty");
            let index = Self::new();
            index.persist(path)?;
            return Ok(index);
        }

        match serde_json::from_slice::<Self>(&bytes) {
            Ok(index) => {
                tracing::debug!(path = %path.display(), keys = index.len(), "index loaded");
                Ok(index)
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "index file unreadable, resetting to empty"
                );
                let index = Self::new();
                index.persist(path)?;
                Ok(index)
            }
        }
    }

    /// Rewrite the side-car file with the current mapping
    ///
    /// Writes a sibling temp file and renames it over `path`, so readers
    /// never observe a half-written index.
    pub fn persist(&self, path: &Path) -> Result<()> {
        let encoded =
            serde_json::to_vec(self).map_err(|e| StorageError::Serialization(e.to_string()))?;

        let tmp_path = Self::tmp_path(path);
        {
            let mut file = File::create(&tmp_path)?;
            file.write_all(&encoded)?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    /// All live keys, in enumeration order
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Look up the range recorded for `key`
    pub fn get(&self, key: &str) -> Option<ByteRange> {
        self.entries.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Record `range` under `key`, returning the previous range if any
    pub fn insert(&mut self, key: impl Into<String>, range: ByteRange) -> Option<ByteRange> {
        self.entries.insert(key.into(), range)
    }

    /// Drop `key`, returning its range if it was present
    pub fn remove(&mut self, key: &str) -> Option<ByteRange> {
        self.entries.remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, range)` pairs in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, ByteRange)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), *r))
    }

    /// Sum of all recorded range lengths
    pub fn live_bytes(&self) -> u64 {
        self.entries.values().map(|r| r.length).sum()
    }

    pub(crate) fn ranges_mut(&mut self) -> impl Iterator<Item = (&str, &mut ByteRange)> {
        self.entries.iter_mut().map(|(k, r)| (k.as_str(), r))
    }

    /// "storage.map" → "storage.map.tmp"
    fn tmp_path(path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
