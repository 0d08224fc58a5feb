//! Persistent storage
//!
//! Coordinates the index, the data file and the compactor for one
//! namespace.
//!
//! ## Operation flow
//! - Reads: index lookup → range read
//! - Writes: index lookup → data file operation → index update → index persist

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::data::{Compactor, DataFile};
use crate::error::{Result, StorageError};
use crate::index::{ByteRange, Index};
use crate::namespace::NamespacePaths;

use super::Storage;

/// File-backed storage for one namespace
///
/// ## Concurrency Model
/// None. Every operation runs to completion before returning and no file
/// handle is held between calls. Mutations take `&mut self`, so one handle
/// cannot be written from two places at once; two handles (or processes)
/// over the same namespace are unsupported.
///
/// ## Consistency
/// The data file is written before the index is persisted. A failure in
/// between leaves the two out of sync; nothing rolls back.
pub struct LocalStorage {
    /// Key → range table, loaded at open and owned exclusively
    index: Index,

    /// Accessor for the data file
    data: DataFile,

    /// Side-car index file path
    index_path: PathBuf,

    /// Max data file size a write may produce
    capacity_limit: u64,
}

impl LocalStorage {
    /// Open or create the store for `namespace`
    ///
    /// On open:
    /// 1. Resolve `{root_dir}/{namespace}/` and its two files
    /// 2. Create the directory and empty files if missing
    /// 3. Load the index (resetting it if unreadable)
    pub fn open(config: &Config, namespace: &str) -> Result<Self> {
        let paths = NamespacePaths::resolve(config, namespace)?;
        paths.ensure()?;

        tracing::info!(
            namespace,
            dir = %paths.dir.display(),
            "opening local storage"
        );

        Self::open_paths(&paths, config.capacity_limit)
    }

    /// Open with a root directory (convenience method)
    ///
    /// Uses default config with the specified root directory
    pub fn open_in(root_dir: &Path, namespace: &str) -> Result<Self> {
        let config = Config::builder().root_dir(root_dir).build();
        Self::open(&config, namespace)
    }

    /// Open over already-resolved paths
    ///
    /// Does not create the data file; it is created on first append.
    pub fn open_paths(paths: &NamespacePaths, capacity_limit: u64) -> Result<Self> {
        let index = Index::load(&paths.index_file)?;

        Ok(Self {
            index,
            data: DataFile::new(&paths.data_file),
            index_path: paths.index_file.clone(),
            capacity_limit,
        })
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the data file path
    pub fn data_path(&self) -> &Path {
        self.data.path()
    }

    /// Get the index file path
    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    /// Get the current data file length
    pub fn data_len(&self) -> Result<u64> {
        self.data.len()
    }

    /// Get the capacity limit
    pub fn capacity_limit(&self) -> u64 {
        self.capacity_limit
    }

    /// Get the range recorded for `key`
    pub fn range_of(&self, key: &str) -> Option<ByteRange> {
        self.index.get(key)
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Reject a write of `incoming` bytes that would push the file past the cap
    fn check_capacity(&self, incoming: u64) -> Result<()> {
        let current = self.data.len()?;
        if current + incoming > self.capacity_limit {
            return Err(StorageError::CapacityExceeded {
                current,
                incoming,
                limit: self.capacity_limit,
            });
        }
        Ok(())
    }

    fn persist_index(&self) -> Result<()> {
        self.index.persist(&self.index_path)
    }
}

impl Storage for LocalStorage {
    fn keys(&self) -> Vec<String> {
        self.index.keys()
    }

    fn length(&self) -> usize {
        self.index.len()
    }

    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match self.index.get(key) {
            Some(range) => self.data.read_range(range).map(Some),
            None => Ok(None),
        }
    }

    /// Put a key-value pair
    ///
    /// Steps:
    /// 1. Check the capacity cap against the current file length
    /// 2. If the key exists, remove it fully (compaction included)
    /// 3. Append the value to the end of the data file
    /// 4. Record the new range and persist the index
    ///
    /// An update therefore always moves the value to the end of the file.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let bytes = value.as_bytes();

        // Step 1: No mutation at all if the cap would be exceeded
        self.check_capacity(bytes.len() as u64)?;

        // Step 2: Drop the old value and close its gap
        if self.index.contains_key(key) {
            self.remove_item(key)?;
        }

        // Step 3: Append as a fresh key
        let range = self.data.append(bytes)?;

        // Step 4: Record and persist
        self.index.insert(key, range);
        self.persist_index()?;

        tracing::debug!(key, start = range.start, length = range.length, "set item");

        Ok(())
    }

    /// Remove a key
    ///
    /// Excises its bytes, shifts later ranges left, drops the key and
    /// persists the index.
    fn remove_item(&mut self, key: &str) -> Result<()> {
        let compaction = match Compactor::remove(&self.data, &mut self.index, key)? {
            Some(compaction) => compaction,
            None => return Ok(()),
        };

        self.persist_index()?;

        tracing::debug!(key, shifted = compaction.shifted, "removed item");

        Ok(())
    }

    /// Truncate the data file and persist an empty index in one pass
    fn clear(&mut self) -> Result<()> {
        let count = self.index.len();

        self.data.truncate()?;
        self.index.clear();
        self.persist_index()?;

        tracing::debug!(count, "cleared storage");

        Ok(())
    }
}
