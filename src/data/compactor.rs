//! Compactor
//!
//! Physically removes a deleted value's bytes from the data file and
//! moves every later range left by the removed length.
//!
//! Given a removed range `R = [s, s + len)` over a file of length `F`:
//! - new file = `bytes[0, s) ++ bytes[s + len, F)`
//! - each surviving range with `start > s` becomes `start - len`
//!
//! Each adjustment depends only on the range's own start relative to `R`,
//! so the order ranges are visited in does not matter.

use crate::error::{Result, StorageError};
use crate::index::{ByteRange, Index};

use super::DataFile;

/// Outcome of removing one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compaction {
    /// The range that was cut out of the data file
    pub removed: ByteRange,

    /// Number of surviving ranges whose start moved
    pub shifted: usize,

    /// Data file length before the cut
    pub file_len_before: u64,

    /// Data file length after the cut
    pub file_len_after: u64,
}

/// Range deletion + offset shifting
pub struct Compactor;

impl Compactor {
    /// Remove `key`'s bytes from `data` and its entry from `index`
    ///
    /// Returns `Ok(None)` if the key is not present. The index is only
    /// touched after the data file rewrite succeeds; persisting it is the
    /// caller's job.
    pub fn remove(data: &DataFile, index: &mut Index, key: &str) -> Result<Option<Compaction>> {
        let removed = match index.get(key) {
            Some(range) => range,
            None => return Ok(None),
        };

        // Refuse to touch the file if the survivors are already inconsistent
        Self::check_disjoint(index, key, removed)?;

        let file_len_before = data.len()?;
        let file_len_after = data.excise(removed)?;

        index.remove(key);
        let shifted = Self::shift_ranges(index, removed);

        tracing::debug!(
            key,
            start = removed.start,
            length = removed.length,
            shifted,
            file_len_after,
            "compacted"
        );

        Ok(Some(Compaction {
            removed,
            shifted,
            file_len_before,
            file_len_after,
        }))
    }

    /// Move every range that starts after `removed.start` left by
    /// `removed.length`. Returns how many ranges moved.
    ///
    /// `index` must no longer contain the removed key.
    pub fn shift_ranges(index: &mut Index, removed: ByteRange) -> usize {
        if removed.is_empty() {
            return 0;
        }

        let mut shifted = 0;
        for (_, range) in index.ranges_mut() {
            if range.start > removed.start {
                range.start -= removed.length;
                shifted += 1;
            }
        }
        shifted
    }

    /// Fail if any surviving range starts strictly inside `removed`
    ///
    /// Such a range would overlap the removed one, which the index never
    /// produces on its own.
    pub fn check_disjoint(index: &Index, removed_key: &str, removed: ByteRange) -> Result<()> {
        let overlapping = index
            .iter()
            .find(|(key, range)| *key != removed_key && removed.strictly_contains(range.start));

        match overlapping {
            Some((key, range)) => Err(StorageError::Corruption(format!(
                "range of {:?} (start {}, length {}) overlaps removed range of {:?} (start {}, length {})",
                key,
                range.start,
                range.length,
                removed_key,
                removed.start,
                removed.length
            ))),
            None => Ok(()),
        }
    }
}
