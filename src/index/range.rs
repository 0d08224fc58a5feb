//! Byte range definitions

use serde::{Deserialize, Serialize};

/// A half-open region `[start, start + length)` of the data file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ByteRange {
    /// Offset of the first byte
    pub start: u64,

    /// Number of bytes
    pub length: u64,
}

impl ByteRange {
    pub fn new(start: u64, length: u64) -> Self {
        Self { start, length }
    }

    /// Offset one past the last byte, or `None` if it does not fit in a u64
    pub fn end(&self) -> Option<u64> {
        self.start.checked_add(self.length)
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether `offset` falls strictly after `start` but before `end`
    pub fn strictly_contains(&self, offset: u64) -> bool {
        offset > self.start && offset - self.start < self.length
    }
}
