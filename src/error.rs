//! Error types for LocalKV
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using StorageError
pub type Result<T> = std::result::Result<T, StorageError>;

/// Unified error type for LocalKV operations
#[derive(Debug, Error)]
pub enum StorageError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Capacity Errors
    // -------------------------------------------------------------------------
    #[error("Capacity exceeded: {current} bytes stored + {incoming} bytes incoming > {limit} byte limit")]
    CapacityExceeded {
        current: u64,
        incoming: u64,
        limit: u64,
    },

    // -------------------------------------------------------------------------
    // Index Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage corruption detected: {0}")]
    Corruption(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Invalid namespace: {0}")]
    InvalidNamespace(String),
}
