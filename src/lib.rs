//! # LocalKV
//!
//! A small persistent key-value store with a browser-style storage API:
//! - String keys to string values, enumerable keys, length, clear
//! - Values concatenated in one flat data file
//! - A side-car JSON index mapping each key to its byte range
//! - Compaction on removal, so the data file never holds dead bytes
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Storage (trait)                            │
//! │      keys / length / get / set / remove / clear             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────┐
//!   │LocalStorage │          │SessionStorage│
//!   │ (on disk)   │          │ (in memory)  │
//!   └──────┬──────┘          └──────────────┘
//!          │
//!    ┌─────┴──────────┬────────────────┐
//!    ▼                ▼                ▼
//! ┌────────┐    ┌───────────┐    ┌───────────┐
//! │ Index  │    │ DataFile  │◄───│ Compactor │
//! │ (.map) │    │ (storage) │    │           │
//! └────────┘    └───────────┘    └───────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod index;
pub mod data;
pub mod namespace;
pub mod storage;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StorageError, Result};
pub use config::Config;
pub use storage::{LocalStorage, SessionStorage, Storage};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of LocalKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
