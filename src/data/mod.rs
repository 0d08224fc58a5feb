//! Data Module
//!
//! The flat data file and the compaction that keeps it gap-free.
//!
//! ## Responsibilities
//! - Byte-range reads, appends and full rewrites of the data file
//! - Excising a removed value's bytes and shifting later ranges left
//!
//! ## File Format
//! ```text
//! ┌───────────┬─────────────┬───────────────┬─────┐
//! │ value A   │ value B     │ value C       │ ... │
//! └───────────┴─────────────┴───────────────┴─────┘
//!  ^ start_A   ^ start_B     ^ start_C
//! ```
//! No headers, no framing. Only the index knows where a value begins and
//! ends, so the two must never diverge.

mod compactor;
mod file;

pub use compactor::{Compaction, Compactor};
pub use file::DataFile;
