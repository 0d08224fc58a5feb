//! Index Module
//!
//! Maps each key to the byte range holding its value in the data file.
//!
//! ## Responsibilities
//! - Hold the key → range mapping in memory for the lifetime of a store
//! - Load the side-car index file on open (self-healing when unreadable)
//! - Rewrite the side-car file after every mutation
//!
//! ## File Format
//! The side-car file is a JSON object, one member per live key:
//! ```text
//! {"foo":{"start":0,"length":3},"hello":{"start":3,"length":5}}
//! ```
//! An empty store is written as `{}`.

mod range;
mod table;

pub use range::ByteRange;
pub use table::Index;
