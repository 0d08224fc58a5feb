//! Storage Module
//!
//! The browser-style storage interface and its implementations.
//!
//! ## Implementations
//! - [`LocalStorage`]: persistent, one data file + one side-car index per
//!   namespace
//! - [`SessionStorage`]: in-memory, gone when dropped
//!
//! Both behave identically for get/set/remove/clear: reading a missing key
//! yields `None`, removing a missing key is a no-op.

mod local;
mod session;

pub use local::LocalStorage;
pub use session::SessionStorage;

use crate::error::Result;

/// Common capability contract of every storage variant
pub trait Storage {
    /// All live keys, in a deterministic order
    fn keys(&self) -> Vec<String>;

    /// Look up a value. A missing key is `Ok(None)`, not an error.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Insert or replace a value
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a value. A missing key is a no-op.
    fn remove_item(&mut self, key: &str) -> Result<()>;

    /// Remove every value
    fn clear(&mut self) -> Result<()>;

    /// Number of live keys
    fn length(&self) -> usize {
        self.keys().len()
    }

    /// Render the contents as `Storage {k1: "v1", k2: "v2", length: 2}`
    fn describe(&self) -> Result<String> {
        let mut parts = Vec::new();
        for key in self.keys() {
            let value = self.get_item(&key)?.unwrap_or_default();
            parts.push(format!("{}: {:?}", key, value));
        }
        parts.push(format!("length: {}", self.length()));

        Ok(format!("Storage {{{}}}", parts.join(", ")))
    }
}
