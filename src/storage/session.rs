//! In-memory storage
//!
//! Same interface as the persistent store with no files behind it.

use std::collections::BTreeMap;

use crate::error::Result;

use super::Storage;

/// Non-persistent storage backed by a BTreeMap
#[derive(Debug, Clone, Default)]
pub struct SessionStorage {
    entries: BTreeMap<String, String>,
}

impl SessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for SessionStorage {
    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }

    fn length(&self) -> usize {
        self.entries.len()
    }
}
