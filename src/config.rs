//! Configuration for LocalKV
//!
//! Centralized configuration with sensible defaults.

use std::env;
use std::path::PathBuf;

/// Upper bound on the data file size, matching browser storage quotas
pub const DEFAULT_CAPACITY_LIMIT: u64 = 10 * 1024 * 1024;

/// Main configuration for a LocalKV store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Layout Configuration
    // -------------------------------------------------------------------------
    /// Root directory under which every namespace gets its own directory
    /// Internal structure:
    ///   {root_dir}/
    ///     └── {namespace}/
    ///           ├── storage        (data file)
    ///           └── storage.map    (side-car index)
    pub root_dir: PathBuf,

    /// File name of the data file inside a namespace directory
    pub data_file_name: String,

    /// Suffix appended to the data file path to form the index file path
    pub index_suffix: String,

    // -------------------------------------------------------------------------
    // Limits
    // -------------------------------------------------------------------------
    /// Max size of the data file (in bytes) that a write may produce
    pub capacity_limit: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            data_file_name: "storage".to_string(),
            index_suffix: ".map".to_string(),
            capacity_limit: DEFAULT_CAPACITY_LIMIT, // 10 MiB
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// `$HOME/.localkv/storage/localstorage`, or `./localkv_data` without a home
fn default_root_dir() -> PathBuf {
    match env::var_os("HOME").or_else(|| env::var_os("USERPROFILE")) {
        Some(home) => PathBuf::from(home)
            .join(".localkv")
            .join("storage")
            .join("localstorage"),
        None => PathBuf::from("./localkv_data"),
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the root directory (parent of all namespaces)
    pub fn root_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.root_dir = path.into();
        self
    }

    /// Set the data file name
    pub fn data_file_name(mut self, name: impl Into<String>) -> Self {
        self.config.data_file_name = name.into();
        self
    }

    /// Set the index file suffix
    pub fn index_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.index_suffix = suffix.into();
        self
    }

    /// Set the capacity limit (in bytes)
    pub fn capacity_limit(mut self, bytes: u64) -> Self {
        self.config.capacity_limit = bytes;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
