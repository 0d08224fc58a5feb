//! Namespace resolution
//!
//! Maps a namespace identifier to its pair of backing files and makes sure
//! they exist on disk.

use std::fs::{self, OpenOptions};
use std::path::{Component, Path, PathBuf};

use crate::config::Config;
use crate::error::{Result, StorageError};

/// Backing file locations for one namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespacePaths {
    /// `{root_dir}/{namespace}`
    pub dir: PathBuf,

    /// `{dir}/{data_file_name}`
    pub data_file: PathBuf,

    /// `{data_file}{index_suffix}`
    pub index_file: PathBuf,
}

impl NamespacePaths {
    /// Compute the paths for `namespace` under `config.root_dir`
    ///
    /// The namespace must be a single normal path component, so one store
    /// can never reach into another namespace's directory.
    pub fn resolve(config: &Config, namespace: &str) -> Result<Self> {
        Self::validate(namespace)?;

        let dir = config.root_dir.join(namespace);
        let data_file = dir.join(&config.data_file_name);

        let mut index_name = data_file.as_os_str().to_owned();
        index_name.push(&config.index_suffix);
        let index_file = PathBuf::from(index_name);

        Ok(Self {
            dir,
            data_file,
            index_file,
        })
    }

    /// Create the namespace directory and both files (empty) if missing
    pub fn ensure(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        Self::touch(&self.data_file)?;
        Self::touch(&self.index_file)?;
        Ok(())
    }

    fn touch(path: &Path) -> Result<()> {
        OpenOptions::new().create(true).append(true).open(path)?;
        Ok(())
    }

    fn validate(namespace: &str) -> Result<()> {
        if namespace.is_empty() {
            return Err(StorageError::InvalidNamespace(
                "namespace must not be empty".to_string(),
            ));
        }

        let mut components = Path::new(namespace).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(c)), None) if c == namespace => Ok(()),
            _ => Err(StorageError::InvalidNamespace(format!(
                "{:?} must be a single directory name",
                namespace
            ))),
        }
    }
}
