//! Save-file storage for tick
//!
//! The whole task list lives in one UTF-8 text file that is rewritten in
//! full on every mutation. `Storage` is the capability the task list
//! consumes; `FileStorage` is the only implementation shipped, tests
//! substitute in-memory ones.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Backing store for the encoded task list.
///
/// Every write replaces the entire blob; there are no partial or append
/// writes.
pub trait Storage {
    /// Whether the backing location already holds a blob
    fn exists(&self) -> Result<bool>;

    /// Create an empty blob; an already existing one is not an error
    fn create(&self) -> Result<()>;

    /// Read the entire blob
    fn read_all(&self) -> Result<String>;

    /// Replace the entire blob
    fn write_all(&self, data: &str) -> Result<()>;
}

/// File-backed storage for the save file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the save file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn exists(&self) -> Result<bool> {
        Ok(self.path.exists())
    }

    fn create(&self) -> Result<()> {
        self.ensure_parent()?;
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(_) => Ok(()),
            Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn read_all(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Full replace via temp file + rename, so a failed write can never
    /// leave a truncated blob behind.
    fn write_all(&self, data: &str) -> Result<()> {
        self.ensure_parent()?;

        let temp_path = self.path.with_extension("tmp");

        let mut file = fs::File::create(&temp_path)?;
        file.write_all(data.as_bytes())?;
        file.sync_all()?;

        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}
