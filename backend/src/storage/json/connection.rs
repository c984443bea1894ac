//! Connection handle for the JSON data directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Handle to the base data directory all JSON stores live in.
///
/// Repositories clone this cheaply and derive their file paths from it.
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a connection, creating the base directory if needed.
    pub fn new(base_directory: impl AsRef<Path>) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();
        fs::create_dir_all(&base_directory).with_context(|| {
            format!("Failed to create data directory: {:?}", base_directory)
        })?;
        Ok(Self { base_directory })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of a store file inside the data directory.
    pub fn file_path(&self, file_name: &str) -> PathBuf {
        self.base_directory.join(file_name)
    }

    /// Write a store file atomically: write to a temp file, then rename
    /// over the target so readers never observe a half-written store.
    pub fn write_atomic(&self, file_name: &str, contents: &str) -> Result<()> {
        let path = self.file_path(file_name);
        let temp_path = path.with_extension("tmp");

        fs::write(&temp_path, contents)
            .with_context(|| format!("Failed to write temp file: {:?}", temp_path))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace store file: {:?}", path))?;

        debug!("Wrote store file {:?}", path);
        Ok(())
    }
}
