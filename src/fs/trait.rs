//! FileSystem trait definition

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A directory entry returned by `read_dir`.
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.name
    }
}

/// Read-only view of the filesystem used by detection.
///
/// Callers treat every failure as "no signal": a probe that errors is
/// indistinguishable from a path that does not exist. No method walks
/// directories recursively.
pub trait FileSystem: Send + Sync {
    /// Check whether the exact path is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Check whether the exact path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Read a file's contents as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// List a directory's immediate entries (one level, no recursion).
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;
}
