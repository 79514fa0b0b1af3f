use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

mod delete;
mod list;
pub mod sample;

pub use self::delete::DeletionReport;
use self::delete::{Deleter, FsDeleter};
use self::list::{FsLister, Lister};

/// Single-directory pruning client over the local filesystem.
///
/// Holds a validated target directory; listing and deletion are delegated
/// to the operation modules.
#[derive(Debug)]
pub struct Pruner {
    root: PathBuf,
}

impl Pruner {
    /// Validate the target path and build a pruner for it.
    ///
    /// Fails when the path does not exist or is not a directory. Performs
    /// no other filesystem access.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::NotADirectory { path: root });
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Snapshot the names of regular files directly inside the directory.
    pub fn list_files(&self) -> Result<Vec<String>> {
        FsLister.list(&self.root)
    }

    /// Remove each named file, continuing past individual failures.
    pub fn delete_files(&self, names: &[String]) -> DeletionReport {
        FsDeleter.delete(&self.root, names)
    }
}
