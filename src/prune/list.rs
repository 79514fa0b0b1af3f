use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Trait for snapshotting the eligible file set of a directory
pub trait Lister {
    /// Return the names of entries directly inside `dir` that are regular
    /// files. Non-recursive; symlinks and subdirectories are excluded.
    fn list(&self, dir: &Path) -> Result<Vec<String>>;
}

pub struct FsLister;

impl Lister for FsLister {
    fn list(&self, dir: &Path) -> Result<Vec<String>> {
        let entries = fs::read_dir(dir).map_err(|source| Error::ListDirectoryFailed {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| Error::ListDirectoryFailed {
                path: dir.to_path_buf(),
                source,
            })?;
            // file_type() does not follow symlinks, so a symlink to a
            // regular file is not eligible.
            let file_type = entry.file_type().map_err(|source| Error::ListDirectoryFailed {
                path: dir.to_path_buf(),
                source,
            })?;
            if file_type.is_file() {
                files.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        log::debug!(
            "listed {} eligible file(s) under '{}'",
            files.len(),
            dir.display()
        );
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_only_regular_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.png"), b"a").unwrap();
        fs::write(dir.path().join("b.png"), b"b").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("nested.png"), b"n").unwrap();

        let mut files = FsLister.list(dir.path()).unwrap();
        files.sort();

        assert_eq!(files, vec!["a.png".to_string(), "b.png".to_string()]);
    }

    #[test]
    fn empty_directory_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FsLister.list(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_fails_with_list_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");

        let err = FsLister.list(&missing).unwrap_err();
        assert!(matches!(err, Error::ListDirectoryFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_eligible() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("real.png");
        fs::write(&target, b"r").unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("link.png")).unwrap();

        let files = FsLister.list(dir.path()).unwrap();
        assert_eq!(files, vec!["real.png".to_string()]);
    }

    #[test]
    fn hidden_files_are_eligible() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".hidden"), b"h").unwrap();

        let files = FsLister.list(dir.path()).unwrap();
        assert_eq!(files, vec![".hidden".to_string()]);
    }
}
