use std::fs;
use std::path::Path;

/// Aggregated outcome of a deletion pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeletionReport {
    pub deleted: usize,
    pub failed: usize,
}

/// Trait for removing a confirmed selection of files
pub trait Deleter {
    /// Remove `dir/name` for each name in `names`.
    ///
    /// A failed removal is printed and counted, then processing continues
    /// with the remaining names. No rollback, no retry.
    fn delete(&self, dir: &Path, names: &[String]) -> DeletionReport;
}

pub struct FsDeleter;

impl Deleter for FsDeleter {
    fn delete(&self, dir: &Path, names: &[String]) -> DeletionReport {
        let mut report = DeletionReport::default();

        for name in names {
            let path = dir.join(name);
            match fs::remove_file(&path) {
                Ok(()) => {
                    log::debug!("deleted '{}'", path.display());
                    report.deleted += 1;
                }
                Err(err) => {
                    println!("Error deleting file {name}: {err}");
                    report.failed += 1;
                }
            }
        }

        report
    }
}
