use std::path::Path;

use crate::domain::AppError;

/// Port for the filesystem operations a build needs.
pub trait BuildFilesystem {
    /// Remove a file or directory tree if it exists.
    ///
    /// Returns `true` when something was removed, `false` when nothing was there.
    fn remove_if_present(&self, path: &Path) -> Result<bool, AppError>;

    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;
}
