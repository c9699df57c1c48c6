use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::BuildFilesystem;

/// Build filesystem backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalBuildFilesystem;

impl BuildFilesystem for LocalBuildFilesystem {
    fn remove_if_present(&self, path: &Path) -> Result<bool, AppError> {
        // symlink_metadata so a symlinked `dist` is unlinked rather than followed.
        let metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(err) => return Err(err.into()),
        };

        let removal =
            if metadata.is_dir() { fs::remove_dir_all(path) } else { fs::remove_file(path) };

        match removal {
            Ok(()) => {
                debug!(path = %path.display(), "removed");
                Ok(true)
            }
            // Gone between the metadata read and the removal.
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
