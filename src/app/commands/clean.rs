use std::path::PathBuf;

use tracing::info;

use crate::domain::{AppError, AppName, BuildLayout};
use crate::ports::BuildFilesystem;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanOutcome {
    /// Paths that existed and were removed, relative to the build root.
    pub removed: Vec<PathBuf>,
}

/// Remove `build/`, `dist/` and `<name>.spec` if present.
///
/// Absent paths are skipped; any other I/O failure aborts the clean.
pub fn execute(
    filesystem: &impl BuildFilesystem,
    layout: &BuildLayout,
    name: &AppName,
) -> Result<CleanOutcome, AppError> {
    let mut removed = Vec::new();
    for path in layout.stale_outputs(name) {
        if filesystem.remove_if_present(&path)? {
            info!(path = %path.display(), "removed previous build output");
            let relative =
                path.strip_prefix(layout.root()).map(PathBuf::from).unwrap_or(path);
            removed.push(relative);
        }
    }
    Ok(CleanOutcome { removed })
}
