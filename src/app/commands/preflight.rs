use std::path::PathBuf;

use tracing::debug;

use crate::domain::{AppError, BuildConfig, BuildLayout};
use crate::ports::{BuildFilesystem, BundleTool};

/// Check that every input the packaging tool reads, and the tool itself, are present.
///
/// Runs before anything is deleted, so a misconfigured build leaves the
/// previous output untouched.
pub fn execute(
    filesystem: &impl BuildFilesystem,
    tool: &impl BundleTool,
    layout: &BuildLayout,
    config: &BuildConfig,
) -> Result<(), AppError> {
    let entry = layout.resolve(&config.entry);
    if !filesystem.is_file(&entry) {
        return Err(AppError::MissingInput { what: "entry file", path: config.entry.clone() });
    }

    for mapping in &config.data {
        if !filesystem.is_dir(&layout.resolve(&mapping.source)) {
            return Err(AppError::MissingInput {
                what: "asset directory",
                path: mapping.source.clone(),
            });
        }
    }

    if let Some(icon) = &config.icon {
        if !filesystem.is_file(&layout.resolve(icon)) {
            return Err(AppError::MissingInput { what: "icon file", path: icon.clone() });
        }
    }

    if !tool.is_available(&config.tool) {
        return Err(AppError::MissingInput {
            what: "packaging tool",
            path: PathBuf::from(&config.tool),
        });
    }

    debug!(entry = %entry.display(), assets = config.data.len(), "build inputs present");
    Ok(())
}
