//! Build configuration loading.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, BuildConfig};

/// Config file picked up from the build root when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "freeze-build.toml";

/// Load the build configuration.
///
/// An explicit path must exist. Otherwise `freeze-build.toml` in `root` is used
/// when present, and the built-in defaults when not. Environment overrides are
/// applied last.
///
/// A relative tool path from a config file is anchored at that file's
/// directory; one from the environment at the invocation directory, never at
/// `root`.
pub fn load_build_config(root: &Path, explicit: Option<&Path>) -> Result<BuildConfig, AppError> {
    let invocation_dir = std::env::current_dir()?;
    load_with(root, explicit, &invocation_dir, |key| std::env::var(key).ok())
}

fn load_with<F>(
    root: &Path,
    explicit: Option<&Path>,
    invocation_dir: &Path,
    lookup: F,
) -> Result<BuildConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match resolve_config_path(root, explicit)? {
        Some(path) => {
            debug!(path = %path.display(), "loading build config");
            let content = std::fs::read_to_string(&path)?;
            let config_dir = path.parent().unwrap_or(invocation_dir);
            BuildConfig::parse_toml(&content)?.with_tool_relative_to(config_dir)
        }
        None => {
            debug!("no config file; using built-in defaults");
            BuildConfig::default()
        }
    };

    let config = config.with_env_overrides(lookup).with_tool_relative_to(invocation_dir);
    config.validate()?;
    Ok(config)
}

fn resolve_config_path(root: &Path, explicit: Option<&Path>) -> Result<Option<PathBuf>, AppError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(AppError::ConfigNotFound(path.to_path_buf()));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let implicit = root.join(DEFAULT_CONFIG_FILE);
    Ok(implicit.is_file().then_some(implicit))
}
