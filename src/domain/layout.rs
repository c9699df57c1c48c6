//! Paths the packaging tool reads and writes, relative to the build root.

use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};

use super::AppName;

/// Scratch directory the packaging tool uses while analysing the entry file.
pub const BUILD_DIR: &str = "build";
/// Directory receiving the finished executable.
pub const DIST_DIR: &str = "dist";

/// Resolves build output locations under a single root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLayout {
    root: PathBuf,
}

impl BuildLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a config-relative path against the root. Absolute paths pass through.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    /// Everything a previous run may have left behind, in removal order.
    pub fn stale_outputs(&self, name: &AppName) -> [PathBuf; 3] {
        [
            self.root.join(BUILD_DIR),
            self.root.join(DIST_DIR),
            self.root.join(name.spec_file_name()),
        ]
    }

    /// Absolute location of the bundled executable.
    pub fn artifact(&self, name: &AppName) -> PathBuf {
        self.root.join(artifact_relative(name))
    }
}

/// `dist/<name>` plus the platform executable suffix.
///
/// Depends only on the name, never on whether a build succeeded.
pub fn artifact_relative(name: &AppName) -> PathBuf {
    Path::new(DIST_DIR).join(format!("{}{}", name, EXE_SUFFIX))
}
