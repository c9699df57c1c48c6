use std::path::PathBuf;

use crate::domain::{BuildConfig, BundleInvocation, artifact_relative};

/// What a build would run and produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    pub invocation: BundleInvocation,
    /// Expected artifact, relative to the build root.
    pub artifact: PathBuf,
}

/// Compose the build plan without touching the filesystem or spawning anything.
pub fn execute(config: &BuildConfig) -> BuildPlan {
    BuildPlan {
        invocation: BundleInvocation::from_config(config),
        artifact: artifact_relative(&config.name),
    }
}
