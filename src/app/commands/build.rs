use std::path::PathBuf;

use tracing::{debug, info};

use super::{clean, plan, preflight};
use crate::app::AppContext;
use crate::domain::{AppError, BuildConfig, BuildStage};
use crate::ports::{BuildFilesystem, BundleTool};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Produced executable, relative to the build root.
    pub artifact: PathBuf,
    /// Previous outputs removed before the build.
    pub removed: Vec<PathBuf>,
    /// Command line that was run.
    pub command: String,
    /// Stage the run finished in; always the terminal stage for a report.
    pub stage: BuildStage,
}

/// Tracks the current stage and logs transitions.
struct StageCursor(BuildStage);

impl StageCursor {
    fn advance(&mut self) {
        if let Some(next) = self.0.next() {
            info!(from = %self.0, to = %next, "build stage");
            self.0 = next;
        }
    }
}

/// Run one packaging build: preflight, clean, invoke, verify.
///
/// The tool is never invoked before cleaning finishes, and a failed or
/// artifact-less run is returned as an error rather than a report.
pub fn execute<F: BuildFilesystem, T: BundleTool>(
    ctx: &AppContext<F, T>,
    config: &BuildConfig,
) -> Result<BuildReport, AppError> {
    let mut cursor = StageCursor(BuildStage::Preflight);
    let result = run_stages(ctx, config, &mut cursor);
    // The CLI prints the error itself; keep this out of the default filter.
    if result.is_err() {
        debug!(stage = %cursor.0, "build aborted");
    }
    result
}

fn run_stages<F: BuildFilesystem, T: BundleTool>(
    ctx: &AppContext<F, T>,
    config: &BuildConfig,
    cursor: &mut StageCursor,
) -> Result<BuildReport, AppError> {
    let layout = ctx.layout();

    preflight::execute(ctx.filesystem(), ctx.tool(), layout, config)?;
    cursor.advance();

    let cleaned = clean::execute(ctx.filesystem(), layout, &config.name)?;
    cursor.advance();

    let plan = plan::execute(config);
    let outcome = ctx.tool().run(&plan.invocation, layout.root())?;
    if !outcome.success() {
        return Err(AppError::BundleToolFailed {
            command: plan.invocation.display(),
            status: outcome.status_label(),
            code: outcome.code,
            artifact: plan.artifact,
            diagnostic: outcome.diagnostic_tail(),
        });
    }
    cursor.advance();

    let artifact_path = layout.artifact(&config.name);
    if !ctx.filesystem().is_file(&artifact_path) {
        return Err(AppError::ArtifactMissing(plan.artifact));
    }
    info!(artifact = %artifact_path.display(), "build complete");

    Ok(BuildReport {
        artifact: plan.artifact,
        removed: cleaned.removed,
        command: plan.invocation.display(),
        stage: cursor.0,
    })
}
