//! freeze-build: Package the Interactive Chess Board game into a single-file executable.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use adapters::{LocalBuildFilesystem, ProcessBundleTool};
use app::{AppContext, commands, config::load_build_config};
use domain::{BuildConfig, BuildLayout};

pub use app::commands::build::BuildReport;
pub use app::commands::clean::CleanOutcome;
pub use app::commands::plan::BuildPlan;
pub use domain::AppError;

/// Where to build and which config to use.
#[derive(Debug, Clone)]
pub struct ProjectOptions {
    /// Directory containing the entry file and assets; outputs land here too.
    pub root: PathBuf,
    /// Explicit config file. Falls back to `freeze-build.toml` in `root`.
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub project: ProjectOptions,
    /// Pass the packaging tool's output through instead of capturing it.
    pub stream_output: bool,
}

fn load(project: &ProjectOptions) -> Result<(BuildConfig, BuildLayout), AppError> {
    let config = load_build_config(&project.root, project.config.as_deref())?;
    Ok((config, BuildLayout::new(&project.root)))
}

/// Clean previous output and package the game.
///
/// Prints the success banner and artifact path only when the packaging tool
/// exits successfully and the artifact exists.
pub fn build(options: &BuildOptions) -> Result<BuildReport, AppError> {
    let (config, layout) = load(&options.project)?;
    let tool = if options.stream_output {
        ProcessBundleTool::streaming()
    } else {
        ProcessBundleTool::capturing()
    };
    let ctx = AppContext::new(layout, LocalBuildFilesystem, tool);

    println!("🔨 Building {}...", config.name);
    let report = commands::build::execute(&ctx, &config)?;
    println!("✅ Build complete");
    println!("Executable: {}", report.artifact.display());
    Ok(report)
}

/// Remove `build/`, `dist/` and the generated `.spec` file.
pub fn clean(options: &ProjectOptions) -> Result<CleanOutcome, AppError> {
    let (config, layout) = load(options)?;

    let outcome = commands::clean::execute(&LocalBuildFilesystem, &layout, &config.name)?;
    if outcome.removed.is_empty() {
        println!("✅ Nothing to clean");
    } else {
        for path in &outcome.removed {
            println!("🧹 Removed {}", path.display());
        }
    }
    Ok(outcome)
}

/// Show the packaging command and expected artifact without running anything.
pub fn plan(options: &ProjectOptions) -> Result<BuildPlan, AppError> {
    let (config, _) = load(options)?;

    let plan = commands::plan::execute(&config);
    println!("{}", plan.invocation.display());
    println!("Executable: {}", plan.artifact.display());
    Ok(plan)
}
