use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::domain::{AppError, BundleInvocation, ToolOutcome};
use crate::ports::BundleTool;

/// Runs the packaging tool as a child process.
#[derive(Debug, Clone, Default)]
pub struct ProcessBundleTool {
    stream_output: bool,
}

impl ProcessBundleTool {
    /// Capture the tool's output so it can be reported on failure.
    pub fn capturing() -> Self {
        Self { stream_output: false }
    }

    /// Pass the tool's output straight through to this process's console.
    pub fn streaming() -> Self {
        Self { stream_output: true }
    }
}

impl BundleTool for ProcessBundleTool {
    fn is_available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    fn run(&self, invocation: &BundleInvocation, cwd: &Path) -> Result<ToolOutcome, AppError> {
        let mut command = Command::new(invocation.program());
        command.args(invocation.args()).current_dir(cwd).stdin(Stdio::null());

        info!(command = %invocation.display(), cwd = %cwd.display(), "running packaging tool");

        let launch_error = |err: io::Error| AppError::ToolLaunch {
            program: invocation.program().to_string(),
            details: if err.kind() == io::ErrorKind::NotFound {
                "program not found; install it or set FREEZE_BUILD_TOOL".to_string()
            } else {
                err.to_string()
            },
        };

        let outcome = if self.stream_output {
            let status = command
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .map_err(launch_error)?;
            ToolOutcome { code: status.code(), stdout: String::new(), stderr: String::new() }
        } else {
            let output = command.output().map_err(launch_error)?;
            ToolOutcome {
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
        };

        info!(status = %outcome.status_label(), "packaging tool finished");
        if !outcome.stdout.is_empty() {
            debug!(target: "freeze_build::tool", "stdout:\n{}", outcome.stdout.trim_end());
        }
        if !outcome.stderr.is_empty() {
            debug!(target: "freeze_build::tool", "stderr:\n{}", outcome.stderr.trim_end());
        }

        Ok(outcome)
    }
}
