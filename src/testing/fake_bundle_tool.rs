use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, BundleInvocation, ToolOutcome};
use crate::ports::BundleTool;

use super::{Journal, MemoryBuildFilesystem};

/// Packaging tool fake that records invocations and returns a scripted outcome.
pub struct FakeBundleTool {
    pub invocations: Mutex<Vec<BundleInvocation>>,
    outcome: ToolOutcome,
    produces: Option<(MemoryBuildFilesystem, PathBuf)>,
    launch_failure: bool,
    available: bool,
    journal: Journal,
}

impl FakeBundleTool {
    /// Tool that exits 0.
    pub fn succeeding(journal: Journal) -> Self {
        Self::with_outcome(
            journal,
            ToolOutcome { code: Some(0), stdout: String::new(), stderr: String::new() },
        )
    }

    /// Tool that exits with `code` and writes `stderr`.
    pub fn failing(journal: Journal, code: i32, stderr: &str) -> Self {
        Self::with_outcome(
            journal,
            ToolOutcome { code: Some(code), stdout: String::new(), stderr: stderr.to_string() },
        )
    }

    /// Tool that cannot be spawned.
    pub fn unlaunchable(journal: Journal) -> Self {
        let mut tool = Self::succeeding(journal);
        tool.launch_failure = true;
        tool
    }

    fn with_outcome(journal: Journal, outcome: ToolOutcome) -> Self {
        Self {
            invocations: Mutex::new(Vec::new()),
            outcome,
            produces: None,
            launch_failure: false,
            available: true,
            journal,
        }
    }

    /// Report the program as missing from `PATH`.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// Create `artifact` in `filesystem` whenever the tool runs.
    pub fn producing(mut self, filesystem: MemoryBuildFilesystem, artifact: PathBuf) -> Self {
        self.produces = Some((filesystem, artifact));
        self
    }

    pub fn invocation_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }
}

impl BundleTool for FakeBundleTool {
    fn is_available(&self, _program: &str) -> bool {
        self.available
    }

    fn run(&self, invocation: &BundleInvocation, _cwd: &Path) -> Result<ToolOutcome, AppError> {
        if self.launch_failure {
            return Err(AppError::ToolLaunch {
                program: invocation.program().to_string(),
                details: "program not found".to_string(),
            });
        }
        self.journal.record(format!("invoke {}", invocation.program()));
        self.invocations.lock().unwrap().push(invocation.clone());
        if let Some((filesystem, artifact)) = &self.produces {
            filesystem.add_file(artifact.clone());
        }
        Ok(self.outcome.clone())
    }
}
