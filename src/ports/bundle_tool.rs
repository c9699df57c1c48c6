use std::path::Path;

use crate::domain::{AppError, BundleInvocation, ToolOutcome};

/// Port for running the external packaging tool.
pub trait BundleTool {
    /// Whether `program` resolves to something that can be executed.
    fn is_available(&self, program: &str) -> bool;

    /// Run `invocation` in `cwd` and block until the process exits.
    ///
    /// A non-zero exit is reported through the returned outcome, not as an error.
    /// Errors mean the process could not be run at all.
    fn run(&self, invocation: &BundleInvocation, cwd: &Path) -> Result<ToolOutcome, AppError>;
}
