//! Result of running the packaging tool to completion.

/// Termination status and captured output of a finished tool process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutcome {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Number of trailing stderr lines kept when reporting a failure.
const DIAGNOSTIC_TAIL_LINES: usize = 20;

impl ToolOutcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Describe how the process ended, e.g. `exit code 1`.
    pub fn status_label(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {}", code),
            None => "termination by signal".to_string(),
        }
    }

    /// Last lines of the tool's error output, falling back to stdout when stderr is empty.
    pub fn diagnostic_tail(&self) -> String {
        let source = if self.stderr.trim().is_empty() { &self.stdout } else { &self.stderr };
        let lines: Vec<&str> = source.trim_end().lines().collect();
        let start = lines.len().saturating_sub(DIAGNOSTIC_TAIL_LINES);
        lines[start..].join("\n")
    }
}
