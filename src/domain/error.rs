use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for freeze-build operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration value is invalid.
    #[error("{0}")]
    Configuration(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Application name is unusable as an output base name.
    #[error(
        "Invalid application name '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidAppName(String),

    /// A build input required by the packaging tool is missing.
    #[error("Missing {what}: {}", .path.display())]
    MissingInput { what: &'static str, path: PathBuf },

    /// The packaging tool could not be started.
    #[error("Failed to launch '{program}': {details}")]
    ToolLaunch { program: String, details: String },

    /// The packaging tool ran and reported failure.
    #[error(
        "Build failed: '{command}' exited with {status}. Expected artifact {} was not produced.{}",
        .artifact.display(),
        format_diagnostic(.diagnostic)
    )]
    BundleToolFailed {
        command: String,
        status: String,
        code: Option<i32>,
        artifact: PathBuf,
        diagnostic: String,
    },

    /// The packaging tool reported success but left no artifact behind.
    #[error("Packaging tool succeeded but no artifact exists at {}", .0.display())]
    ArtifactMissing(PathBuf),

    /// The exit acknowledgment prompt failed.
    #[error("Failed to read acknowledgment: {0}")]
    Prompt(String),
}

fn format_diagnostic(diagnostic: &str) -> String {
    if diagnostic.is_empty() { String::new() } else { format!("\n{}", diagnostic) }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Process exit code for this error.
    ///
    /// A failed packaging tool passes its own non-zero code through.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::BundleToolFailed { code: Some(code), .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}
