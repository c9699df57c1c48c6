//! Build configuration domain models.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{AppError, AppName};

/// Environment variable overriding the packaging tool program.
pub const TOOL_ENV_VAR: &str = "FREEZE_BUILD_TOOL";

/// Parameters of one packaging run, fixed before orchestration starts.
///
/// The defaults reproduce the Interactive Chess Board release build.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Output base name of the bundled executable.
    #[serde(default = "default_name")]
    pub name: AppName,
    /// Entry-point script handed to the packaging tool.
    #[serde(default = "default_entry")]
    pub entry: PathBuf,
    /// Packaging tool program (looked up on `PATH` when not absolute).
    #[serde(default = "default_tool")]
    pub tool: String,
    /// Asset directories embedded in the bundle.
    #[serde(default = "default_data")]
    pub data: Vec<AssetMapping>,
    /// Libraries whose submodules and native binaries are force-included.
    #[serde(default = "default_collect")]
    pub collect: Vec<String>,
    /// Build without a console window.
    #[serde(default)]
    pub windowed: bool,
    /// Executable icon.
    #[serde(default)]
    pub icon: Option<PathBuf>,
}

/// A directory copied into the bundle at a relative destination.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetMapping {
    pub source: PathBuf,
    pub target: PathBuf,
}

impl AssetMapping {
    /// Mapping that keeps the directory at the same relative path inside the bundle.
    pub fn same_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self { source: path.clone(), target: path }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            entry: default_entry(),
            tool: default_tool(),
            data: default_data(),
            collect: default_collect(),
            windowed: false,
            icon: None,
        }
    }
}

fn default_name() -> AppName {
    AppName("InteractiveChessBoard".to_string())
}

fn default_entry() -> PathBuf {
    PathBuf::from("main.py")
}

fn default_tool() -> String {
    "pyinstaller".to_string()
}

fn default_data() -> Vec<AssetMapping> {
    vec![AssetMapping::same_path("assets/icons"), AssetMapping::same_path("assets/pieces")]
}

fn default_collect() -> Vec<String> {
    vec!["pygame".to_string()]
}

impl BuildConfig {
    /// Parse and validate configuration from TOML content.
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let config: BuildConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if is_blank(&self.entry) {
            return Err(AppError::config_error("entry must not be empty"));
        }
        if self.tool.trim().is_empty() {
            return Err(AppError::config_error("tool must not be empty"));
        }
        for (index, mapping) in self.data.iter().enumerate() {
            if is_blank(&mapping.source) || is_blank(&mapping.target) {
                return Err(AppError::config_error(format!(
                    "data[{}] needs both source and target",
                    index
                )));
            }
        }
        if let Some(library) = self.collect.iter().find(|lib| lib.trim().is_empty()) {
            return Err(AppError::config_error(format!(
                "collect contains an empty library name: '{}'",
                library
            )));
        }
        if self.icon.as_deref().is_some_and(is_blank) {
            return Err(AppError::config_error("icon must not be empty when set"));
        }
        Ok(())
    }

    /// Apply environment overrides, reading variables through `lookup`.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(tool) = lookup(TOOL_ENV_VAR).filter(|value| !value.trim().is_empty()) {
            self.tool = tool;
        }
        self
    }

    /// Anchor a relative tool path such as `./venv/bin/pyinstaller` at `base`.
    ///
    /// Bare program names are left for `PATH` lookup.
    pub fn with_tool_relative_to(mut self, base: &Path) -> Self {
        let tool = Path::new(&self.tool);
        if tool.is_relative() && tool.components().count() > 1 {
            self.tool = base.join(tool).to_string_lossy().into_owned();
        }
        self
    }
}

fn is_blank(path: &Path) -> bool {
    path.as_os_str().is_empty()
}
