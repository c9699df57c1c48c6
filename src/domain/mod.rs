pub mod app_name;
pub mod build_config;
pub mod bundle_command;
pub mod error;
pub mod layout;
pub mod stage;
pub mod tool_outcome;

pub use app_name::AppName;
pub use build_config::{AssetMapping, BuildConfig, TOOL_ENV_VAR};
pub use bundle_command::{BundleInvocation, DATA_SEPARATOR};
pub use error::AppError;
pub use layout::{BUILD_DIR, BuildLayout, DIST_DIR, artifact_relative};
pub use stage::BuildStage;
pub use tool_outcome::ToolOutcome;
