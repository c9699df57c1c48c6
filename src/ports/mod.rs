mod build_filesystem;
mod bundle_tool;
mod exit_prompt;

pub use build_filesystem::BuildFilesystem;
pub use bundle_tool::BundleTool;
pub use exit_prompt::{ExitPrompt, NoopPrompt};
