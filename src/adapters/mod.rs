pub mod local_build_filesystem;
pub mod process_bundle_tool;
pub mod terminal_prompt;

pub use local_build_filesystem::LocalBuildFilesystem;
pub use process_bundle_tool::ProcessBundleTool;
pub use terminal_prompt::TerminalPrompt;
