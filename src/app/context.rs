use crate::domain::BuildLayout;
use crate::ports::{BuildFilesystem, BundleTool};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: BuildFilesystem, T: BundleTool> {
    layout: BuildLayout,
    filesystem: F,
    tool: T,
}

impl<F: BuildFilesystem, T: BundleTool> AppContext<F, T> {
    /// Create a new application context.
    pub fn new(layout: BuildLayout, filesystem: F, tool: T) -> Self {
        Self { layout, filesystem, tool }
    }

    /// Get the build root layout.
    pub fn layout(&self) -> &BuildLayout {
        &self.layout
    }

    /// Get a reference to the build filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the packaging tool.
    pub fn tool(&self) -> &T {
        &self.tool
    }
}
