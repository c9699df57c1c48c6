//! In-memory fakes for the ports, shared by unit tests.

mod fake_bundle_tool;

use std::sync::{Arc, Mutex};

pub use fake_bundle_tool::FakeBundleTool;
pub use memory_build_filesystem::MemoryBuildFilesystem;
pub use recording_prompt::RecordingPrompt;

/// Ordered record of side effects across fakes.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, entry: impl Into<String>) {
        self.entries.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    /// Index of the first entry starting with `prefix`.
    pub fn position(&self, prefix: &str) -> Option<usize> {
        self.entries.lock().unwrap().iter().position(|entry| entry.starts_with(prefix))
    }
}
