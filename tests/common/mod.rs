//! Shared testing utilities for freeze-build CLI tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const APP_NAME: &str = "InteractiveChessBoard";

/// How the scripted packaging tool behaves when invoked.
#[derive(Debug, Clone, Copy)]
pub enum FakeTool {
    /// Exit 0 and write `dist/<name>`.
    Succeeds,
    /// Print a diagnostic to stderr and exit with the given code.
    Fails(i32),
    /// Exit 0 without producing anything.
    SucceedsWithoutArtifact,
}

/// Testing harness providing an isolated project directory for CLI exercises.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    tool: Option<PathBuf>,
}

impl TestContext {
    /// Create a new isolated environment with an empty project directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("game");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir, tool: None }
    }

    /// Create an environment holding the chess game's entry file and asset folders.
    pub fn with_project() -> Self {
        let ctx = Self::new();
        ctx.write("main.py", "import pygame\n");
        ctx.write("assets/icons/undo.png", "png");
        ctx.write("assets/pieces/wK.png", "png");
        ctx
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write a file relative to the project directory, creating parents.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write test file");
    }

    /// Leave artifacts behind as if a previous build had run.
    pub fn seed_previous_build(&self) {
        self.write("build/InteractiveChessBoard/warn-InteractiveChessBoard.txt", "old");
        self.write(&format!("dist/{}", artifact_file_name()), "old binary");
        self.write(&format!("{}.spec", APP_NAME), "# old spec");
    }

    /// Install a scripted packaging tool outside the project directory.
    #[cfg(unix)]
    pub fn install_tool(&mut self, behavior: FakeTool) {
        let path = self.root.path().join("fake-pyinstaller");
        write_tool_script(&path, behavior);
        self.tool = Some(path);
    }

    /// Create a directory next to the project for invoking the CLI from elsewhere.
    pub fn sibling_dir(&self, name: &str) -> PathBuf {
        let dir = self.root.path().join(name);
        fs::create_dir_all(&dir).expect("Failed to create sibling directory");
        dir
    }

    /// Build a command for invoking the compiled binary within the project directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("freeze-build").expect("Failed to locate freeze-build binary");
        cmd.current_dir(&self.work_dir).env_remove("FREEZE_BUILD_LOG").env_remove("RUST_LOG");
        match &self.tool {
            Some(tool) => cmd.env("FREEZE_BUILD_TOOL", tool),
            None => cmd.env("FREEZE_BUILD_TOOL", "freeze-build-missing-packaging-tool"),
        };
        cmd
    }

    /// Arguments the scripted tool received, one per line.
    pub fn tool_args(&self) -> Vec<String> {
        fs::read_to_string(self.work_dir.join("tool-args.txt"))
            .map(|content| content.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Whether the tool has been invoked at all.
    pub fn tool_was_invoked(&self) -> bool {
        self.work_dir.join("tool-args.txt").exists()
    }

    /// Whether the scripted tool saw leftovers from a previous build.
    pub fn tool_saw_stale_output(&self) -> bool {
        self.work_dir.join("tool-saw-stale.txt").exists()
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.work_dir.join("dist").join(artifact_file_name())
    }

    pub fn assert_no_previous_outputs(&self) {
        assert!(!self.work_dir.join("build").exists(), "build/ should be removed");
        assert!(!self.work_dir.join("dist").exists(), "dist/ should be removed");
        let spec = self.work_dir.join(format!("{}.spec", APP_NAME));
        assert!(!spec.exists(), ".spec should be removed");
    }
}

/// Write an executable sh script at `path` that behaves like the packaging tool.
///
/// The script records its arguments and writes its outputs relative to its cwd.
#[cfg(unix)]
pub fn write_tool_script(path: &Path, behavior: FakeTool) {
    use std::os::unix::fs::PermissionsExt;

    let tail = match behavior {
        FakeTool::Succeeds => {
            format!("mkdir -p dist\nprintf 'bin' > \"dist/{}\"\nexit 0\n", artifact_file_name())
        }
        FakeTool::Fails(code) => {
            format!("echo 'ERROR: Unable to find pygame binaries' >&2\nexit {}\n", code)
        }
        FakeTool::SucceedsWithoutArtifact => "exit 0\n".to_string(),
    };
    let script = format!(
        "#!/bin/sh\n\
         printf '%s\\n' \"$@\" > tool-args.txt\n\
         if [ -e build ] || [ -e dist ] || [ -e {name}.spec ]; then\n\
           echo stale > tool-saw-stale.txt\n\
         fi\n\
         {tail}",
        name = APP_NAME,
        tail = tail
    );

    fs::write(path, script).expect("Failed to write fake tool");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake tool executable");
}

/// `InteractiveChessBoard` plus the platform executable suffix.
pub fn artifact_file_name() -> String {
    format!("{}{}", APP_NAME, std::env::consts::EXE_SUFFIX)
}

/// `dist/InteractiveChessBoard` as printed by the CLI.
pub fn reported_artifact() -> String {
    Path::new("dist").join(artifact_file_name()).display().to_string()
}
