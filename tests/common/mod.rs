//! Shared testing utilities for sauce-agent CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        Self { root: TempDir::new().expect("Failed to create temp directory for tests") }
    }

    /// Path of the isolated working directory.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Write a file into the working directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Build a command for invoking the compiled `sauce-agent` binary.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("sauce-agent").expect("Failed to locate sauce-agent binary");
        cmd.current_dir(self.root.path());
        cmd
    }
}
