//! Shared testing utilities for stackforge CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
///
/// Each context gets its own temp directory serving as `$HOME` and
/// `STACKFORGE_HOME`, so the project registry never touches the real one.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `stackforge` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("stackforge").expect("Failed to locate stackforge binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env("STACKFORGE_HOME", self.home().join(".stackforge"));
        cmd
    }

    /// Path to a scaffolded project inside the work directory.
    pub fn project_path(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }

    /// Path to the registry file backing `stackforge list`.
    pub fn registry_path(&self) -> PathBuf {
        self.home().join(".stackforge").join("projects.json")
    }

    /// Read a file from a scaffolded project.
    pub fn read_project_file(&self, name: &str, relative: &str) -> String {
        let path = self.project_path(name).join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
    }

    /// Assert a file exists inside a scaffolded project.
    pub fn assert_project_file_exists(&self, name: &str, relative: &str) {
        let path = self.project_path(name).join(relative);
        assert!(path.exists(), "{} should exist", path.display());
    }

    /// Assert a file does not exist inside a scaffolded project.
    pub fn assert_project_file_absent(&self, name: &str, relative: &str) {
        let path = self.project_path(name).join(relative);
        assert!(!path.exists(), "{} should not exist", path.display());
    }
}
