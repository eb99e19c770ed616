//! Shared testing utilities for assetkit CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
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

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `assetkit` binary within the workspace.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `assetkit` binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("assetkit").expect("Failed to locate assetkit binary");
        cmd.current_dir(dir.as_ref()).env("HOME", self.root.path()).env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the workspace, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the workspace.
    pub fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read test file")
    }

    /// Write `assetkit.toml` in the workspace.
    pub fn write_config(&self, content: &str) -> PathBuf {
        self.write_file("assetkit.toml", content)
    }

    /// Lay out a small mod tree under `mod/` with publishable and private files.
    pub fn mod_tree(&self) -> PathBuf {
        self.write_file("mod/Data/Scripts/Main.cs", "class Main {}");
        self.write_file("mod/Data/Scripts/Main.cs.bak", "stale");
        self.write_file("mod/Data/Blocks.sbc", "<Definitions />");
        self.write_file("mod/Textures/Icon.dds", "dds");
        self.write_file("mod/Textures/Icon.png", "png source");
        self.write_file("mod/Models/Ship.mwm", "mwm");
        self.write_file("mod/Audio/Engine.wav", "wav");
        self.write_file("mod/LICENSE", "MIT");
        self.write_file("mod/README.md", "# Mod");
        self.write_file("mod/thumb.png", "png");
        self.write_file("mod/Notes/todo.cs", "private");
        self.write_file("mod/build.log", "log");
        self.work_dir.join("mod")
    }
}
