//! Shared testing utilities for agent-installer CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const INSTALLER_TEMPLATE: &str = r#"#!/bin/bash
set -e
AGENT_ID="{{AGENT_ID}}"
AGENT_TOKEN="{{TOKEN}}"
SERVER_URL="wss://{{DOMAIN}}/ws/agent"
echo "Installing monitoring agent $AGENT_ID for {{DOMAIN}}"
"#;

/// Testing harness providing an isolated working directory for CLI exercises.
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

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `agent-installer` binary.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("agent-installer").expect("Failed to locate agent-installer binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Write a file relative to the working directory.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write the default-named installer template.
    pub fn write_default_template(&self) -> PathBuf {
        self.write("agent-installer.sh", INSTALLER_TEMPLATE)
    }

    /// Read a file relative to the working directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read test file")
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.work_dir.join(relative).exists()
    }
}
