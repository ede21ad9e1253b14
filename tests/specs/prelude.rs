// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixture and assertion helpers for end-to-end specs.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

/// A throwaway project directory plus a fake generator installation.
pub struct Project {
    temp: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("proj")).unwrap();
        Self { temp }
    }

    pub fn project_dir(&self) -> PathBuf {
        self.temp.path().join("proj")
    }

    pub fn install_dir(&self) -> PathBuf {
        self.temp.path().join("install")
    }

    /// Install a fake generator: `script` becomes the interpreter at
    /// `.venv/bin/python`, with a stand-in entry script beside it.
    pub fn install_generator(&self, script: &str) {
        let bin_dir = self.install_dir().join(".venv").join("bin");
        fs::create_dir_all(&bin_dir).unwrap();
        let bin = bin_dir.join("python");
        fs::write(&bin, script).unwrap();
        make_executable(&bin);

        let entry_dir = self.install_dir().join("python");
        fs::create_dir_all(&entry_dir).unwrap();
        fs::write(entry_dir.join("main.py"), "# stand-in entry script\n").unwrap();
    }

    /// Command builder for `clarity generate` against this project.
    pub fn generate(&self) -> Clarity {
        let mut cmd = assert_cmd::Command::cargo_bin("clarity").unwrap();
        cmd.arg("generate")
            .arg(self.project_dir())
            .arg("--install-dir")
            .arg(self.install_dir());
        Clarity { cmd }
    }
}

pub struct Clarity {
    cmd: assert_cmd::Command,
}

impl Clarity {
    pub fn arg(mut self, arg: &str) -> Self {
        self.cmd.arg(arg);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    fn run(mut self) -> RunResult {
        let output = self.cmd.output().unwrap();
        RunResult { output }
    }

    pub fn passes(self) -> RunResult {
        let result = self.run();
        assert!(result.output.status.success(), "expected success\n{}", result.describe());
        result
    }

    pub fn fails_with(self, code: i32) -> RunResult {
        let result = self.run();
        assert_eq!(
            result.output.status.code(),
            Some(code),
            "expected exit code {code}\n{}",
            result.describe()
        );
        result
    }
}

pub struct RunResult {
    output: Output,
}

impl RunResult {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout().contains(needle), "stdout missing {needle:?}\n{}", self.describe());
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr().contains(needle), "stderr missing {needle:?}\n{}", self.describe());
        self
    }

    fn describe(&self) -> String {
        format!(
            "status: {:?}\n--- stdout ---\n{}--- stderr ---\n{}",
            self.output.status,
            self.stdout(),
            self.stderr()
        )
    }
}

fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}
