// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed installation-relative paths for the bundled generator.

use clarity_core::InvocationContext;
use std::path::{Path, PathBuf};

/// Installation directory of the extension; the generator interpreter and
/// entry script live at fixed paths beneath it.
#[derive(Debug, Clone)]
pub struct InstallLayout {
    install_dir: PathBuf,
}

impl InstallLayout {
    pub fn new(install_dir: impl Into<PathBuf>) -> Self {
        Self { install_dir: install_dir.into() }
    }

    /// Interpreter of the bundled virtualenv
    pub fn generator_bin(&self) -> PathBuf {
        #[cfg(windows)]
        {
            self.install_dir.join(".venv").join("Scripts").join("python.exe")
        }
        #[cfg(not(windows))]
        {
            self.install_dir.join(".venv").join("bin").join("python")
        }
    }

    /// Entry script handed to the interpreter as its first argument
    pub fn generator_entry(&self) -> PathBuf {
        self.install_dir.join("python").join("main.py")
    }

    /// Resolve the per-invocation context for a project root
    pub fn invocation(&self, project_root: &Path) -> InvocationContext {
        InvocationContext {
            project_root: project_root.to_path_buf(),
            generator_bin: self.generator_bin(),
            generator_entry: self.generator_entry(),
        }
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
