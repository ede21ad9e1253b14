// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The resolved paths for one invocation of the bundled generator.
//!
//! An [`InvocationContext`] pins the three filesystem paths a single run
//! needs — the interpreter, its entry script, and the project being
//! documented — and derives the exactly-two positional arguments handed to
//! the interpreter along with the literal command line logged for diagnostics.

use std::path::PathBuf;

/// The fixed paths describing one generator invocation.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    /// The project root passed to the generator as its sole positional
    /// argument after the entry script.
    pub project_root: PathBuf,
    /// The interpreter executable launched for the run.
    pub generator_bin: PathBuf,
    /// The entry script handed to the interpreter as its first argument.
    pub generator_entry: PathBuf,
}

impl InvocationContext {
    /// The exactly-two positional arguments: entry script, then project root.
    pub fn args(&self) -> Vec<String> {
        vec![
            self.generator_entry.display().to_string(),
            self.project_root.display().to_string(),
        ]
    }

    /// The literal command line — interpreter followed by its arguments —
    /// as logged to the diagnostic channel before the run.
    pub fn command_line(&self) -> String {
        let mut line = self.generator_bin.display().to_string();
        for arg in self.args() {
            line.push(' ');
            line.push_str(&arg);
        }
        line
    }
}
