// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The documentation-generation command.
//!
//! One invocation: validate that a folder is open, resolve the generator's
//! installed paths, run it inside a progress scope, extract the structured
//! result from its stdout, and render exactly one outcome through the
//! editor surface. Every failure is terminal for the invocation; nothing
//! retries.

use crate::layout::InstallLayout;
use crate::registry::Command;
use async_trait::async_trait;
use clarity_adapters::{ActionChoice, EditorAdapter, EditorError, RunnerAdapter, RunnerError};
use clarity_core::{dispatch, extract, Outcome};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const PROGRESS_TITLE: &str = "Generating documentation. Please wait...";
pub const NO_FOLDER_OPEN: &str = "No folder is open.";
pub const ALREADY_RUNNING: &str =
    "Documentation generation is already running for this folder.";
pub const OPEN_README_ACTION: &str = "Open README";

/// The user-invoked action: generate documentation for the active
/// workspace. Takes no parameters; its context is fixed at construction.
pub struct GenerateDocsCommand<R, E> {
    runner: R,
    editor: E,
    layout: InstallLayout,
    workspace_root: Option<PathBuf>,
    in_flight: Arc<Mutex<HashSet<PathBuf>>>,
}

impl<R, E> GenerateDocsCommand<R, E>
where
    R: RunnerAdapter,
    E: EditorAdapter,
{
    pub fn new(runner: R, editor: E, layout: InstallLayout) -> Self {
        Self {
            runner,
            editor,
            layout,
            workspace_root: None,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Set the active workspace root, if the host has a folder open
    pub fn workspace_root(mut self, root: Option<PathBuf>) -> Self {
        self.workspace_root = root;
        self
    }

    /// Run one end-to-end invocation and return the rendered outcome.
    pub async fn invoke(&self) -> Result<Outcome, EditorError> {
        let Some(root) = self.workspace_root.clone() else {
            return self.reject(NO_FOLDER_OPEN).await;
        };
        let Some(_flight) = InFlightGuard::acquire(&self.in_flight, &root) else {
            return self.reject(ALREADY_RUNNING).await;
        };

        let ctx = self.layout.invocation(&root);
        let args = ctx.args();

        // Progress stays up across the run and is dismissed when the scope
        // drops, whichever way steps below exit.
        let progress = self.editor.begin_progress(PROGRESS_TITLE);
        self.editor.diagnostic(&format!("running: {}", ctx.command_line()));
        tracing::info!(
            generator = %ctx.generator_bin.display(),
            project_root = %ctx.project_root.display(),
            "launching documentation generator"
        );

        let outcome = match self.runner.run(&ctx.generator_bin, &args).await {
            Ok(run) => {
                // Nonzero exits skip extraction entirely
                let extraction = if run.success() { extract(&run.stdout) } else { Ok(None) };
                dispatch(&run, extraction)
            }
            Err(err) => runner_failure(err),
        };
        drop(progress);

        self.render(&outcome).await?;
        Ok(outcome)
    }

    async fn reject(&self, message: &str) -> Result<Outcome, EditorError> {
        let outcome = Outcome::DomainError { message: message.to_string() };
        self.render(&outcome).await?;
        Ok(outcome)
    }

    async fn render(&self, outcome: &Outcome) -> Result<(), EditorError> {
        match outcome {
            Outcome::DomainError { message } => self.editor.show_error(message).await,
            Outcome::Infrastructure { message, detail } => {
                tracing::error!(%message, "documentation generation failed");
                self.editor.diagnostic(detail);
                self.editor.show_error(message).await
            }
            Outcome::Success { message, readme_path } => {
                tracing::info!(readme = %readme_path.display(), "documentation generated");
                match self.editor.show_info(message, OPEN_README_ACTION).await? {
                    ActionChoice::Selected => self.editor.open_document(readme_path).await,
                    ActionChoice::Dismissed => Ok(()),
                }
            }
        }
    }
}

#[async_trait]
impl<R, E> Command for GenerateDocsCommand<R, E>
where
    R: RunnerAdapter,
    E: EditorAdapter,
{
    async fn invoke(&self) -> Result<Outcome, EditorError> {
        GenerateDocsCommand::invoke(self).await
    }
}

fn runner_failure(err: RunnerError) -> Outcome {
    let message = match &err {
        RunnerError::Spawn { .. } => {
            format!("Failed to launch the documentation generator: {err}")
        }
        RunnerError::TimedOut { timeout_secs } => {
            format!("Documentation generator timed out after {timeout_secs}s.")
        }
        RunnerError::Capture(_) => {
            "Failed while capturing the documentation generator's output.".to_string()
        }
    };
    Outcome::Infrastructure { message, detail: err.to_string() }
}

/// Marks a project root as having a generation in flight; the mark is
/// released on drop, whichever way the invocation exits.
struct InFlightGuard {
    roots: Arc<Mutex<HashSet<PathBuf>>>,
    root: PathBuf,
}

impl InFlightGuard {
    fn acquire(roots: &Arc<Mutex<HashSet<PathBuf>>>, root: &Path) -> Option<Self> {
        if !roots.lock().insert(root.to_path_buf()) {
            return None;
        }
        Some(Self { roots: Arc::clone(roots), root: root.to_path_buf() })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.roots.lock().remove(&self.root);
    }
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
