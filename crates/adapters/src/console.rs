// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console rendition of the editor surface for the CLI host.
//!
//! Notifications go to stderr, opened documents are dumped to stdout, and
//! the diagnostic channel rides on tracing so `CLARITY_LOG` controls it.

use crate::editor::{ActionChoice, EditorAdapter, EditorError, ProgressScope};
use async_trait::async_trait;
use std::path::Path;

/// Terminal-backed editor surface.
#[derive(Clone, Debug, Default)]
pub struct ConsoleEditorAdapter {
    open_on_success: bool,
}

impl ConsoleEditorAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-select the offered follow-up action; a terminal has no
    /// notification buttons, so `--open` stands in for clicking one.
    pub fn open_on_success(mut self, open: bool) -> Self {
        self.open_on_success = open;
        self
    }
}

#[async_trait]
impl EditorAdapter for ConsoleEditorAdapter {
    async fn show_error(&self, message: &str) -> Result<(), EditorError> {
        eprintln!("error: {message}");
        Ok(())
    }

    async fn show_info(
        &self,
        message: &str,
        _action: &str,
    ) -> Result<ActionChoice, EditorError> {
        eprintln!("{message}");
        if self.open_on_success {
            Ok(ActionChoice::Selected)
        } else {
            Ok(ActionChoice::Dismissed)
        }
    }

    async fn open_document(&self, path: &Path) -> Result<(), EditorError> {
        let text = tokio::fs::read_to_string(path).await.map_err(|source| {
            EditorError::OpenDocument { path: path.display().to_string(), source }
        })?;
        print!("{text}");
        Ok(())
    }

    fn begin_progress(&self, title: &str) -> ProgressScope {
        eprintln!("{title}");
        let title = title.to_string();
        ProgressScope::new(move || tracing::debug!(%title, "progress scope closed"))
    }

    fn diagnostic(&self, line: &str) {
        tracing::debug!(target: "clarity::diagnostics", "{}", line);
    }
}
