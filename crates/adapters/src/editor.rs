// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Editor-surface adapter: notifications, progress, documents, diagnostics.
//!
//! The host UI is an external collaborator; everything the command wants
//! shown goes through this trait. The diagnostic channel is developer-only
//! output and is never rendered to the user.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Errors from editor-surface operations
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("notification failed: {0}")]
    Notify(String),
    #[error("failed to open document {path}: {source}")]
    OpenDocument {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// What the user did with the single offered follow-up action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionChoice {
    Selected,
    Dismissed,
}

/// A live progress indicator. Dropping the scope dismisses the indicator,
/// which makes dismissal unconditional on every exit path, including
/// unwinding.
pub struct ProgressScope {
    on_end: Option<Box<dyn FnOnce() + Send>>,
}

impl ProgressScope {
    pub fn new(on_end: impl FnOnce() + Send + 'static) -> Self {
        Self { on_end: Some(Box::new(on_end)) }
    }

    /// A scope with no visible indicator to dismiss
    pub fn silent() -> Self {
        Self { on_end: None }
    }
}

impl Drop for ProgressScope {
    fn drop(&mut self) {
        if let Some(end) = self.on_end.take() {
            end();
        }
    }
}

/// Adapter for the host editor surface
#[async_trait]
pub trait EditorAdapter: Clone + Send + Sync + 'static {
    /// Show an error notification
    async fn show_error(&self, message: &str) -> Result<(), EditorError>;

    /// Show an informational notification offering exactly one follow-up
    /// action; dismissal without selecting is not an error
    async fn show_info(&self, message: &str, action: &str)
        -> Result<ActionChoice, EditorError>;

    /// Open a document for viewing
    async fn open_document(&self, path: &Path) -> Result<(), EditorError>;

    /// Begin a non-cancellable progress indicator, dismissed when the
    /// returned scope drops
    fn begin_progress(&self, title: &str) -> ProgressScope;

    /// Append a line to the developer-facing diagnostic channel
    fn diagnostic(&self, line: &str);
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{ActionChoice, EditorAdapter, EditorError, ProgressScope};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    /// Recorded notification
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Notification {
        Error(String),
        Info { message: String, action: String },
    }

    struct FakeEditorState {
        notifications: Vec<Notification>,
        opened: Vec<PathBuf>,
        diagnostics: Vec<String>,
        progress_begun: u32,
        progress_ended: u32,
        next_choice: ActionChoice,
    }

    /// Fake editor surface for testing: records every call
    #[derive(Clone)]
    pub struct FakeEditorAdapter {
        inner: Arc<Mutex<FakeEditorState>>,
    }

    impl Default for FakeEditorAdapter {
        fn default() -> Self {
            Self {
                inner: Arc::new(Mutex::new(FakeEditorState {
                    notifications: Vec::new(),
                    opened: Vec::new(),
                    diagnostics: Vec::new(),
                    progress_begun: 0,
                    progress_ended: 0,
                    next_choice: ActionChoice::Dismissed,
                })),
            }
        }
    }

    impl FakeEditorAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Script what the user does with the next offered action
        pub fn choose(self, choice: ActionChoice) -> Self {
            self.inner.lock().next_choice = choice;
            self
        }

        /// All recorded notifications, in order
        pub fn notifications(&self) -> Vec<Notification> {
            self.inner.lock().notifications.clone()
        }

        /// Error notification messages only
        pub fn errors(&self) -> Vec<String> {
            self.inner
                .lock()
                .notifications
                .iter()
                .filter_map(|n| match n {
                    Notification::Error(message) => Some(message.clone()),
                    Notification::Info { .. } => None,
                })
                .collect()
        }

        /// Documents opened for viewing
        pub fn opened(&self) -> Vec<PathBuf> {
            self.inner.lock().opened.clone()
        }

        /// Lines written to the diagnostic channel
        pub fn diagnostics(&self) -> Vec<String> {
            self.inner.lock().diagnostics.clone()
        }

        /// (begun, ended) progress-scope counts
        pub fn progress_counts(&self) -> (u32, u32) {
            let state = self.inner.lock();
            (state.progress_begun, state.progress_ended)
        }
    }

    #[async_trait]
    impl EditorAdapter for FakeEditorAdapter {
        async fn show_error(&self, message: &str) -> Result<(), EditorError> {
            self.inner.lock().notifications.push(Notification::Error(message.to_string()));
            Ok(())
        }

        async fn show_info(
            &self,
            message: &str,
            action: &str,
        ) -> Result<ActionChoice, EditorError> {
            let mut state = self.inner.lock();
            state.notifications.push(Notification::Info {
                message: message.to_string(),
                action: action.to_string(),
            });
            Ok(state.next_choice)
        }

        async fn open_document(&self, path: &Path) -> Result<(), EditorError> {
            self.inner.lock().opened.push(path.to_path_buf());
            Ok(())
        }

        fn begin_progress(&self, _title: &str) -> ProgressScope {
            self.inner.lock().progress_begun += 1;
            let inner = Arc::clone(&self.inner);
            ProgressScope::new(move || inner.lock().progress_ended += 1)
        }

        fn diagnostic(&self, line: &str) {
            self.inner.lock().diagnostics.push(line.to_string());
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeEditorAdapter, Notification};

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;
