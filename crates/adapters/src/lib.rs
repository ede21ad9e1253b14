// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! clarity-adapters: seams between the command engine and its collaborators
//!
//! Two adapters: the process runner that launches the external generator,
//! and the editor surface that renders notifications, progress, and
//! documents. Each has a real implementation and a recording fake gated
//! behind the `test-support` feature.

pub mod console;
pub mod editor;
pub mod runner;
pub mod subprocess;

pub use console::ConsoleEditorAdapter;
pub use editor::{ActionChoice, EditorAdapter, EditorError, ProgressScope};
pub use runner::{ProcessRunnerAdapter, RunnerAdapter};
pub use subprocess::{run_streamed, RunnerError};

#[cfg(any(test, feature = "test-support"))]
pub use editor::{FakeEditorAdapter, Notification};
#[cfg(any(test, feature = "test-support"))]
pub use runner::{FakeRunnerAdapter, RunCall, ScriptedRun};
