// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! clarity-engine: orchestration of the documentation-generation command
//!
//! Ties the adapters together: validates the invocation preconditions,
//! resolves the generator's installed paths, drives the run inside a
//! progress scope, and renders the outcome through the editor surface.

pub mod generate;
pub mod layout;
pub mod registry;

pub use generate::{
    GenerateDocsCommand, ALREADY_RUNNING, NO_FOLDER_OPEN, OPEN_README_ACTION, PROGRESS_TITLE,
};
pub use layout::InstallLayout;
pub use registry::{Command, CommandRegistry, Registration, RegistryError};
