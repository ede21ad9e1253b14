// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `clarity generate`: run the documentation-generation command once.

use crate::exit_error::ExitError;
use anyhow::{Context, Result};
use clap::Args;
use clarity_adapters::{ConsoleEditorAdapter, ProcessRunnerAdapter};
use clarity_core::Outcome;
use clarity_engine::{CommandRegistry, GenerateDocsCommand, InstallLayout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Id under which the host registers the command
pub const GENERATE_COMMAND_ID: &str = "clarity.generate-docs";

#[derive(Args)]
pub struct GenerateArgs {
    /// Project root to document (defaults to the current directory)
    pub project: Option<PathBuf>,

    /// Installation directory holding the bundled generator
    /// (defaults to the directory of this executable)
    #[arg(long)]
    pub install_dir: Option<PathBuf>,

    /// Kill the generator if it runs longer than this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Open the generated README on success
    #[arg(long)]
    pub open: bool,
}

pub async fn generate(args: GenerateArgs) -> Result<()> {
    let project = match args.project {
        Some(path) => Some(path),
        None => std::env::current_dir().ok(),
    };
    if let Some(path) = &project {
        if !path.is_dir() {
            return Err(ExitError::new(
                2,
                format!("project path is not a directory: {}", path.display()),
            )
            .into());
        }
    }
    let install_dir = match args.install_dir {
        Some(dir) => dir,
        None => default_install_dir()?,
    };

    let editor = ConsoleEditorAdapter::new().open_on_success(args.open);
    let runner =
        ProcessRunnerAdapter::new().timeout(args.timeout_secs.map(Duration::from_secs));
    let command = GenerateDocsCommand::new(runner, editor, InstallLayout::new(install_dir))
        .workspace_root(project);

    // One-time registration; the handle is retained until the host exits
    let registry = CommandRegistry::new();
    let _registration = registry.register(GENERATE_COMMAND_ID, Arc::new(command));

    match registry.invoke(GENERATE_COMMAND_ID).await? {
        Outcome::Success { .. } => Ok(()),
        Outcome::DomainError { .. } => Err(ExitError::silent(1).into()),
        Outcome::Infrastructure { .. } => Err(ExitError::silent(2).into()),
    }
}

fn default_install_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("could not locate this executable")?;
    let dir = exe.parent().context("executable has no parent directory")?;
    Ok(dir.to_path_buf())
}
