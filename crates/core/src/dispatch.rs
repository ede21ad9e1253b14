// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! State-free mapping from a finished run to the user-visible outcome.

use crate::extract::ExtractError;
use crate::process::ProcessOutcome;
use crate::result::GeneratorResult;
use std::path::PathBuf;

/// User-facing message when stdout held no recognizable result payload.
pub const COULD_NOT_INTERPRET: &str =
    "Could not interpret the documentation generator's output.";

/// The final disposition of one invocation. Produced exactly once, consumed
/// immediately by the editor surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The generator's own verdict about the project; shown verbatim
    DomainError { message: String },
    /// Documentation was generated at `readme_path`
    Success { message: String, readme_path: PathBuf },
    /// Launching, running, or interpreting the generator failed. The
    /// message is user-safe; the detail goes to the diagnostic channel only
    Infrastructure { message: String, detail: String },
}

/// Map a run plus its extraction to exactly one outcome.
///
/// The exit-code check dominates: for a nonzero or signal exit the
/// extraction argument is not inspected at all.
pub fn dispatch(
    run: &ProcessOutcome,
    extraction: Result<Option<GeneratorResult>, ExtractError>,
) -> Outcome {
    match run.exit_code {
        Some(0) => {}
        Some(code) => {
            return Outcome::Infrastructure {
                message: format!("Documentation generator failed (exit code {code})."),
                detail: run.stderr.clone(),
            }
        }
        None => {
            return Outcome::Infrastructure {
                message: "Documentation generator was terminated by a signal.".to_string(),
                detail: run.stderr.clone(),
            }
        }
    }

    match extraction {
        Ok(Some(GeneratorResult::Error { message })) => Outcome::DomainError { message },
        Ok(Some(GeneratorResult::Success { message, readme_path })) => {
            Outcome::Success { message, readme_path }
        }
        Ok(None) => Outcome::Infrastructure {
            message: COULD_NOT_INTERPRET.to_string(),
            detail: run.stdout.clone(),
        },
        Err(err) => Outcome::Infrastructure {
            message: COULD_NOT_INTERPRET.to_string(),
            detail: format!("{err}\n--- stdout ---\n{}", run.stdout),
        },
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
