// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The structured result the generator embeds in its stdout.
//!
//! The wire format is loose JSON from an external process; it is validated
//! here into a closed variant at the boundary. Anything not matching one of
//! the two known shapes is unrecognized, never a usable result.

use serde::Deserialize;
use std::path::PathBuf;

/// A recognized generator result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorResult {
    /// The generator completed but reports a problem with the project
    /// being documented. The message is authoritative and shown verbatim.
    Error { message: String },
    /// Documentation was generated.
    Success { message: String, readme_path: PathBuf },
}

/// Wire shape `{"error": "<message>", ...}`. The generator attaches extra
/// fields (`error_type`, `error_message`); they are ignored.
#[derive(Deserialize)]
struct ErrorShape {
    error: String,
}

/// Wire shape `{"success": true, "message": ..., "readme_path": ...}`.
#[derive(Deserialize)]
struct SuccessShape {
    success: bool,
    message: String,
    readme_path: PathBuf,
}

impl GeneratorResult {
    /// Classify a parsed payload against the two known wire shapes.
    ///
    /// The error shape wins when a payload somehow carries both. A success
    /// shape with `success` anything but `true` is unrecognized.
    pub fn classify(value: &serde_json::Value) -> Option<Self> {
        if let Ok(shape) = ErrorShape::deserialize(value) {
            return Some(GeneratorResult::Error { message: shape.error });
        }
        if let Ok(shape) = SuccessShape::deserialize(value) {
            if shape.success {
                return Some(GeneratorResult::Success {
                    message: shape.message,
                    readme_path: shape.readme_path,
                });
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
