// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Two-phase extraction of the structured result from generator stdout.
//!
//! Phase one is a tolerant scanner over raw text: every span from a `{` to
//! the next `}` is a candidate, whatever surrounds it. Phase two is a
//! strict parse-and-classify applied to the last candidate only. Log lines
//! and earlier diagnostic payloads are never guessed at.

use crate::result::GeneratorResult;
use thiserror::Error;

/// Errors from result extraction
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The last candidate span was not valid JSON. Earlier candidates are
    /// deliberately not retried.
    #[error("malformed result payload: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
        candidate: String,
    },
}

/// Find every payload candidate in `text`, in emission order.
///
/// A candidate runs from an opening brace to the first closing brace after
/// it (not nested-aware); scanning resumes past the close, so candidates
/// never overlap.
pub fn scan_candidates(text: &str) -> Vec<&str> {
    let mut candidates = Vec::new();
    let mut pos = 0;
    while let Some(open) = text[pos..].find('{') {
        let open = pos + open;
        let Some(close) = text[open..].find('}') else {
            break;
        };
        let close = open + close;
        candidates.push(&text[open..=close]);
        pos = close + 1;
    }
    candidates
}

/// Extract the authoritative structured result from accumulated stdout.
///
/// Returns `Ok(None)` when stdout holds no candidate at all, or when the
/// last candidate parses but matches neither known shape. Fails when the
/// last candidate is malformed JSON.
pub fn extract(stdout: &str) -> Result<Option<GeneratorResult>, ExtractError> {
    let Some(last) = scan_candidates(stdout).last().copied() else {
        return Ok(None);
    };
    let value: serde_json::Value =
        serde_json::from_str(last).map_err(|source| ExtractError::Malformed {
            source,
            candidate: last.to_string(),
        })?;
    Ok(GeneratorResult::classify(&value))
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
