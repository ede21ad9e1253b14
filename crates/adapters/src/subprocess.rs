// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Streamed subprocess execution for the generator process.
//!
//! Arguments are always passed as a discrete vector; nothing here goes
//! through a shell. Both output streams are drained concurrently into
//! append-only byte buffers, each in its own emission order, and the exit
//! status is observed last.

use clarity_core::ProcessOutcome;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::task::JoinHandle;

/// Errors from running the generator process
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The executable could not be launched at all
    #[error("failed to launch {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    /// The process outlived the configured timeout and was killed
    #[error("generator did not finish within {timeout_secs}s")]
    TimedOut { timeout_secs: u64 },
    /// I/O failure while waiting on the process or its streams
    #[error("failed to capture generator output: {0}")]
    Capture(#[from] std::io::Error),
}

/// Run `executable` with `args`, streaming stdout and stderr to completion.
///
/// With a `timeout`, the child is killed once it elapses and the run fails
/// with [`RunnerError::TimedOut`]; without one, the run waits indefinitely.
pub async fn run_streamed(
    executable: &Path,
    args: &[String],
    timeout: Option<Duration>,
) -> Result<ProcessOutcome, RunnerError> {
    let mut cmd = Command::new(executable);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = cmd.spawn().map_err(|source| RunnerError::Spawn {
        command: executable.display().to_string(),
        source,
    })?;

    // Drain each stream on its own task so neither pipe can fill while the
    // other is being read.
    let stdout_task = tokio::spawn(drain(child.stdout.take()));
    let stderr_task = tokio::spawn(drain(child.stderr.take()));

    let status = match timeout {
        Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
            Ok(waited) => waited,
            Err(_) => {
                let _ = child.start_kill();
                // Reap so the child does not linger as a zombie
                let _ = child.wait().await;
                return Err(RunnerError::TimedOut { timeout_secs: limit.as_secs() });
            }
        },
        None => child.wait().await,
    }?;

    // Streams hit EOF at termination; finalize each buffer exactly once
    let stdout = finalize(stdout_task).await?;
    let stderr = finalize(stderr_task).await?;

    let outcome = ProcessOutcome { exit_code: status.code(), stdout, stderr };
    tracing::debug!(
        exit_code = ?outcome.exit_code,
        stdout_bytes = outcome.stdout.len(),
        stderr_bytes = outcome.stderr.len(),
        "generator process exited"
    );
    Ok(outcome)
}

async fn drain<R>(stream: Option<R>) -> std::io::Result<Vec<u8>>
where
    R: tokio::io::AsyncRead + Unpin + Send + 'static,
{
    let mut buffer = Vec::new();
    if let Some(mut stream) = stream {
        stream.read_to_end(&mut buffer).await?;
    }
    Ok(buffer)
}

async fn finalize(task: JoinHandle<std::io::Result<Vec<u8>>>) -> Result<String, RunnerError> {
    let bytes = task
        .await
        .map_err(|join| std::io::Error::new(std::io::ErrorKind::Other, join))??;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
