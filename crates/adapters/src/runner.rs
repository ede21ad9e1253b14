// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process runner seam between the engine and the external generator.

use crate::subprocess::{run_streamed, RunnerError};
use async_trait::async_trait;
use clarity_core::ProcessOutcome;
use std::path::Path;
use std::time::Duration;

/// Adapter for launching the generator executable
#[async_trait]
pub trait RunnerAdapter: Clone + Send + Sync + 'static {
    /// Launch `executable` with `args` and stream its output to completion
    async fn run(&self, executable: &Path, args: &[String])
        -> Result<ProcessOutcome, RunnerError>;
}

/// Subprocess-backed runner used by real hosts.
#[derive(Clone, Debug, Default)]
pub struct ProcessRunnerAdapter {
    timeout: Option<Duration>,
}

impl ProcessRunnerAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill the generator and fail the run if it outlives `timeout`.
    /// `None` (the default) waits indefinitely.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl RunnerAdapter for ProcessRunnerAdapter {
    async fn run(
        &self,
        executable: &Path,
        args: &[String],
    ) -> Result<ProcessOutcome, RunnerError> {
        run_streamed(executable, args, self.timeout).await
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{RunnerAdapter, RunnerError};
    use async_trait::async_trait;
    use clarity_core::ProcessOutcome;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use std::time::Duration;

    /// Recorded launch attempt
    #[derive(Debug, Clone)]
    pub struct RunCall {
        pub executable: PathBuf,
        pub args: Vec<String>,
    }

    /// One scripted response for the fake runner
    #[derive(Debug, Clone)]
    pub enum ScriptedRun {
        /// The process runs and terminates with this outcome
        Completes(ProcessOutcome),
        /// Same, after holding the in-flight state for `delay`
        CompletesAfter(Duration, ProcessOutcome),
        /// The executable cannot be launched
        FailsToStart(String),
        /// The configured timeout elapses
        TimesOut,
    }

    struct FakeRunnerState {
        calls: Vec<RunCall>,
        script: VecDeque<ScriptedRun>,
    }

    /// Fake runner for testing: records every launch and replays a script
    #[derive(Clone)]
    pub struct FakeRunnerAdapter {
        inner: Arc<Mutex<FakeRunnerState>>,
    }

    impl Default for FakeRunnerAdapter {
        fn default() -> Self {
            Self {
                inner: Arc::new(Mutex::new(FakeRunnerState {
                    calls: Vec::new(),
                    script: VecDeque::new(),
                })),
            }
        }
    }

    impl FakeRunnerAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue the next scripted response
        pub fn expect(self, run: ScriptedRun) -> Self {
            self.inner.lock().script.push_back(run);
            self
        }

        /// Every launch recorded so far
        pub fn calls(&self) -> Vec<RunCall> {
            self.inner.lock().calls.clone()
        }
    }

    #[async_trait]
    impl RunnerAdapter for FakeRunnerAdapter {
        async fn run(
            &self,
            executable: &Path,
            args: &[String],
        ) -> Result<ProcessOutcome, RunnerError> {
            let scripted = {
                let mut state = self.inner.lock();
                state.calls.push(RunCall {
                    executable: executable.to_path_buf(),
                    args: args.to_vec(),
                });
                state.script.pop_front()
            };
            match scripted {
                Some(ScriptedRun::Completes(outcome)) => Ok(outcome),
                Some(ScriptedRun::CompletesAfter(delay, outcome)) => {
                    tokio::time::sleep(delay).await;
                    Ok(outcome)
                }
                Some(ScriptedRun::FailsToStart(reason)) => Err(RunnerError::Spawn {
                    command: executable.display().to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, reason),
                }),
                Some(ScriptedRun::TimesOut) => Err(RunnerError::TimedOut { timeout_secs: 0 }),
                None => Err(RunnerError::Spawn {
                    command: executable.display().to_string(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "fake runner: no scripted run queued",
                    ),
                }),
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeRunnerAdapter, RunCall, ScriptedRun};
