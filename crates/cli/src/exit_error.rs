// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type carrying the process exit status.
//!
//! Command handlers return `ExitError` instead of calling
//! `std::process::exit()` mid-flight; `main()` owns process termination.
//! A silent exit is for failures already rendered through the editor
//! surface, where printing again would duplicate the notification.

use std::fmt;

#[derive(Debug)]
pub struct ExitError {
    code: i32,
    message: Option<String>,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: Some(message.into()) }
    }

    /// Exit with a status code and no extra output.
    pub fn silent(code: i32) -> Self {
        Self { code, message: None }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{message}"),
            None => write!(f, "exit status {}", self.code),
        }
    }
}

impl std::error::Error for ExitError {}
