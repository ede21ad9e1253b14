// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Explicit command registration with disposable handles.
//!
//! The host registers its commands once during initialization and retains
//! the returned handles; dropping a handle unregisters the command. There
//! is no ambient registry singleton.

use async_trait::async_trait;
use clarity_adapters::EditorError;
use clarity_core::Outcome;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use thiserror::Error;

/// Errors from command dispatch
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error(transparent)]
    Editor(#[from] EditorError),
}

/// A host-invocable command. Commands take no parameters; their context is
/// fixed at registration time.
#[async_trait]
pub trait Command: Send + Sync + 'static {
    async fn invoke(&self) -> Result<Outcome, EditorError>;
}

type CommandMap = Mutex<HashMap<String, Arc<dyn Command>>>;

/// Registry of host-invocable commands
#[derive(Clone, Default)]
pub struct CommandRegistry {
    commands: Arc<CommandMap>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `command` under `id`. The returned handle unregisters the
    /// command when dropped; the host retains it for its lifetime.
    pub fn register(&self, id: impl Into<String>, command: Arc<dyn Command>) -> Registration {
        let id = id.into();
        tracing::debug!(%id, "command registered");
        self.commands.lock().insert(id.clone(), command);
        Registration { id, commands: Arc::downgrade(&self.commands) }
    }

    /// Invoke the command registered under `id`
    pub async fn invoke(&self, id: &str) -> Result<Outcome, RegistryError> {
        let command = self
            .commands
            .lock()
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownCommand(id.to_string()))?;
        Ok(command.invoke().await?)
    }
}

/// Disposable registration handle
pub struct Registration {
    id: String,
    commands: Weak<CommandMap>,
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Some(commands) = self.commands.upgrade() {
            tracing::debug!(id = %self.id, "command unregistered");
            commands.lock().remove(&self.id);
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
