//! Command execution against the local OS.
//!
//! Commands run through the platform's default shell with the child's stdio
//! attached to this terminal, so editors, pagers, and nested prompts behave
//! normally. Callers block until the child exits; there is no timeout.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

use crate::error::ExecError;

mod clipboard;
mod platform;
mod quote;

pub use clipboard::{ClipboardWriter, SystemClipboard};
pub use platform::{shell_for, ShellInvocation};
pub use quote::{quote_if_needed, single_quote};

/// Runs a shell command string to completion.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &str) -> Result<(), ExecError>;
}

/// Runs commands through the default shell with inherited stdio.
#[derive(Debug, Clone, Copy)]
pub struct InteractiveRunner {
    shell: ShellInvocation,
}

impl InteractiveRunner {
    /// Runner for the current platform.
    pub fn detect() -> Result<Self, ExecError> {
        Self::for_os(std::env::consts::OS)
    }

    pub fn for_os(os: &str) -> Result<Self, ExecError> {
        Ok(Self {
            shell: shell_for(os)?,
        })
    }
}

#[async_trait]
impl CommandRunner for InteractiveRunner {
    async fn run(&self, command: &str) -> Result<(), ExecError> {
        tracing::debug!(shell = self.shell.program, "running command");
        let status = Command::new(self.shell.program)
            .arg(self.shell.flag)
            .arg(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| ExecError::Spawn {
                program: self.shell.program.to_string(),
                source,
            })?;

        if status.success() {
            return Ok(());
        }
        Err(ExecError::Failed {
            command: command.to_string(),
            exit_code: status.code(),
        })
    }
}
