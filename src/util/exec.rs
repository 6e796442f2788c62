//! Shared runner for external OS commands
//!
//! Both the capture dispatcher and the clipboard publisher delegate their
//! real work to external executables. This module owns the one way we invoke
//! them: spawn, wait for exit, and map the two failure sites (spawn error,
//! nonzero exit) onto [`ShotclipError`] variants. No timeout is imposed; a
//! hung external tool hangs the run, matching the sequential design.

use std::ffi::OsString;

use tokio::process::Command;
use tracing::debug;

use crate::error::{ShotResult, ShotclipError};

/// A fully-assembled external command, ready to run
#[derive(Debug, Clone)]
pub struct ExternalCommand {
    program: String,
    args:    Vec<OsString>,
}

impl ExternalCommand {
    /// Creates a command for the given program
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args:    Vec::new(),
        }
    }

    /// Appends one argument
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// The program name, used in error context
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full command line for logging
    pub fn describe(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }

    /// Runs the command to completion, inheriting stdio
    ///
    /// # Errors
    ///
    /// - [`ShotclipError::CommandLaunch`] if the program cannot be spawned
    ///   (typically not installed or not on PATH)
    /// - [`ShotclipError::CommandFailed`] if it exits nonzero
    pub async fn run(&self) -> ShotResult<()> {
        debug!(command = %self.describe(), "running external command");

        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .await
            .map_err(|source| ShotclipError::CommandLaunch {
                command: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(ShotclipError::CommandFailed {
                command: self.program.clone(),
                status,
            });
        }

        Ok(())
    }
}
