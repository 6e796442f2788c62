//! Capture dispatcher: platform-selected screenshot backends
//!
//! This module provides the abstraction for taking a screenshot. The real
//! pixel work always happens in an external OS utility; a [`Capturer`]
//! implementation only knows which command to run and how to interpret its
//! exit status. One implementation exists per supported platform, selected
//! once at startup by [`create_capturer`], plus a [`MockCapturer`] for tests.

use std::path::Path;

use async_trait::async_trait;

use crate::error::{ShotResult, ShotclipError};
use crate::model::Platform;

pub mod command;
pub mod mock;

pub use command::{PowershellCapturer, ScreencaptureCapturer, ScrotCapturer};
pub use mock::MockCapturer;

/// Trait for screenshot capture backends
///
/// Implementations produce an image file at `output` as a side effect and
/// report success solely through their `Result`; the file's contents are
/// whatever the underlying tool wrote. Implementations must be thread-safe
/// (`Send + Sync`) so a capturer can be shared behind a trait object.
#[async_trait]
pub trait Capturer: Send + Sync + std::fmt::Debug {
    /// Captures the screen into the file at `output`, overwriting it
    ///
    /// # Errors
    ///
    /// - [`ShotclipError::CommandLaunch`] if the capture tool cannot start
    /// - [`ShotclipError::CommandFailed`] if it exits nonzero
    async fn capture(&self, output: &Path) -> ShotResult<()>;
}

/// Selects the capture backend for the given platform
///
/// # Errors
///
/// [`ShotclipError::UnsupportedPlatform`] when the platform has no command
/// mapping; no output file is produced in that case.
pub fn create_capturer(platform: Platform) -> ShotResult<Box<dyn Capturer>> {
    match platform {
        Platform::MacOS => Ok(Box::new(ScreencaptureCapturer)),
        Platform::Linux => Ok(Box::new(ScrotCapturer)),
        Platform::Windows => Ok(Box::new(PowershellCapturer)),
        Platform::Unknown => Err(ShotclipError::UnsupportedPlatform {
            os: platform.as_str().to_string(),
        }),
    }
}
