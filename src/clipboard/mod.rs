//! Clipboard publisher: platform-selected clipboard-copy backends
//!
//! A [`ClipboardPublisher`] places the captured image file's contents on the
//! system clipboard by running one external command. Clipboard state is not
//! observable from here, so success is best-effort: the command's exit
//! status is trusted and never verified by reading the clipboard back.

use std::path::Path;

use async_trait::async_trait;

use crate::error::{ShotResult, ShotclipError};
use crate::model::Platform;

pub mod command;
pub mod mock;

pub use command::{OsascriptPublisher, PowershellPublisher, XclipPublisher};
pub use mock::MockPublisher;

/// Trait for clipboard-copy backends
#[async_trait]
pub trait ClipboardPublisher: Send + Sync + std::fmt::Debug {
    /// Copies the image file at `image` onto the system clipboard
    ///
    /// The file must already exist; that is the capture step's contract,
    /// not validated again here.
    ///
    /// # Errors
    ///
    /// - [`ShotclipError::CommandLaunch`] if the clipboard tool cannot start
    /// - [`ShotclipError::CommandFailed`] if it exits nonzero
    async fn publish(&self, image: &Path) -> ShotResult<()>;
}

/// Selects the clipboard backend for the given platform
///
/// # Errors
///
/// [`ShotclipError::UnsupportedPlatform`] when the platform has no command
/// mapping.
pub fn create_publisher(platform: Platform) -> ShotResult<Box<dyn ClipboardPublisher>> {
    match platform {
        Platform::MacOS => Ok(Box::new(OsascriptPublisher)),
        Platform::Linux => Ok(Box::new(XclipPublisher)),
        Platform::Windows => Ok(Box::new(PowershellPublisher)),
        Platform::Unknown => Err(ShotclipError::UnsupportedPlatform {
            os: platform.as_str().to_string(),
        }),
    }
}
