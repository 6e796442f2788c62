//! Mock clipboard backend for tests
//!
//! Records published paths instead of touching the system clipboard, so
//! tests can assert that the pipeline handed the right file to the
//! publisher. Supports the same error injection as [`MockCapturer`].
//!
//! [`MockCapturer`]: crate::capture::MockCapturer

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use super::ClipboardPublisher;
use crate::error::{ShotResult, ShotclipError};

/// Mock clipboard backend
#[derive(Debug, Default)]
pub struct MockPublisher {
    /// Paths passed to `publish`, in call order
    published:   Mutex<Vec<PathBuf>>,
    /// When set, every publish fails with a `CommandLaunch` carrying this
    /// message instead of recording
    fail_launch: Option<String>,
}

impl MockPublisher {
    /// Creates a mock publisher that records every published path
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every publish fail as if the clipboard tool were missing
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            published:   Mutex::new(Vec::new()),
            fail_launch: Some(message.into()),
        }
    }

    /// Returns the paths published so far
    pub fn published(&self) -> Vec<PathBuf> {
        self.published.lock().expect("mock publisher lock").clone()
    }
}

#[async_trait]
impl ClipboardPublisher for MockPublisher {
    async fn publish(&self, image: &Path) -> ShotResult<()> {
        if let Some(ref message) = self.fail_launch {
            return Err(ShotclipError::CommandLaunch {
                command: "mock-clipboard".to_string(),
                source:  std::io::Error::new(std::io::ErrorKind::NotFound, message.clone()),
            });
        }

        self.published
            .lock()
            .expect("mock publisher lock")
            .push(image.to_path_buf());
        Ok(())
    }
}
