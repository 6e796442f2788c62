//! Mock capture backend for tests
//!
//! Implements [`Capturer`] without running any external command: it writes a
//! deterministic payload to the output path. Builders allow simulating slow
//! captures (`with_delay`) and failing captures (`with_error`), mirroring the
//! failure modes of the real command backends.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use super::Capturer;
use crate::error::{ShotResult, ShotclipError};

/// Default payload: the PNG file signature, enough for byte-exact assertions
pub const MOCK_PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Mock capture backend
#[derive(Debug)]
pub struct MockCapturer {
    /// Optional delay to simulate a slow external tool
    delay:           Option<Duration>,
    /// Optional error to inject instead of writing the file
    error_injection: Option<ShotclipError>,
    /// Bytes written to the output path on success
    payload:         Vec<u8>,
}

impl MockCapturer {
    /// Creates a mock capturer that writes [`MOCK_PNG_BYTES`]
    pub fn new() -> Self {
        Self {
            delay:           None,
            error_injection: None,
            payload:         MOCK_PNG_BYTES.to_vec(),
        }
    }

    /// Sets a delay applied before every capture
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Injects an error returned by every capture; no file is written
    pub fn with_error(mut self, error: ShotclipError) -> Self {
        self.error_injection = Some(error);
        self
    }

    /// Overrides the payload written on success
    pub fn with_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    /// Rebuilds the injected error, if any
    ///
    /// `ShotclipError` holds `std::io::Error` values and is not `Clone`, so
    /// the variants are reconstructed field by field, as close to the
    /// original as `io::Error` allows.
    fn check_error_injection(&self) -> ShotResult<()> {
        if let Some(ref error) = self.error_injection {
            return Err(match error {
                ShotclipError::UnsupportedPlatform { os } => {
                    ShotclipError::UnsupportedPlatform { os: os.clone() }
                }
                ShotclipError::CommandLaunch { command, source } => ShotclipError::CommandLaunch {
                    command: command.clone(),
                    source:  std::io::Error::new(source.kind(), source.to_string()),
                },
                ShotclipError::CommandFailed { command, status } => ShotclipError::CommandFailed {
                    command: command.clone(),
                    status:  *status,
                },
                ShotclipError::ListenerBind { addr, source } => ShotclipError::ListenerBind {
                    addr:   *addr,
                    source: std::io::Error::new(source.kind(), source.to_string()),
                },
                ShotclipError::Io(source) => {
                    ShotclipError::Io(std::io::Error::new(source.kind(), source.to_string()))
                }
            });
        }
        Ok(())
    }
}

impl Default for MockCapturer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Capturer for MockCapturer {
    async fn capture(&self, output: &Path) -> ShotResult<()> {
        if let Some(delay) = self.delay {
            sleep(delay).await;
        }
        self.check_error_injection()?;

        tokio::fs::write(output, &self.payload).await?;
        Ok(())
    }
}
