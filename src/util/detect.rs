//! Host platform detection
//!
//! Resolves the compile-time OS identifier to a [`Platform`] once at
//! startup. The string-based indirection exists so tests can exercise the
//! unsupported-platform path without cross-compiling.

use crate::model::Platform;

/// Detects the platform the program is running on
///
/// # Examples
///
/// ```
/// use shotclip::util::detect::detect_platform;
///
/// let platform = detect_platform();
/// println!("Running on: {platform}");
/// ```
pub fn detect_platform() -> Platform {
    Platform::from_os(std::env::consts::OS)
}
