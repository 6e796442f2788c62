//! Data models for shotclip
//!
//! Defines the host platform identifier used for command dispatch and the
//! immutable per-run configuration that travels through the pipeline.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Host platforms with a known capture/clipboard command mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS: screencapture + osascript
    MacOS,
    /// Linux: scrot + xclip
    Linux,
    /// Windows: powershell (System.Windows.Forms)
    Windows,
    /// Anything else; capture and clipboard dispatch will fail
    Unknown,
}

impl Platform {
    /// Maps an OS identifier (as in `std::env::consts::OS`) to a platform
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Platform::MacOS,
            "linux" => Platform::Linux,
            "windows" => Platform::Windows,
            _ => Platform::Unknown,
        }
    }

    /// Returns the platform as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::MacOS => "macos",
            Platform::Linux => "linux",
            Platform::Windows => "windows",
            Platform::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration for a single run, immutable after CLI parsing
///
/// The output path, static asset locations, and port are explicit values
/// here rather than constants consulted deep in the call chain, so tests
/// (and any future orchestration) can point a run at their own files.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Start the preview server after capture
    pub serve:       bool,
    /// Preview server listen port
    pub port:        u16,
    /// Countdown seconds before capture (0 = no countdown)
    pub timer:       u64,
    /// Where the captured image is written (overwritten each run)
    pub output_path: PathBuf,
    /// Directory of static editor assets served under /static
    pub static_dir:  PathBuf,
    /// The editor page served at the root route
    pub editor_page: PathBuf,
}

impl RunConfig {
    /// Default captured image filename, relative to the working directory
    pub const DEFAULT_OUTPUT_FILE: &'static str = "screenshot.png";
    /// Default preview server port
    pub const DEFAULT_PORT: u16 = 8080;

    /// Loopback listen address for the configured port
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), self.port)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            serve:       false,
            port:        Self::DEFAULT_PORT,
            timer:       0,
            output_path: PathBuf::from(Self::DEFAULT_OUTPUT_FILE),
            static_dir:  PathBuf::from("static"),
            editor_page: PathBuf::from("static/editor.html"),
        }
    }
}
