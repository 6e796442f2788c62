//! Error types for the capture/clipboard/serve pipeline
//!
//! Every stage of the run reports failure through [`ShotclipError`] and lets
//! the caller decide what to do with it; only the binary entry point turns an
//! error into a process exit. Each variant carries enough context for a
//! useful log line and provides a remediation hint via
//! [`remediation_hint()`](ShotclipError::remediation_hint).

use std::net::SocketAddr;
use std::process::ExitStatus;

/// Result type alias for pipeline operations
pub type ShotResult<T> = Result<T, ShotclipError>;

/// Error type covering platform dispatch, external commands, and the preview
/// server listener
#[derive(Debug, thiserror::Error)]
pub enum ShotclipError {
    /// The host OS has no capture/clipboard command mapping
    #[error("Unsupported operating system: {os}")]
    UnsupportedPlatform {
        /// OS identifier as reported by the host (e.g. "freebsd")
        os: String,
    },

    /// An external command could not be started at all
    #[error("Failed to launch '{command}': {source}")]
    CommandLaunch {
        /// The program that failed to spawn
        command: String,
        /// Underlying spawn error
        source:  std::io::Error,
    },

    /// An external command ran but reported failure
    #[error("Command '{command}' failed ({status})")]
    CommandFailed {
        /// The program that failed
        command: String,
        /// Exit status reported by the OS
        status:  ExitStatus,
    },

    /// The preview server could not bind its listen address
    #[error("Failed to bind preview server on {addr}: {source}")]
    ListenerBind {
        /// Address the server tried to bind
        addr:   SocketAddr,
        /// Underlying bind error
        source: std::io::Error,
    },

    /// I/O error outside the cases above
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShotclipError {
    /// Returns an actionable remediation hint for this error
    ///
    /// Names the missing external tool or the conflicting resource where
    /// that can be inferred from the error context.
    pub fn remediation_hint(&self) -> &str {
        match self {
            ShotclipError::UnsupportedPlatform { .. } => {
                "shotclip supports macOS (screencapture/osascript), Linux (scrot/xclip), and \
                 Windows (powershell). Run it on one of those platforms."
            }
            ShotclipError::CommandLaunch { command, .. } => {
                match command.split_whitespace().next().unwrap_or_default() {
                    "scrot" => {
                        "Install scrot (e.g. 'apt install scrot' or 'pacman -S scrot') and ensure \
                         it is on PATH."
                    }
                    "xclip" => {
                        "Install xclip with image/png target support (e.g. 'apt install xclip') \
                         and ensure it is on PATH."
                    }
                    "screencapture" | "osascript" => {
                        "screencapture and osascript ship with macOS. Check PATH and grant screen \
                         recording permission in System Settings > Privacy & Security."
                    }
                    "powershell" => {
                        "powershell ships with Windows. Ensure it is on PATH and not blocked by \
                         execution policy."
                    }
                    _ => "Ensure the external tool is installed and on PATH.",
                }
            }
            ShotclipError::CommandFailed { .. } => {
                "The external tool started but reported failure. Re-run with RUST_LOG=debug to \
                 see the exact command line, then run it manually to see the tool's own error \
                 output."
            }
            ShotclipError::ListenerBind { .. } => {
                "Another process is already listening on that port. Pick a free port with --port, \
                 or stop the other process."
            }
            ShotclipError::Io(_) => {
                "An I/O error occurred. Check file permissions, disk space, and that the working \
                 directory is writable."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_platform_message() {
        let error = ShotclipError::UnsupportedPlatform {
            os: "freebsd".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("Unsupported operating system"));
        assert!(msg.contains("freebsd"));

        let hint = error.remediation_hint();
        assert!(hint.contains("macOS"));
        assert!(hint.contains("scrot"));
    }

    #[test]
    fn test_command_launch_message() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file");
        let error = ShotclipError::CommandLaunch {
            command: "scrot screenshot.png".to_string(),
            source,
        };

        let msg = error.to_string();
        assert!(msg.contains("Failed to launch"));
        assert!(msg.contains("scrot"));
    }

    #[test]
    fn test_command_launch_hint_names_missing_tool() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file");
        let error = ShotclipError::CommandLaunch {
            command: "xclip -selection clipboard".to_string(),
            source,
        };

        assert!(error.remediation_hint().contains("xclip"));
    }

    #[test]
    fn test_command_launch_hint_unknown_tool_is_generic() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file");
        let error = ShotclipError::CommandLaunch {
            command: "frobnicate".to_string(),
            source,
        };

        assert!(error.remediation_hint().contains("installed and on PATH"));
    }

    #[test]
    fn test_listener_bind_message() {
        let addr: SocketAddr = "127.0.0.1:8080".parse().unwrap();
        let source = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let error = ShotclipError::ListenerBind { addr, source };

        let msg = error.to_string();
        assert!(msg.contains("127.0.0.1:8080"));
        assert!(msg.contains("bind"));

        let hint = error.remediation_hint();
        assert!(hint.contains("--port"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: ShotclipError = io_error.into();

        assert!(error.to_string().contains("I/O error"));
        assert!(error.remediation_hint().contains("permissions"));
    }
}
