//! External-command capture backends
//!
//! Each backend wraps exactly one OS utility invocation. The output path is
//! passed through verbatim; overwrite semantics are the external tool's.

use std::path::Path;

use async_trait::async_trait;

use super::Capturer;
use crate::error::ShotResult;
use crate::util::exec::ExternalCommand;

/// macOS capture via the system `screencapture` utility
#[derive(Debug)]
pub struct ScreencaptureCapturer;

#[async_trait]
impl Capturer for ScreencaptureCapturer {
    async fn capture(&self, output: &Path) -> ShotResult<()> {
        ExternalCommand::new("screencapture")
            .arg(output.as_os_str())
            .run()
            .await
    }
}

/// Linux capture via `scrot`
#[derive(Debug)]
pub struct ScrotCapturer;

#[async_trait]
impl Capturer for ScrotCapturer {
    async fn capture(&self, output: &Path) -> ShotResult<()> {
        ExternalCommand::new("scrot")
            .arg(output.as_os_str())
            .run()
            .await
    }
}

/// Windows capture via a PowerShell `System.Windows.Forms` screen copy
#[derive(Debug)]
pub struct PowershellCapturer;

#[async_trait]
impl Capturer for PowershellCapturer {
    async fn capture(&self, output: &Path) -> ShotResult<()> {
        ExternalCommand::new("powershell")
            .arg("-command")
            .arg(capture_script(output))
            .run()
            .await
    }
}

/// Builds the PowerShell script that grabs the primary screen
fn capture_script(output: &Path) -> String {
    format!(
        "Add-Type -AssemblyName System.Windows.Forms; \
         Add-Type -AssemblyName System.Drawing; \
         $bounds = [System.Windows.Forms.Screen]::PrimaryScreen.Bounds; \
         $bitmap = New-Object System.Drawing.Bitmap($bounds.Width, $bounds.Height); \
         $graphics = [System.Drawing.Graphics]::FromImage($bitmap); \
         $graphics.CopyFromScreen(0, 0, 0, 0, $bitmap.Size); \
         $bitmap.Save({});",
        powershell_quote(output)
    )
}

/// Quotes a path as a single-quoted PowerShell string literal
pub(crate) fn powershell_quote(path: &Path) -> String {
    format!("'{}'", path.to_string_lossy().replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_capture_script_embeds_output_path() {
        let script = capture_script(Path::new("screenshot.png"));

        assert!(script.contains("CopyFromScreen"));
        assert!(script.contains("$bitmap.Save('screenshot.png');"));
    }

    #[test]
    fn test_powershell_quote_escapes_single_quotes() {
        let path = PathBuf::from("it's a shot.png");
        assert_eq!(powershell_quote(&path), "'it''s a shot.png'");
    }
}
