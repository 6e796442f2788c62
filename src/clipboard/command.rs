//! External-command clipboard backends

use std::path::Path;

use async_trait::async_trait;

use super::ClipboardPublisher;
use crate::capture::command::powershell_quote;
use crate::error::ShotResult;
use crate::util::exec::ExternalCommand;

/// macOS clipboard copy via `osascript`, reading the file as PNG class data
#[derive(Debug)]
pub struct OsascriptPublisher;

#[async_trait]
impl ClipboardPublisher for OsascriptPublisher {
    async fn publish(&self, image: &Path) -> ShotResult<()> {
        ExternalCommand::new("osascript")
            .arg("-e")
            .arg(osascript_expression(image))
            .run()
            .await
    }
}

/// Linux clipboard copy via `xclip` with the image/png target
#[derive(Debug)]
pub struct XclipPublisher;

#[async_trait]
impl ClipboardPublisher for XclipPublisher {
    async fn publish(&self, image: &Path) -> ShotResult<()> {
        ExternalCommand::new("xclip")
            .arg("-selection")
            .arg("clipboard")
            .arg("-t")
            .arg("image/png")
            .arg("-i")
            .arg(image.as_os_str())
            .run()
            .await
    }
}

/// Windows clipboard copy via PowerShell `Clipboard::SetImage`
#[derive(Debug)]
pub struct PowershellPublisher;

#[async_trait]
impl ClipboardPublisher for PowershellPublisher {
    async fn publish(&self, image: &Path) -> ShotResult<()> {
        ExternalCommand::new("powershell")
            .arg("-command")
            .arg(clipboard_script(image))
            .run()
            .await
    }
}

/// AppleScript expression that sets the clipboard to the file's PNG data
fn osascript_expression(image: &Path) -> String {
    format!(
        "set the clipboard to (read (POSIX file \"{}\") as \u{ab}class PNGf\u{bb})",
        image.to_string_lossy().replace('"', "\\\"")
    )
}

/// PowerShell script that loads the image file and puts it on the clipboard
fn clipboard_script(image: &Path) -> String {
    format!(
        "Add-Type -AssemblyName System.Drawing; \
         Add-Type -AssemblyName System.Windows.Forms; \
         $bitmap = [System.Drawing.Bitmap]::FromFile({}); \
         [System.Windows.Forms.Clipboard]::SetImage($bitmap);",
        powershell_quote(image)
    )
}
