//! Shared test utilities for integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Deterministic PNG payload: file signature plus a few marker bytes
pub const FIXTURE_PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0xDE, 0xAD];

/// Writes the editor page and script the preview server expects under
/// `<root>/static`, returning their contents for byte-exact assertions
pub fn write_editor_assets(root: &Path) -> (Vec<u8>, Vec<u8>) {
    let static_dir = root.join("static");
    std::fs::create_dir_all(&static_dir).unwrap();

    let editor = b"<!DOCTYPE html><title>editor</title><canvas id=\"canvas\"></canvas>".to_vec();
    let script = b"const canvas = document.getElementById(\"canvas\");".to_vec();

    std::fs::write(static_dir.join("editor.html"), &editor).unwrap();
    std::fs::write(static_dir.join("script.js"), &script).unwrap();
    (editor, script)
}

/// Creates a directory of stub `scrot` and `xclip` executables for PATH
/// injection, so end-to-end runs never touch a real display or clipboard
///
/// The stub `scrot` copies a fixture file to its output argument (or exits
/// nonzero when `scrot_exit != 0`); the stub `xclip` just reports
/// `xclip_exit`.
#[cfg(unix)]
pub fn stub_tool_dir(root: &Path, scrot_exit: i32, xclip_exit: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let tools = root.join("tools");
    std::fs::create_dir_all(&tools).unwrap();
    std::fs::write(tools.join("fixture.png"), FIXTURE_PNG).unwrap();

    let scrot = if scrot_exit == 0 {
        "#!/bin/sh\ncp \"$(dirname \"$0\")/fixture.png\" \"$1\"\nexit 0\n".to_string()
    } else {
        format!("#!/bin/sh\nexit {scrot_exit}\n")
    };
    let xclip = format!("#!/bin/sh\nexit {xclip_exit}\n");

    for (name, body) in [("scrot", scrot), ("xclip", xclip)] {
        let path = tools.join(name);
        std::fs::write(&path, body).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
    tools
}

/// Prepends `dir` to the current PATH
#[cfg(unix)]
pub fn path_with(dir: &Path) -> String {
    let current = std::env::var("PATH").unwrap_or_default();
    format!("{}:{current}", dir.display())
}
