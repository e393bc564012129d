//! Detecting a running Steam desktop client

use std::process::Command;

use crate::error::{Result, system};

/// Process name of the Steam client on this platform
pub fn default_client_process() -> &'static str {
    if cfg!(target_os = "windows") {
        "steam.exe"
    } else if cfg!(target_os = "macos") {
        "steam_osx"
    } else {
        "steam"
    }
}

/// Whether a process with exactly this name is running
pub fn is_process_running(name: &str) -> bool {
    if cfg!(target_os = "windows") {
        let filter = format!("IMAGENAME eq {name}");
        Command::new("tasklist")
            .args(["/FI", filter.as_str(), "/NH"])
            .output()
            .is_ok_and(|output| {
                output.status.success()
                    && String::from_utf8_lossy(&output.stdout)
                        .to_ascii_lowercase()
                        .contains(&name.to_ascii_lowercase())
            })
    } else {
        Command::new("pgrep")
            .arg("-x")
            .arg(name)
            .output()
            .is_ok_and(|output| output.status.success())
    }
}

/// Fail with a descriptive error when the Steam client is not running
pub fn ensure_client_running(process: &str) -> Result<()> {
    if is_process_running(process) {
        tracing::debug!(process, "Steam client detected");
        Ok(())
    } else {
        Err(system::client_not_running(process))
    }
}
