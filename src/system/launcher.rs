//! Opening the Steam console through the platform URL handler

use std::process::{Command, Stdio};

use crate::error::{Result, system};

/// URI the Steam client registers to show its developer console
pub const STEAM_CONSOLE_URI: &str = "steam://open/console";

pub trait ConsoleLauncher {
    fn open_console(&self) -> Result<()>;
}

/// Hands [`STEAM_CONSOLE_URI`] to the OS opener
#[derive(Debug, Default, Clone, Copy)]
pub struct SteamConsoleLauncher;

/// Program and arguments that open `uri` with the desktop's handler
pub fn opener_command(uri: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "windows") {
        // `start` treats its first quoted argument as a window title
        (
            "cmd",
            vec!["/C".into(), "start".into(), String::new(), uri.into()],
        )
    } else if cfg!(target_os = "macos") {
        ("open", vec![uri.into()])
    } else {
        ("xdg-open", vec![uri.into()])
    }
}

impl ConsoleLauncher for SteamConsoleLauncher {
    fn open_console(&self) -> Result<()> {
        let (program, args) = opener_command(STEAM_CONSOLE_URI);
        tracing::debug!(program, ?args, "Opening Steam console");

        let status = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| system::console_launch_failed(format!("{program}: {e}")))?;

        if !status.success() {
            return Err(system::console_launch_failed(format!(
                "{program} exited with {status}"
            )));
        }
        Ok(())
    }
}
