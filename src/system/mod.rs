//! Local side effects: Steam client detection, clipboard, console launch
//!
//! Each effect sits behind a small trait so the interaction flow can run
//! against fakes in tests.

pub mod clipboard;
pub mod launcher;
pub mod process;

pub use clipboard::{Clipboard, SystemClipboard};
pub use launcher::{ConsoleLauncher, SteamConsoleLauncher};
pub use process::{default_client_process, ensure_client_running};
