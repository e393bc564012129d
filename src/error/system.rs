//! Local system errors: Steam client presence, clipboard, console launch

use super::PickerError;

/// Creates a missing Steam client error
pub fn client_not_running(process: impl Into<String>) -> PickerError {
    PickerError::ClientNotRunning {
        process: process.into(),
    }
}

/// Creates a clipboard failure
pub fn clipboard_failed(reason: impl Into<String>) -> PickerError {
    PickerError::ClipboardFailed {
        reason: reason.into(),
    }
}

/// Creates a console launch failure
pub fn console_launch_failed(reason: impl Into<String>) -> PickerError {
    PickerError::ConsoleLaunchFailed {
        reason: reason.into(),
    }
}
