//! Configuration and record file errors

use super::PickerError;

/// Creates a config read error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> PickerError {
    PickerError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config parse error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PickerError {
    PickerError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a record write error
pub fn record_write_failed(path: impl Into<String>, reason: impl Into<String>) -> PickerError {
    PickerError::RecordWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
