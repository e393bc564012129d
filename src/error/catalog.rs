//! Steam session and product lookup errors

use super::PickerError;

/// Creates an anonymous login failure
pub fn auth_failed(reason: impl Into<String>) -> PickerError {
    PickerError::AuthFailed {
        reason: reason.into(),
    }
}

/// Creates a product info lookup failure
pub fn lookup_failed(app_id: u32, reason: impl Into<String>) -> PickerError {
    PickerError::LookupFailed {
        app_id,
        reason: reason.into(),
    }
}
