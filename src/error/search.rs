//! Storefront search and input validation errors

use super::PickerError;

/// Creates an input validation error
pub fn invalid_input(message: impl Into<String>) -> PickerError {
    PickerError::InvalidInput {
        message: message.into(),
    }
}

/// Creates a storefront transport or protocol error
pub fn network(message: impl Into<String>) -> PickerError {
    PickerError::Network {
        message: message.into(),
    }
}
