//! Error types and handling for depot-picker
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`search`]: Storefront search and input validation errors
//! - [`catalog`]: Steam session and product lookup errors
//! - [`system`]: Local client, clipboard and console errors
//! - [`config`]: Configuration and record file errors

pub mod catalog;
pub mod config;
pub mod search;
pub mod system;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for depot-picker operations
#[derive(Error, Diagnostic, Debug)]
pub enum PickerError {
    // Input errors
    #[error("Invalid input: {message}")]
    #[diagnostic(code(depot_picker::input::invalid))]
    InvalidInput { message: String },

    // Precondition errors
    #[error("Steam client is not running (looked for process '{process}')")]
    #[diagnostic(
        code(depot_picker::system::client_not_running),
        help("Start the Steam desktop client and try again, or pass --skip-client-check")
    )]
    ClientNotRunning { process: String },

    // Catalog errors
    #[error("Anonymous Steam login failed: {reason}")]
    #[diagnostic(
        code(depot_picker::catalog::auth_failed),
        help("Check your network connection; Steam CM servers may be unreachable")
    )]
    AuthFailed { reason: String },

    #[error("Product info lookup failed for app {app_id}: {reason}")]
    #[diagnostic(code(depot_picker::catalog::lookup_failed))]
    LookupFailed { app_id: u32, reason: String },

    // Search errors
    #[error("Store search failed: {message}")]
    #[diagnostic(code(depot_picker::search::network))]
    Network { message: String },

    // Side effects
    #[error("Failed to copy to clipboard: {reason}")]
    #[diagnostic(code(depot_picker::system::clipboard_failed))]
    ClipboardFailed { reason: String },

    #[error("Failed to open the Steam console: {reason}")]
    #[diagnostic(code(depot_picker::system::console_launch_failed))]
    ConsoleLaunchFailed { reason: String },

    // Prompt errors
    #[error("Prompt failed: {message}")]
    #[diagnostic(code(depot_picker::ui::prompt_failed))]
    Prompt { message: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(depot_picker::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(depot_picker::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to write download record: {path}")]
    #[diagnostic(code(depot_picker::record::write_failed))]
    RecordWriteFailed { path: String, reason: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(depot_picker::fs::io_error))]
    IoError { message: String },
}

impl PickerError {
    /// Whether the error should end the run (as opposed to being reported inline)
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            PickerError::InvalidInput { .. }
                | PickerError::ClipboardFailed { .. }
                | PickerError::ConsoleLaunchFailed { .. }
        )
    }
}

impl From<std::io::Error> for PickerError {
    fn from(err: std::io::Error) -> Self {
        PickerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for PickerError {
    fn from(err: serde_yaml::Error) -> Self {
        PickerError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PickerError {
    fn from(err: serde_json::Error) -> Self {
        PickerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for PickerError {
    fn from(err: reqwest::Error) -> Self {
        PickerError::Network {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for PickerError {
    fn from(err: inquire::InquireError) -> Self {
        PickerError::Prompt {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PickerError>;
