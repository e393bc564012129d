//! Terminal presentation layer
//!
//! This module handles:
//! - Interactive prompts using inquire, behind the [`Prompter`] trait
//! - Labels and listings for applications, depots and manifests

pub mod display;
pub mod prompt;

pub use prompt::{InquirePrompter, Prompter};
