//! Interactive prompts
//!
//! The interaction flow only talks to [`Prompter`]; [`InquirePrompter`] is
//! the terminal implementation. `None` from any prompt means the user
//! cancelled (ESC).

use inquire::{InquireError, Select, Text};

use crate::error::Result;

const SELECT_PAGE_SIZE: usize = 12;

pub trait Prompter {
    /// Ask for a free-text search term
    fn search_term(&mut self) -> Result<Option<String>>;

    /// Pick one entry, returning its index into `options`
    fn select(&mut self, message: &str, options: Vec<String>) -> Result<Option<usize>>;

    /// Show an inline message between prompts
    fn notice(&mut self, message: &str);
}

/// Ctrl+C ends the run like ESC does
fn cancellable<T>(answer: std::result::Result<Option<T>, InquireError>) -> Result<Option<T>> {
    match answer {
        Ok(answer) => Ok(answer),
        Err(InquireError::OperationInterrupted | InquireError::OperationCanceled) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn search_term(&mut self) -> Result<Option<String>> {
        cancellable(
            Text::new("Search the Steam store:")
                .with_help_message("Game title, e.g. Stardew Valley. ESC to quit")
                .prompt_skippable(),
        )
    }

    fn select(&mut self, message: &str, options: Vec<String>) -> Result<Option<usize>> {
        if options.is_empty() {
            return Ok(None);
        }
        let choice = cancellable(
            Select::new(message, options)
                .with_starting_cursor(0)
                .with_page_size(SELECT_PAGE_SIZE)
                .with_help_message("↑↓ to move, type to filter, ENTER to select, ESC to cancel")
                .raw_prompt_skippable(),
        )?;
        Ok(choice.map(|option| option.index))
    }

    fn notice(&mut self, message: &str) {
        println!("{}", console::Style::new().yellow().apply_to(message));
    }
}
