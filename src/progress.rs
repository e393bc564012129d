//! Spinners for network waits

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for the blocking steps of the flow
///
/// Allows a visible spinner in the terminal and a silent variant for tests
/// and non-interactive output.
pub trait ProgressReporter {
    /// Start showing `message` as work in progress
    fn start(&mut self, message: &str);

    /// Finish the current step successfully
    fn finish(&mut self, message: &str);

    /// Abandon the current step on error
    fn abandon(&mut self);
}

/// Spinner shown on stderr while a step runs
#[derive(Default)]
pub struct SpinnerReporter {
    spinner: Option<ProgressBar>,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for SpinnerReporter {
    fn start(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        if let Some(previous) = self.spinner.replace(spinner) {
            previous.finish_and_clear();
        }
    }

    fn finish(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(message.to_string());
        }
    }

    fn abandon(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.abandon();
        }
    }
}

/// No-op reporter
#[derive(Debug, Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start(&mut self, _message: &str) {}

    fn finish(&mut self, _message: &str) {}

    fn abandon(&mut self) {}
}
