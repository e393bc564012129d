//! depot-picker - Steam depot manifest picker
//!
//! Searches the Steam store, walks the user through a title, one of its depots
//! and one of that depot's manifests, and hands back the matching
//! `download_depot <app> <depot> <manifest>` command for the Steam console.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod command;
mod config;
mod domain;
mod error;
mod extract;
mod flow;
mod progress;
mod record;
mod search;
mod system;
#[cfg(test)]
mod test_fixtures;
mod ui;

use catalog::SteamCatalog;
use cli::Cli;
use config::Settings;
use error::{PickerError, Result};
use flow::{Capabilities, InteractionFlow};
use progress::SpinnerReporter;
use search::StorefrontClient;
use system::{Clipboard, ConsoleLauncher, SteamConsoleLauncher, SystemClipboard};
use ui::InquirePrompter;

/// Log level used when `RUST_LOG` is not set
fn default_log_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// The console command only works against a running client, so refuse to
/// start a session without one unless the check is switched off
fn check_client(settings: &Settings) -> Result<()> {
    if !settings.check_client {
        tracing::debug!("Skipping Steam client check");
        return Ok(());
    }
    system::ensure_client_running(&settings.client_process)
}

fn run(settings: &Settings) -> Result<()> {
    check_client(settings)?;

    let search = StorefrontClient::new(
        settings.store_url.clone(),
        settings.locale.clone(),
        settings.country.clone(),
    )?;
    let mut session = SteamCatalog::new();
    let mut prompter = InquirePrompter;
    let mut progress = SpinnerReporter::new();
    let mut clipboard = SystemClipboard::new();
    let launcher = SteamConsoleLauncher;

    let caps = Capabilities {
        session: &mut session,
        search: &search,
        prompter: &mut prompter,
        progress: &mut progress,
        clipboard: settings
            .copy_to_clipboard
            .then_some(&mut clipboard as &mut dyn Clipboard),
        launcher: settings
            .open_console
            .then_some(&launcher as &dyn ConsoleLauncher),
    };

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| PickerError::IoError {
            message: format!("failed to start async runtime: {e}"),
        })?;
    let outcome = runtime.block_on(
        InteractionFlow::new(caps)
            .with_record_dir(settings.record_dir.clone())
            .run(),
    )?;

    tracing::debug!(
        final_state = %outcome.final_state,
        rendered = outcome.rendered.is_some(),
        "Run finished"
    );
    if let Some(path) = outcome.record_path {
        println!("Download record written to {}", path.display());
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    init_logging(settings.verbose);

    if let Err(e) = run(&settings) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
