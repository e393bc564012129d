//! Rendering the `download_depot` console command and handing it to the user

use console::Style;

use crate::system::{Clipboard, ConsoleLauncher};

/// A rendered console command plus its annotated, human-facing form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCommand {
    /// Single line for the Steam console
    pub command: String,
    /// `command` followed by post-download relocation instructions
    pub annotated_command: String,
}

/// Where the Steam client places files fetched by `download_depot`,
/// relative to the Steam installation directory
pub fn content_path(app_id: u32, depot_id: &str) -> String {
    format!("steamapps/content/app_{app_id}/depot_{depot_id}")
}

pub fn render(app_id: u32, depot_id: &str, manifest_id: &str) -> RenderedCommand {
    let command = format!("download_depot {app_id} {depot_id} {manifest_id}");
    let annotated_command = format!(
        "{command}\n\n\
         1. Paste the line above into the Steam console and press Enter.\n\
         2. Wait for \"Depot download complete\" in the console.\n\
         3. The files land in <Steam>/{path}/\n\
         4. Move them into the game's install folder, replacing existing files.",
        path = content_path(app_id, depot_id),
    );
    RenderedCommand {
        command,
        annotated_command,
    }
}

/// What happened to each side effect of [`deliver`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub copied: bool,
    pub console_opened: bool,
}

/// Copy the annotated command and open the Steam console.
///
/// Either step may be switched off by passing `None`. Failures are warnings:
/// the literal command is always printed so it can be used by hand.
pub fn deliver(
    rendered: &RenderedCommand,
    clipboard: Option<&mut dyn Clipboard>,
    launcher: Option<&dyn ConsoleLauncher>,
) -> DeliveryReport {
    let mut report = DeliveryReport::default();

    if let Some(clipboard) = clipboard {
        match clipboard.copy(&rendered.annotated_command) {
            Ok(()) => report.copied = true,
            Err(e) => tracing::warn!("{e}"),
        }
    }

    if let Some(launcher) = launcher {
        match launcher.open_console() {
            Ok(()) => report.console_opened = true,
            Err(e) => tracing::warn!("{e}"),
        }
    }

    print_command(rendered, report);
    report
}

fn print_command(rendered: &RenderedCommand, report: DeliveryReport) {
    println!();
    println!(
        "{}",
        Style::new().bold().green().apply_to("Console command:")
    );
    println!("  {}", Style::new().bold().cyan().apply_to(&rendered.command));
    println!();
    if report.copied {
        println!("Copied to clipboard together with these instructions:");
    } else {
        println!("Copy the command above manually, then:");
    }
    for line in rendered.annotated_command.lines().skip(1) {
        println!("  {line}");
    }
    if report.console_opened {
        println!();
        println!("{}", Style::new().dim().apply_to("Steam console opened."));
    }
}
