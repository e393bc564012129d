//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// depot-picker - find a Steam manifest and build its download command
///
/// Search the Steam store, choose a title, one of its depots and a manifest,
/// and get the matching `download_depot` console command.
#[derive(Parser, Debug)]
#[command(
    name = "depot-picker",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Find a Steam depot manifest and build the download_depot console command",
    long_about = "depot-picker searches the Steam store, lists the depots of the title you pick \
                  and the manifests of the depot you pick, then prints the matching \
                  `download_depot <app> <depot> <manifest>` command for the Steam console.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  depot-picker                         \x1b[90m# Run the interactive picker\x1b[0m\n   \
                  depot-picker --country DE -l german  \x1b[90m# Search the German store\x1b[0m\n   \
                  depot-picker --no-console            \x1b[90m# Do not open the Steam console\x1b[0m\n   \
                  depot-picker --record-dir ./depots   \x1b[90m# Also write a download record\x1b[0m\n"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Configuration file (defaults to <config dir>/depot-picker/config.yaml)
    #[arg(long, value_name = "FILE", env = "DEPOT_PICKER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Store language used for search results
    #[arg(long = "locale", short = 'l', value_name = "LANGUAGE", env = "DEPOT_PICKER_LOCALE")]
    pub locale: Option<String>,

    /// Store country code used for prices
    #[arg(long, value_name = "CC", env = "DEPOT_PICKER_COUNTRY")]
    pub country: Option<String>,

    /// Base URL of the store search API
    #[arg(long, value_name = "URL", env = "DEPOT_PICKER_STORE_URL")]
    pub store_url: Option<String>,

    /// Process name of the Steam client to look for
    #[arg(long, value_name = "NAME", env = "DEPOT_PICKER_CLIENT_PROCESS")]
    pub client_process: Option<String>,

    /// Do not require a running Steam client
    #[arg(long)]
    pub skip_client_check: bool,

    /// Do not copy the command to the clipboard
    #[arg(long)]
    pub no_clipboard: bool,

    /// Do not open the Steam console
    #[arg(long)]
    pub no_console: bool,

    /// Also write a download record and instructions under this directory
    #[arg(long, value_name = "DIR", env = "DEPOT_PICKER_RECORD_DIR")]
    pub record_dir: Option<PathBuf>,
}
