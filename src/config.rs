//! Run settings
//!
//! Resolved in layers, later layers winning: built-in defaults, the YAML
//! config file, then environment variables and command-line flags (both
//! handled by clap).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::{Result, config};
use crate::search::DEFAULT_STORE_URL;
use crate::system::default_client_process;

/// Directory name under the user's config directory
const CONFIG_DIR: &str = "depot-picker";

/// Config file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.yaml";

const DEFAULT_LOCALE: &str = "english";
const DEFAULT_COUNTRY: &str = "US";

/// Contents of `config.yaml`; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub locale: Option<String>,
    pub country: Option<String>,
    pub store_url: Option<String>,
    pub client_process: Option<String>,
    pub check_client: Option<bool>,
    pub clipboard: Option<bool>,
    pub open_console: Option<bool>,
    pub record_dir: Option<PathBuf>,
}

impl FileConfig {
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a config file; a missing file yields the empty config
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&content)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))
    }
}

/// Default location of the config file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub locale: String,
    pub country: String,
    pub store_url: String,
    pub client_process: String,
    pub check_client: bool,
    pub copy_to_clipboard: bool,
    pub open_console: bool,
    pub record_dir: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            store_url: DEFAULT_STORE_URL.to_string(),
            client_process: default_client_process().to_string(),
            check_client: true,
            copy_to_clipboard: true,
            open_console: true,
            record_dir: None,
            verbose: false,
        }
    }
}

impl Settings {
    /// Resolve settings from the parsed command line and the config file it points to
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) if !path.exists() => {
                return Err(config::read_failed(
                    path.display().to_string(),
                    "file does not exist",
                ));
            }
            Some(path) => FileConfig::load(path)?,
            None => match default_config_path() {
                Some(path) => FileConfig::load(&path)?,
                None => FileConfig::default(),
            },
        };
        Ok(Self::layer(&file, cli))
    }

    fn layer(file: &FileConfig, cli: &Cli) -> Self {
        let defaults = Self::default();
        let pick = |flag: &Option<String>, from_file: &Option<String>, default: String| {
            flag.clone().or_else(|| from_file.clone()).unwrap_or(default)
        };

        Self {
            locale: pick(&cli.locale, &file.locale, defaults.locale),
            country: pick(&cli.country, &file.country, defaults.country),
            store_url: pick(&cli.store_url, &file.store_url, defaults.store_url),
            client_process: pick(
                &cli.client_process,
                &file.client_process,
                defaults.client_process,
            ),
            check_client: !cli.skip_client_check
                && file.check_client.unwrap_or(defaults.check_client),
            copy_to_clipboard: !cli.no_clipboard
                && file.clipboard.unwrap_or(defaults.copy_to_clipboard),
            open_console: !cli.no_console && file.open_console.unwrap_or(defaults.open_console),
            record_dir: cli.record_dir.clone().or_else(|| file.record_dir.clone()),
            verbose: cli.verbose,
        }
    }
}
