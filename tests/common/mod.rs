//! Common test utilities for depot-picker integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Process name that is never running on a test machine
pub const MISSING_PROCESS: &str = "depot-picker-no-such-process";

const ENV_VARS: &[&str] = &[
    "DEPOT_PICKER_CONFIG",
    "DEPOT_PICKER_LOCALE",
    "DEPOT_PICKER_COUNTRY",
    "DEPOT_PICKER_STORE_URL",
    "DEPOT_PICKER_CLIENT_PROCESS",
    "DEPOT_PICKER_RECORD_DIR",
];

/// An isolated home/config directory for one binary invocation
pub struct TestHome {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestHome {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a config file and return its path
    #[allow(dead_code)]
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.path.join("config.yaml");
        std::fs::write(&path, content).expect("Failed to write config file");
        path
    }

    /// The real binary, with the user's config and environment kept out
    pub fn command(&self) -> Command {
        // Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("depot-picker").expect("binary is built");
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.path)
            .env("XDG_CONFIG_HOME", self.path.join(".config"))
            .env("APPDATA", self.path.join("AppData"))
            .env("RUST_LOG", "off");
        cmd
    }
}
