//! Optional on-disk record of a requested manifest download
//!
//! Writes `download_request.json` and `instructions.txt` under
//! `<root>/app_<app>_depot_<depot>/`. Nothing in the interactive flow depends
//! on these files.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::command::{RenderedCommand, content_path};
use crate::error::{Result, config};

pub const REQUEST_FILE: &str = "download_request.json";
pub const INSTRUCTIONS_FILE: &str = "instructions.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub app_id: u32,
    pub app_name: String,
    pub depot_id: String,
    pub manifest_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    pub command: String,
    pub content_path: String,
    /// Epoch seconds
    pub requested_at: u64,
}

impl DownloadRequest {
    pub fn new(
        app_id: u32,
        app_name: impl Into<String>,
        depot_id: impl Into<String>,
        manifest_id: impl Into<String>,
        branch: Option<String>,
        command: impl Into<String>,
    ) -> Self {
        let depot_id = depot_id.into();
        let requested_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self {
            app_id,
            app_name: app_name.into(),
            content_path: content_path(app_id, &depot_id),
            depot_id,
            manifest_id: manifest_id.into(),
            branch,
            command: command.into(),
            requested_at,
        }
    }
}

/// Directory that holds the record for one app/depot pair
pub fn record_dir(root: &Path, app_id: u32, depot_id: &str) -> PathBuf {
    root.join(format!("app_{app_id}_depot_{depot_id}"))
}

/// Write the request record and its instruction file, returning the directory
pub fn write_record(
    root: &Path,
    request: &DownloadRequest,
    rendered: &RenderedCommand,
) -> Result<PathBuf> {
    let dir = record_dir(root, request.app_id, &request.depot_id);
    std::fs::create_dir_all(&dir)
        .map_err(|e| config::record_write_failed(dir.display().to_string(), e.to_string()))?;

    let request_path = dir.join(REQUEST_FILE);
    let json = serde_json::to_string_pretty(request)?;
    std::fs::write(&request_path, json).map_err(|e| {
        config::record_write_failed(request_path.display().to_string(), e.to_string())
    })?;

    let instructions_path = dir.join(INSTRUCTIONS_FILE);
    std::fs::write(&instructions_path, format!("{}\n", rendered.annotated_command)).map_err(
        |e| config::record_write_failed(instructions_path.display().to_string(), e.to_string()),
    )?;

    tracing::info!(path = %dir.display(), "Wrote download record");
    Ok(dir)
}
