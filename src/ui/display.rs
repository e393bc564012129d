//! Labels for selection lists and small formatting helpers

use chrono::DateTime;

use crate::domain::{Application, Depot, DepotFlag, Manifest, OsClassification};

/// Human-readable byte size (binary units)
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

/// Epoch seconds as a UTC date and time
pub fn format_timestamp(epoch_seconds: i64) -> String {
    DateTime::from_timestamp(epoch_seconds, 0).map_or_else(
        || epoch_seconds.to_string(),
        |dt| dt.format("%Y-%m-%d %H:%M UTC").to_string(),
    )
}

pub fn application_label(app: &Application) -> String {
    let price = if app.is_free() {
        "free / no price".to_string()
    } else if app.discount_percent > 0 {
        format!("{:.2} (-{}%)", app.price(), app.discount_percent)
    } else {
        format!("{:.2}", app.price())
    };
    format!("{} [{}] · {} · {}", app.name, app.id, app.kind, price)
}

pub fn depot_label(depot: &Depot) -> String {
    let mut parts = vec![format!("{} [{}]", depot.name, depot.id)];
    if depot.os != OsClassification::Unknown {
        parts.push(depot.os.to_string());
    }
    if let Some(language) = &depot.language {
        parts.push(language.clone());
    }
    if let Some(size) = depot.max_size_bytes {
        parts.push(format_size(size));
    }
    if let Some(dlc) = depot.dlc_app_id {
        parts.push(format!("DLC {dlc}"));
    }
    let flags: Vec<String> = depot.flags.iter().map(DepotFlag::to_string).collect();
    if !flags.is_empty() {
        parts.push(flags.join(","));
    }
    parts.join(" · ")
}

pub fn manifest_label(manifest: &Manifest) -> String {
    let mut parts = vec![manifest.manifest_id.clone()];
    match &manifest.branch_name {
        Some(branch) if manifest.is_public => parts.push(format!("branch {branch} (public)")),
        Some(branch) => parts.push(format!("branch {branch}")),
        None if manifest.is_historical => parts.push("history".to_string()),
        None => {}
    }
    parts.push(format!("build {}", manifest.build_id));
    if let Some(ts) = manifest.last_updated {
        parts.push(format_timestamp(ts));
    }
    if let Some(description) = &manifest.description {
        parts.push(description.clone());
    }
    parts.join(" · ")
}
