//! Depot table extraction and OS classification

use std::collections::BTreeSet;

use serde_json::Value;

use crate::catalog::ProductInfo;
use crate::catalog::product::{BRANCHES_KEY, as_flag, as_text, as_u64};
use crate::domain::{Depot, DepotFlag, OsClassification};

/// Build the depot list for a product.
///
/// Never returns an empty list: an app without qualifying depots yields a
/// single synthetic depot carrying the app's own id and name.
pub fn extract_depots(product: &ProductInfo) -> Vec<Depot> {
    let mut depots: Vec<(u64, Depot)> = product
        .depot_table()
        .into_iter()
        .flatten()
        .filter(|(key, _)| key.as_str() != BRANCHES_KEY)
        .filter_map(|(key, node)| {
            let numeric = depot_key(key)?;
            // Scalars in the depot table (e.g. "baselanguages") are not depots
            node.as_object()?;
            Some((numeric, depot_from_node(key, node)))
        })
        .collect();

    if depots.is_empty() {
        let name = product
            .name()
            .map_or_else(|| format!("App {}", product.app_id), str::to_string);
        tracing::debug!(app_id = product.app_id, "No depots declared, using app itself");
        return vec![Depot::synthetic(product.app_id, name)];
    }

    depots.sort_by_key(|(id, _)| *id);
    depots.into_iter().map(|(_, depot)| depot).collect()
}

/// Depot ids are plain decimal digits without sign or leading zeros
fn depot_key(key: &str) -> Option<u64> {
    if key.is_empty() || key.starts_with('0') || !key.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

fn depot_from_node(id: &str, node: &Value) -> Depot {
    let field = |name: &str| node.get(name);
    let config = node.get("config");
    let config_field = |name: &str| config.and_then(|c| c.get(name));

    let name = field("name")
        .and_then(as_text)
        .unwrap_or_else(|| format!("Depot {id}"));
    let oslist = config_field("oslist").and_then(as_text);
    let os = classify_os(oslist.as_deref(), &name);

    let mut flags = BTreeSet::new();
    if field("optional").is_some_and(as_flag)
        || config_field("optionaldlc").is_some_and(as_flag)
    {
        flags.insert(DepotFlag::Optional);
    }
    if field("systemdefined").is_some_and(as_flag) {
        flags.insert(DepotFlag::SystemDefined);
    }
    if field("sharedinstall").is_some_and(as_flag) {
        flags.insert(DepotFlag::SharedInstall);
    }

    Depot {
        id: id.to_string(),
        os,
        dlc_app_id: field("dlcappid")
            .and_then(as_u64)
            .and_then(|v| u32::try_from(v).ok()),
        max_size_bytes: field("maxsize").and_then(as_u64),
        encrypted_size_bytes: field("encryptedsize").and_then(as_u64),
        language: config_field("language").and_then(as_text),
        flags,
        name,
    }
}

/// Classify a depot's target OS.
///
/// An explicit `oslist` wins; otherwise the display name is searched for a
/// platform hint.
pub fn classify_os(oslist: Option<&str>, name: &str) -> OsClassification {
    if let Some(raw) = oslist.map(str::trim).filter(|s| !s.is_empty()) {
        let entries: Vec<String> = raw
            .split(',')
            .map(|s| s.trim().to_ascii_lowercase())
            .collect();
        let has = |os: &str| entries.iter().any(|e| e == os);
        return if has("windows") {
            OsClassification::Windows
        } else if has("macos") {
            OsClassification::Mac
        } else if has("linux") {
            OsClassification::Linux
        } else {
            OsClassification::Other(raw.to_string())
        };
    }

    let name = name.to_ascii_lowercase();
    if name.contains("windows") {
        OsClassification::Windows
    } else if name.contains("mac") || name.contains("osx") {
        OsClassification::Mac
    } else if name.contains("linux") {
        OsClassification::Linux
    } else {
        OsClassification::Unknown
    }
}
