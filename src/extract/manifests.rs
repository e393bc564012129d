//! Manifest extraction for a single depot
//!
//! Two sources are merged:
//! - branch manifests: every product branch with a build id, resolved
//!   through the depot's per-branch manifest override
//! - historical manifests: entries of the depot's manifest map that are
//!   keyed by a numeric manifest id
//!
//! Duplicated ids keep the branch entry. The result is ordered by
//! [`Manifest::display_order`].

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::catalog::ProductInfo;
use crate::catalog::product::{as_i64, as_text};
use crate::domain::Manifest;

const PUBLIC_BRANCH: &str = "public";
const UNKNOWN_BUILD: &str = "Unknown";

/// Collect, deduplicate and order the manifests available for `depot_id`
pub fn extract_manifests(product: &ProductInfo, depot_id: &str) -> Vec<Manifest> {
    let depot_manifests = product
        .depot(depot_id)
        .and_then(|d| d.get("manifests"))
        .and_then(Value::as_object);

    let mut merged = branch_manifests(product.branches(), depot_manifests);
    let mut seen: HashSet<String> = merged.iter().map(|m| m.manifest_id.clone()).collect();

    for manifest in historical_manifests(depot_manifests) {
        if seen.insert(manifest.manifest_id.clone()) {
            merged.push(manifest);
        }
    }

    merged.sort_by(Manifest::display_order);
    tracing::debug!(depot_id, count = merged.len(), "Extracted manifests");
    merged
}

fn branch_manifests(
    branches: Option<&Map<String, Value>>,
    depot_manifests: Option<&Map<String, Value>>,
) -> Vec<Manifest> {
    let Some(branches) = branches else {
        return Vec::new();
    };

    branches
        .iter()
        .filter_map(|(branch, detail)| {
            let build_id = detail.get("buildid").and_then(as_text)?;
            let manifest_id = depot_manifests
                .and_then(|m| m.get(branch))
                .and_then(override_gid)
                .unwrap_or_else(|| build_id.clone());

            Some(Manifest {
                manifest_id,
                build_id,
                branch_name: Some(branch.clone()),
                is_public: branch.eq_ignore_ascii_case(PUBLIC_BRANCH),
                is_historical: false,
                description: detail.get("description").and_then(as_text),
                last_updated: detail.get("timeupdated").and_then(as_i64),
            })
        })
        .collect()
}

/// A branch override is either the gid itself or an object carrying `gid`
fn override_gid(value: &Value) -> Option<String> {
    match value {
        Value::Object(obj) => obj.get("gid").and_then(as_text),
        other => as_text(other),
    }
}

fn historical_manifests(depot_manifests: Option<&Map<String, Value>>) -> Vec<Manifest> {
    let Some(manifests) = depot_manifests else {
        return Vec::new();
    };

    manifests
        .iter()
        .filter(|(key, _)| !key.is_empty() && key.chars().all(|c| c.is_ascii_digit()))
        .map(|(manifest_id, detail)| Manifest {
            manifest_id: manifest_id.clone(),
            build_id: detail
                .get("buildid")
                .and_then(as_text)
                .unwrap_or_else(|| UNKNOWN_BUILD.to_string()),
            branch_name: None,
            is_public: false,
            is_historical: true,
            description: detail.get("description").and_then(as_text),
            last_updated: detail
                .get("timeupdated")
                .or_else(|| detail.get("lastupdated"))
                .and_then(as_i64),
        })
        .collect()
}
