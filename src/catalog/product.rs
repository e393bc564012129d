//! Raw product metadata returned by a PICS product-info lookup
//!
//! Steam ships app info as KeyValues text where every scalar is a string.
//! The tree is kept as a `serde_json::Value` so extractors can read it
//! leniently: missing or malformed fields simply read as `None`.

use keyvalues_parser::Value as VdfValue;
use serde_json::{Map, Value};

use crate::error::{Result, catalog};

/// Key inside the depot table that holds the product's branches
pub const BRANCHES_KEY: &str = "branches";

/// Opaque nested app metadata (common fields, depot table, branch table)
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInfo {
    pub app_id: u32,
    pub data: Value,
}

impl ProductInfo {
    /// Wrap an already-parsed tree, unwrapping a Steam envelope if present
    pub fn new(app_id: u32, data: Value) -> Self {
        Self {
            app_id,
            data: unwrap_envelope(data),
        }
    }

    /// Parse the KeyValues text carried in a PICS app buffer.
    ///
    /// The root pair's key (`appinfo` or the app id) names the document and is
    /// dropped. Text that fails escaped parsing is retried with backslashes
    /// taken literally, as Steam does not escape every description.
    pub fn from_vdf(app_id: u32, raw: &str) -> Result<Self> {
        let text = raw.trim_end_matches('\0');
        let parsed = keyvalues_parser::parse(text)
            .or_else(|_| {
                keyvalues_parser::Parser::new()
                    .literal_special_chars(true)
                    .parse(text)
            })
            .map_err(|e| {
                catalog::lookup_failed(app_id, format!("failed parsing appinfo VDF: {e}"))
            })?;

        match vdf_to_json(&parsed.value) {
            data @ Value::Object(_) => Ok(Self::new(app_id, data)),
            _ => Err(catalog::lookup_failed(
                app_id,
                format!("appinfo VDF root '{}' is not an object", parsed.key),
            )),
        }
    }

    /// `common.name`, if present and non-blank
    pub fn name(&self) -> Option<&str> {
        self.data
            .get("common")
            .and_then(|c| c.get("name"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    /// The depot table, including the reserved `branches` entry
    pub fn depot_table(&self) -> Option<&Map<String, Value>> {
        self.data.get("depots").and_then(Value::as_object)
    }

    /// A single depot entry by id
    pub fn depot(&self, depot_id: &str) -> Option<&Value> {
        if depot_id == BRANCHES_KEY {
            return None;
        }
        self.depot_table().and_then(|t| t.get(depot_id))
    }

    /// Product-level branches (`depots.branches`)
    pub fn branches(&self) -> Option<&Map<String, Value>> {
        self.depot_table()
            .and_then(|t| t.get(BRANCHES_KEY))
            .and_then(Value::as_object)
    }
}

/// Steam wraps app info in an `appinfo` key or in a key that is the numeric
/// app id. Descend through either form when it is the only key.
fn unwrap_envelope(data: Value) -> Value {
    match data {
        Value::Object(mut map) if map.len() == 1 => {
            let key = map.keys().next().cloned().unwrap_or_default();
            let is_envelope = key == "appinfo" || key.chars().all(|c| c.is_ascii_digit());
            match map.remove(&key) {
                Some(inner @ Value::Object(_)) if is_envelope => unwrap_envelope(inner),
                Some(inner) => {
                    map.insert(key, inner);
                    Value::Object(map)
                }
                None => Value::Object(map),
            }
        }
        other => other,
    }
}

/// KeyValues scalars are all strings; a repeated key keeps its last value
fn vdf_to_json(value: &VdfValue<'_>) -> Value {
    match value {
        VdfValue::Str(text) => Value::String(text.to_string()),
        VdfValue::Obj(obj) => {
            let map = obj
                .iter()
                .filter_map(|(key, values)| {
                    values.last().map(|v| (key.to_string(), vdf_to_json(v)))
                })
                .collect::<Map<String, Value>>();
            Value::Object(map)
        }
    }
}

/// Read a scalar as text, accepting both strings and numbers
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read a scalar as an unsigned integer, accepting numeric strings
pub fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read a scalar as a signed integer, accepting numeric strings
pub fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// KeyValues booleans are `"1"`/`"0"`; JSON fixtures may use real booleans
pub fn as_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_u64().is_some_and(|v| v != 0),
        Value::String(s) => matches!(s.trim(), "1" | "true"),
        _ => false,
    }
}
