//! Lenient parsing of the catalog document into domain records.

use crate::{Result, StoreError};
use catalog_domain::{Record, RecordId};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

/// One entry as it appears on disk, before normalization
///
/// Every field is read as a raw JSON value so a wrong-typed field degrades
/// to its default instead of rejecting the whole entry.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    title: Option<Value>,
    #[serde(default)]
    description: Option<Value>,
    #[serde(default)]
    tags: Option<Value>,
    #[serde(default, rename = "imageURL")]
    image_url_camel: Option<Value>,
    #[serde(default)]
    image_url: Option<Value>,
    #[serde(default)]
    image: Option<Value>,
    #[serde(default)]
    demo_link: Option<Value>,
    #[serde(default)]
    demo: Option<Value>,
}

/// Parse a catalog document into records
///
/// Entries that are not objects are skipped with a warning. Fields with the
/// wrong JSON type fall back to their empty default. Records get their
/// source `id` when it is a non-blank string or a number and unique so far;
/// otherwise their id is derived from their position. Ids are unique across
/// the returned records.
///
/// # Errors
///
/// Returns an error if `json` is not valid JSON, or is neither an object with
/// a `data` array nor a bare array.
pub fn parse_catalog(json: &str) -> Result<Vec<Record>> {
    let document: Value = serde_json::from_str(json)?;

    let entries = match document {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(entries)) => entries,
            Some(Value::Null) | None => {
                return Err(StoreError::InvalidData(
                    "catalog document has no 'data' array".to_string(),
                ))
            }
            Some(other) => {
                return Err(StoreError::InvalidData(format!(
                    "'data' must be an array, got {}",
                    json_type(&other)
                )))
            }
        },
        other => {
            return Err(StoreError::InvalidData(format!(
                "catalog document must be an object or array, got {}",
                json_type(&other)
            )))
        }
    };

    let mut seen_ids = HashSet::new();
    let mut records = Vec::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        if !entry.is_object() {
            tracing::warn!("Skipping catalog entry {}: expected object, got {}", index, json_type(&entry));
            continue;
        }

        let raw: RawRecord = match serde_json::from_value(entry) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Skipping catalog entry {}: {}", index, e);
                continue;
            }
        };

        let id = unique_id(explicit_id(raw.id.as_ref()), index, &seen_ids);
        seen_ids.insert(id.clone());

        records.push(normalize(id, raw));
    }

    tracing::debug!("Parsed {} catalog records", records.len());
    Ok(records)
}

fn normalize(id: RecordId, raw: RawRecord) -> Record {
    let name = text(raw.name).or_else(|| text(raw.title)).unwrap_or_default();
    let mut record = Record::new(
        id,
        name,
        text(raw.description).unwrap_or_default(),
        tags_from(raw.tags),
    );
    record.image_url = non_blank(
        text(raw.image_url_camel)
            .or_else(|| text(raw.image_url))
            .or_else(|| text(raw.image)),
    );
    record.demo_link = non_blank(text(raw.demo_link).or_else(|| text(raw.demo)));
    record
}

// Explicit id if unused, else the position id, else `<position id>-<n>`
fn unique_id(explicit: Option<RecordId>, index: usize, seen: &HashSet<RecordId>) -> RecordId {
    if let Some(id) = explicit {
        if !seen.contains(&id) {
            return id;
        }
        tracing::warn!("Duplicate record id '{}' at entry {}; using position id", id, index);
    }

    let base = RecordId::from_index(index);
    if !seen.contains(&base) {
        return base;
    }

    let mut n = 1;
    loop {
        let id = RecordId::new(format!("{}-{}", base, n));
        if !seen.contains(&id) {
            return id;
        }
        n += 1;
    }
}

fn explicit_id(value: Option<&Value>) -> Option<RecordId> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(RecordId::new(s.trim())),
        Value::Number(n) => Some(RecordId::new(n.to_string())),
        _ => None,
    }
}

// Accepts an array of strings (non-strings dropped) or a single string
fn tags_from(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(tag) if !tag.trim().is_empty() => Some(tag),
                _ => None,
            })
            .collect(),
        Some(Value::String(tag)) if !tag.trim().is_empty() => vec![tag],
        _ => Vec::new(),
    }
}

// Only string values count; anything else reads as absent
fn text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
