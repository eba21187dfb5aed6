//! JSON body codec shared by every store backend.
//!
//! # Responsibility
//! - Encode the canonical schema (`goals`, `filters`, `tools`, `scenarios`).
//! - Map legacy layouts onto the canonical schema before decoding.
//!
//! # Legacy mapping
//! - tool `description` -> `tooltip`
//! - tool `licenses: [..]` -> `filters: {"Lizenz": [..]}`
//! - tool `filters: [..]` (flat list) -> `filters: {<flat category>: [..]}`
//! - tool given as a bare string -> tool with only `name` set
//! - top-level `filters: [..]` (flat list) -> `filters: {<flat category>: [..]}`
//! - top-level `licenses: [..]` -> `filters["Lizenz"]`
//! - top-level `scenarios: {"goal|tool": text}` -> scenario records
//!
//! The flat category is `"Lizenz"`: a flat list is the license list of the
//! single-category layout, so tool `licenses` and the top-level list land in
//! the same category. Only a document that also carries a top-level
//! `licenses` list keeps its flat list apart, under `"Filter"`.
//!
//! Canonical fields win when a document carries both spellings.

use crate::model::catalog::CatalogDocument;
use crate::store::{StoreError, StoreResult, StoredDocument};
use serde_json::{json, Map, Value};

/// Category that license-only layouts are mapped to.
pub const LICENSE_CATEGORY: &str = "Lizenz";
/// Category that flat single-list filter layouts are mapped to.
pub const FLAT_FILTER_CATEGORY: &str = "Filter";
/// Separator of legacy `"goal|tool"` scenario keys.
pub const LEGACY_SCENARIO_SEPARATOR: char = '|';

/// Encodes a document as pretty-printed UTF-8 JSON.
pub fn encode_document(document: &CatalogDocument) -> StoreResult<String> {
    serde_json::to_string_pretty(document).map_err(StoreError::Encode)
}

/// Decodes a stored body, upgrading legacy layouts first.
pub fn decode_document(text: &str) -> StoreResult<StoredDocument> {
    let value: Value = serde_json::from_str(text).map_err(StoreError::Decode)?;
    let (value, upgraded_from_legacy) = upgrade_legacy_shape(value)?;
    let document = serde_json::from_value(value).map_err(StoreError::Decode)?;
    Ok(StoredDocument {
        document,
        upgraded_from_legacy,
    })
}

/// Rewrites legacy field layouts in place.
///
/// Returns the canonical value and whether anything was rewritten.
pub fn upgrade_legacy_shape(value: Value) -> StoreResult<(Value, bool)> {
    let Value::Object(mut root) = value else {
        return Err(StoreError::InvalidShape(
            "top-level value must be an object".to_string(),
        ));
    };
    let mut upgraded = false;
    let flat_category = flat_category_for(&root);

    if let Some(filters) = root.get_mut("filters") {
        upgraded |= wrap_flat_list(filters, flat_category);
    }

    if let Some(licenses) = root.remove("licenses") {
        let filters = root
            .entry("filters")
            .or_insert_with(|| Value::Object(Map::new()));
        let Value::Object(filters) = filters else {
            return Err(StoreError::InvalidShape(
                "`filters` must be an object or an array".to_string(),
            ));
        };
        filters
            .entry(LICENSE_CATEGORY)
            .or_insert(licenses);
        upgraded = true;
    }

    if let Some(Value::Array(tools)) = root.get_mut("tools") {
        for tool in tools.iter_mut() {
            upgraded |= upgrade_tool(tool, flat_category)?;
        }
    }

    if let Some(Value::Object(entries)) = root.get("scenarios") {
        let records = legacy_scenarios_to_records(entries)?;
        root.insert("scenarios".to_string(), Value::Array(records));
        upgraded = true;
    }

    Ok((Value::Object(root), upgraded))
}

/// Category receiving flat filter lists of `root`.
fn flat_category_for(root: &Map<String, Value>) -> &'static str {
    if root.contains_key("licenses") {
        FLAT_FILTER_CATEGORY
    } else {
        LICENSE_CATEGORY
    }
}

/// Turns a `[..]` filter list into `{category: [..]}`.
fn wrap_flat_list(filters: &mut Value, category: &str) -> bool {
    let Value::Array(values) = filters else {
        return false;
    };
    let values = std::mem::take(values);
    let mut wrapped = Map::new();
    wrapped.insert(category.to_string(), Value::Array(values));
    *filters = Value::Object(wrapped);
    true
}

fn upgrade_tool(tool: &mut Value, flat_category: &str) -> StoreResult<bool> {
    if let Value::String(name) = tool {
        let name = std::mem::take(name);
        *tool = json!({
            "name": name,
            "link": "",
            "tooltip": "",
            "filters": {},
            "goals": [],
        });
        return Ok(true);
    }

    let Value::Object(fields) = tool else {
        return Err(StoreError::InvalidShape(
            "tool entries must be objects or strings".to_string(),
        ));
    };
    let mut upgraded = false;

    if let Some(filters) = fields.get_mut("filters") {
        upgraded |= wrap_flat_list(filters, flat_category);
    }

    if let Some(description) = fields.remove("description") {
        fields.entry("tooltip").or_insert(description);
        upgraded = true;
    }

    if let Some(licenses) = fields.remove("licenses") {
        let filters = fields
            .entry("filters")
            .or_insert_with(|| Value::Object(Map::new()));
        let Value::Object(filters) = filters else {
            return Err(StoreError::InvalidShape(
                "tool `filters` must be an object".to_string(),
            ));
        };
        filters.entry(LICENSE_CATEGORY).or_insert(licenses);
        upgraded = true;
    }

    Ok(upgraded)
}

fn legacy_scenarios_to_records(entries: &Map<String, Value>) -> StoreResult<Vec<Value>> {
    let mut records = Vec::with_capacity(entries.len());
    for (key, text) in entries {
        let Some((goal, tool)) = key.split_once(LEGACY_SCENARIO_SEPARATOR) else {
            return Err(StoreError::InvalidShape(format!(
                "legacy scenario key `{key}` must look like `goal{LEGACY_SCENARIO_SEPARATOR}tool`"
            )));
        };
        records.push(json!({
            "goal": goal.trim(),
            "tool": tool.trim(),
            "text": text,
        }));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::{decode_document, encode_document, upgrade_legacy_shape};
    use serde_json::json;

    #[test]
    fn canonical_document_is_not_marked_as_upgraded() {
        let body = json!({
            "goals": ["Daten analysieren"],
            "filters": {"Lizenz": ["Kostenlos"]},
            "tools": [{
                "name": "DataRobot",
                "link": "",
                "tooltip": "",
                "filters": {"Lizenz": ["Kostenlos"]},
                "goals": ["Daten analysieren"]
            }]
        });
        let stored = decode_document(&body.to_string()).unwrap();
        assert!(!stored.upgraded_from_legacy);
        assert_eq!(stored.document.tools[0].name, "DataRobot");
    }

    #[test]
    fn canonical_tooltip_wins_over_legacy_description() {
        let (value, upgraded) = upgrade_legacy_shape(json!({
            "tools": [{"name": "X", "tooltip": "new", "description": "old"}]
        }))
        .unwrap();
        assert!(upgraded);
        assert_eq!(value["tools"][0]["tooltip"], "new");
    }

    #[test]
    fn non_object_root_is_rejected() {
        assert!(decode_document("[1, 2]").is_err());
    }

    #[test]
    fn encoded_document_decodes_to_same_value() {
        let body = json!({
            "goals": ["Texte schreiben"],
            "filters": {"Plattform": ["Web-basiert"], "Lizenz": ["Freemium"]},
            "tools": []
        });
        let stored = decode_document(&body.to_string()).unwrap();
        let text = encode_document(&stored.document).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(reparsed, body);
    }
}
