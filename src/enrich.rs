//! Enrichment of records with display names from related catalogs.
//!
//! Enrichment is a single parameterized join: for every [`Relation`] a
//! catalog declares, look the record's foreign-key id up in the target
//! catalog's name index and write the matching `nombre` into the relation's
//! display field. Display fields are derived data; they are recomputed on
//! every read and after every mutation, never stored.
//!
//! Form controls submit foreign keys as strings, so mutation paths coerce
//! them to numbers with [`coerce_foreign_keys`] before storage and lookup.

use std::collections::HashMap;

use serde_json::Value;

use crate::{CatalogKind, Relation};

/// Sentinel display value when a foreign key is absent or does not resolve.
pub const MISSING_RELATION: &str = "N/A";

/// Mapping from record id to display name for one catalog.
pub type NameIndex = HashMap<i64, String>;

/// Builds a [`NameIndex`] from a catalog's records.
///
/// Records without a numeric `id` or a string `nombre` are skipped.
pub fn name_index(records: &[Value]) -> NameIndex {
    records
        .iter()
        .filter_map(|record| {
            let id = record.get("id")?.as_i64()?;
            let nombre = record.get("nombre")?.as_str()?;
            Some((id, nombre.to_string()))
        })
        .collect()
}

/// Reads a foreign-key id from `record`, accepting either a JSON number or a
/// numeric string.
pub fn foreign_key(record: &Value, field: &str) -> Option<i64> {
    match record.get(field)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Replaces string-valued foreign keys in `record` with numbers.
///
/// Values that do not parse as integers (including the blank select choice)
/// are left untouched; their enrichment lookup will miss and degrade to the
/// [`MISSING_RELATION`] sentinel.
pub fn coerce_foreign_keys(relations: &[Relation], record: &mut Value) {
    let Some(map) = record.as_object_mut() else {
        return;
    };
    for relation in relations {
        let parsed = match map.get(relation.field) {
            Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        if let Some(id) = parsed {
            map.insert(relation.field.to_string(), Value::from(id));
        }
    }
}

/// Writes the display field for every relation into `record`.
pub fn enrich(record: &mut Value, relations: &[Relation], indexes: &HashMap<CatalogKind, NameIndex>) {
    for relation in relations {
        let name = foreign_key(record, relation.field)
            .and_then(|id| indexes.get(&relation.target)?.get(&id).cloned())
            .unwrap_or_else(|| MISSING_RELATION.to_string());
        if let Some(map) = record.as_object_mut() {
            map.insert(relation.display.to_string(), Value::String(name));
        }
    }
}
