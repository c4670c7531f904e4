//! JSON export of the assembled schema.
//!
//! Produces a single document with `entities` and `relationships` arrays
//! for downstream tooling.

use crate::schema::{Entity, Relationship};
use serde_json::json;

/// Export the schema as pretty-printed JSON.
pub fn export_json(entities: &[Entity], relationships: &[Relationship]) -> String {
    let result = json!({
        "entities": entities,
        "relationships": relationships,
    });

    // serde_json::to_string_pretty should never fail for our data structures
    serde_json::to_string_pretty(&result).expect("Failed to serialize JSON")
}
