//! Attribute extraction from one model source unit.

use crate::patterns;
use crate::pluralize::pluralize;
use log::trace;
use modelmap::{Attribute, AttributeType, Entity};

/// Extract an entity with its ordered attribute list, or `None` when the
/// unit is not a concrete model class.
///
/// Ordering: synthesized id first, fillable fields in source order (cast
/// overrides applied in place), cast-only fields in cast order, timestamps
/// last. The error string names the malformed declaration; the caller
/// attaches the unit path.
pub fn extract_attributes(symbolic_name: &str, source: &str) -> Result<Option<Entity>, String> {
    if !patterns::RE_CLASS.is_match(source) {
        return Ok(None);
    }
    if patterns::RE_ABSTRACT_CLASS.is_match(source) {
        return Ok(None);
    }

    let table_name = match patterns::RE_TABLE.captures(source) {
        Some(caps) => caps[1].to_string(),
        None => pluralize(&symbolic_name.to_lowercase()),
    };
    let mut entity = Entity::new(symbolic_name, table_name);

    // A non-auto-incrementing or custom primary key suppresses id synthesis
    let custom_key = patterns::RE_INCREMENTING_OFF.is_match(source)
        || patterns::RE_PRIMARY_KEY.is_match(source);
    if !custom_key {
        entity
            .attributes
            .push(Attribute::new("id", AttributeType::BigInt).primary());
    }

    if let Some(caps) = patterns::RE_FILLABLE.captures(source) {
        for name in parse_string_elements(&caps[1])? {
            entity.push_if_absent(Attribute::new(name, AttributeType::String));
        }
    }

    if let Some(caps) = patterns::RE_CASTS.captures(source) {
        for (field, cast) in parse_cast_pairs(&caps[1])? {
            entity.upsert_attribute(field, map_cast_type(&cast));
        }
    }

    if !patterns::RE_TIMESTAMPS_OFF.is_match(source) {
        entity.push_if_absent(Attribute::new("created_at", AttributeType::Timestamp));
        entity.push_if_absent(Attribute::new("updated_at", AttributeType::Timestamp));
    }

    trace!(
        "{}: {} attribute(s), table {}",
        symbolic_name,
        entity.attributes.len(),
        entity.table_name
    );
    Ok(Some(entity))
}

/// Quoted string elements of an array literal body, in source order.
fn parse_string_elements(body: &str) -> Result<Vec<String>, String> {
    ensure_balanced_quotes(body)?;

    Ok(patterns::RE_QUOTED
        .captures_iter(body)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect())
}

/// `'field' => 'cast'` pairs of a map literal body, in source order.
fn parse_cast_pairs(body: &str) -> Result<Vec<(String, String)>, String> {
    ensure_balanced_quotes(body)?;

    Ok(patterns::RE_CAST_PAIR
        .captures_iter(body)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect())
}

/// Reject array bodies whose quotes do not pair up; everything else that
/// fails to match is silently ignored as a false negative.
fn ensure_balanced_quotes(body: &str) -> Result<(), String> {
    let leftover = patterns::RE_QUOTED.replace_all(body, "");
    if leftover.contains('\'') || leftover.contains('"') {
        return Err("unterminated string in array literal".to_string());
    }
    Ok(())
}

/// Map a cast declaration onto the closed type vocabulary.
///
/// Cast arguments (`decimal:2`) are stripped; unrecognized casts default
/// to string.
fn map_cast_type(cast: &str) -> AttributeType {
    let base = cast.split(':').next().unwrap_or(cast).trim();
    match base {
        "string" => AttributeType::String,
        "integer" | "int" => AttributeType::Integer,
        "bigint" => AttributeType::BigInt,
        "boolean" | "bool" => AttributeType::Boolean,
        "float" | "double" | "decimal" => AttributeType::Decimal,
        "date" => AttributeType::Date,
        "datetime" | "timestamp" => AttributeType::Timestamp,
        "json" | "array" | "object" | "collection" => AttributeType::Json,
        "text" => AttributeType::Text,
        _ => AttributeType::String,
    }
}
