//! Relationship extraction from one model source unit.

use crate::patterns;
use log::trace;
use modelmap::{Entity, RelationKind, Relationship};

/// Extract relationship edges declared by zero-argument accessor methods.
///
/// `known` is the snapshot of entities accumulated so far; it is accepted
/// for future cross-checking, but dangling targets pass through so forward
/// references keep working. Repeated (`from`, `to`, `name`) triples are
/// emitted verbatim.
pub fn extract_relations(
    symbolic_name: &str,
    source: &str,
    _known: &[Entity],
) -> Vec<Relationship> {
    let mut edges = Vec::new();

    for caps in patterns::RE_RELATION.captures_iter(source) {
        let method = &caps[1];
        let call = &caps[2];
        let argument = &caps[3];

        let Some(target) = resolve_target(argument) else {
            trace!("{symbolic_name}::{method}: unresolvable target {argument:?}");
            continue;
        };

        let kind = match call {
            "hasOne" => RelationKind::OneToOne,
            "hasMany" => RelationKind::OneToMany,
            "belongsTo" => RelationKind::ManyToOne,
            "belongsToMany" => RelationKind::ManyToMany,
            _ => continue,
        };

        edges.push(Relationship::new(symbolic_name, target, method, kind));
    }

    edges
}

/// Resolve the target entity name from a relationship call's first argument.
///
/// Strips a trailing `::class` marker and surrounding quotes, drops a
/// leading namespace separator, and takes the final segment after any `\`.
/// Returns `None` for anything that does not reduce to a bare identifier
/// (variables, keywords, computed references).
fn resolve_target(argument: &str) -> Option<String> {
    let trimmed = argument.trim();
    let without_marker = trimmed.strip_suffix("::class").unwrap_or(trimmed).trim();
    let unquoted = without_marker.trim_matches(|c| c == '\'' || c == '"');
    let segment = unquoted
        .trim_start_matches('\\')
        .rsplit('\\')
        .next()
        .unwrap_or("")
        .trim();

    if segment.is_empty() {
        return None;
    }
    if !segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    if matches!(segment, "self" | "static" | "parent") {
        return None;
    }

    Some(segment.to_string())
}
