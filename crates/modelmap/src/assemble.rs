//! Batch assembly of source units into an accumulated schema.

use crate::error::GenerateError;
use crate::extract::{ModelExtractor, SourceUnit};
use crate::schema::{Entity, Relationship};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A source unit that failed extraction, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitError {
    /// Path of the failing unit
    pub file: PathBuf,

    /// Human-readable failure message
    pub message: String,
}

/// Accumulated result of one assembly pass.
///
/// Created once per run, held in memory, and discarded after rendering.
/// `errors` is non-empty on partial extraction; the run as a whole only
/// fails when no entity survives at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Extracted entities, in input order
    pub entities: Vec<Entity>,

    /// Extracted relationship edges, in declaration order
    pub relationships: Vec<Relationship>,

    /// Units that failed extraction
    pub errors: Vec<UnitError>,
}

impl Schema {
    /// Build a schema directly from pre-assembled collections.
    ///
    /// This is the schema-literal bypass: no scanning, no per-unit error
    /// tolerance.
    pub fn from_parts(entities: Vec<Entity>, relationships: Vec<Relationship>) -> Self {
        Self {
            entities,
            relationships,
            errors: Vec::new(),
        }
    }

    /// Whether no entities were extracted.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Names of all extracted entities, in accumulation order.
    pub fn entity_names(&self) -> Vec<String> {
        self.entities.iter().map(|e| e.name.clone()).collect()
    }
}

/// Assemble a schema from source units.
///
/// Units are processed in input order. A unit failing extraction is
/// recorded in [`Schema::errors`] and skipped; a single malformed unit
/// never aborts the batch. After each extracted entity is appended, the
/// relationship extractor (when requested) receives an immutable snapshot
/// of the entities accumulated so far.
///
/// # Errors
/// [`GenerateError::NoEntitiesExtracted`] when zero entities survive the
/// whole batch. `origin` only names the input in that message.
pub fn build_schema(
    extractor: &dyn ModelExtractor,
    units: &[SourceUnit],
    include_relations: bool,
    origin: &Path,
) -> Result<Schema, GenerateError> {
    let mut schema = Schema::default();

    for unit in units {
        if !extractor.is_candidate(unit) {
            trace!("skipping {}: not a model candidate", unit.path.display());
            continue;
        }

        let entity = match extractor.extract_entity(unit) {
            Ok(Some(entity)) => entity,
            Ok(None) => {
                trace!("skipping {}: no model declaration", unit.path.display());
                continue;
            }
            Err(e) => {
                warn!("failed to extract {}: {}", unit.path.display(), e);
                schema.errors.push(UnitError {
                    file: e.path().clone(),
                    message: e.to_string(),
                });
                continue;
            }
        };

        debug!(
            "extracted entity {} ({} attributes)",
            entity.name,
            entity.attributes.len()
        );
        schema.entities.push(entity);

        if include_relations {
            let edges = extractor.extract_relations(unit, &schema.entities);
            trace!("{}: {} relationship(s)", unit.name, edges.len());
            schema.relationships.extend(edges);
        }
    }

    if schema.is_empty() {
        return Err(GenerateError::NoEntitiesExtracted(origin.to_path_buf()));
    }

    Ok(schema)
}
