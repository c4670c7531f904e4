//! High-level generation entry points.
//!
//! Two paths produce the same artifacts: scanning a source directory with
//! an extractor, or supplying a pre-built schema literal. Both write the
//! diagram text and the viewer document (plus an optional JSON export) and
//! return a [`Summary`] of the run.

use crate::assemble::{build_schema, Schema, UnitError};
use crate::error::{GenerateError, Result};
use crate::export::{export_json, export_mermaid, export_viewer};
use crate::extract::{ModelExtractor, SourceUnit};
use crate::schema::{Entity, Relationship};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Diagram text artifact filename.
pub const DIAGRAM_FILE: &str = "schema.mmd";

/// Viewer document artifact filename.
pub const VIEWER_FILE: &str = "index.html";

/// JSON export artifact filename.
pub const JSON_FILE: &str = "schema.json";

/// Options for a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Diagram title
    pub title: String,

    /// Extract and render relationship edges
    pub include_relations: bool,

    /// Also write the JSON schema export
    pub emit_json: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            title: "Database Schema".to_string(),
            include_relations: true,
            emit_json: false,
        }
    }
}

/// Result summary of a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of entities in the rendered schema
    #[serde(rename = "entityCount")]
    pub entity_count: usize,

    /// Entity names in accumulation order
    #[serde(rename = "entityNames")]
    pub entity_names: Vec<String>,

    /// Number of relationship edges in the rendered schema
    #[serde(rename = "relationshipCount")]
    pub relationship_count: usize,

    /// Units that failed extraction (empty on the schema-literal path)
    pub errors: Vec<UnitError>,
}

/// Scan a source directory and generate the diagram artifacts.
///
/// # Errors
/// - [`GenerateError::InputNotFound`] when `input_dir` is not a directory
/// - [`GenerateError::NoEntitiesExtracted`] when the batch yields nothing
/// - [`GenerateError::Io`] when an artifact cannot be written
pub fn generate_from_directory(
    extractor: &dyn ModelExtractor,
    input_dir: &Path,
    output_dir: &Path,
    options: &GenerateOptions,
) -> Result<Summary> {
    if !input_dir.is_dir() {
        return Err(GenerateError::InputNotFound(input_dir.to_path_buf()));
    }

    let paths = extractor
        .discover_files(input_dir)
        .map_err(|e| match e {
            crate::error::ExtractError::Io(path, source) => GenerateError::Io(path, source),
            other => GenerateError::Io(input_dir.to_path_buf(), std::io::Error::other(other)),
        })?;
    info!(
        "discovered {} {} file(s) under {}",
        paths.len(),
        extractor.language(),
        input_dir.display()
    );

    // Unreadable units are recorded alongside extraction failures rather
    // than aborting discovery.
    let mut units: Vec<SourceUnit> = Vec::with_capacity(paths.len());
    let mut load_errors: Vec<UnitError> = Vec::new();
    for path in &paths {
        match extractor.load_unit(path) {
            Ok(unit) => units.push(unit),
            Err(e) => {
                warn!("failed to read {}: {}", path.display(), e);
                load_errors.push(UnitError {
                    file: e.path().clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    let mut schema = build_schema(extractor, &units, options.include_relations, input_dir)?;
    schema.errors.splice(0..0, load_errors);

    write_artifacts(&schema, output_dir, options)?;

    Ok(summarize(&schema))
}

/// Generate the diagram artifacts directly from a schema literal.
///
/// Bypasses extraction entirely; used for programmatic or test-driven
/// diagram generation without source scanning.
///
/// # Errors
/// - [`GenerateError::EmptySchema`] when `entities` is empty
/// - [`GenerateError::Io`] when an artifact cannot be written
pub fn generate_from_schema(
    entities: Vec<Entity>,
    relationships: Vec<Relationship>,
    output_dir: &Path,
    options: &GenerateOptions,
) -> Result<Summary> {
    if entities.is_empty() {
        return Err(GenerateError::EmptySchema);
    }

    let schema = Schema::from_parts(entities, relationships);
    write_artifacts(&schema, output_dir, options)?;

    Ok(summarize(&schema))
}

fn summarize(schema: &Schema) -> Summary {
    Summary {
        entity_count: schema.entities.len(),
        entity_names: schema.entity_names(),
        relationship_count: schema.relationships.len(),
        errors: schema.errors.clone(),
    }
}

/// Write all artifacts into `output_dir`, creating it if needed.
/// Existing artifacts are overwritten on every run.
fn write_artifacts(schema: &Schema, output_dir: &Path, options: &GenerateOptions) -> Result<()> {
    fs::create_dir_all(output_dir)
        .map_err(|e| GenerateError::Io(output_dir.to_path_buf(), e))?;

    let diagram = export_mermaid(&schema.entities, &schema.relationships, &options.title);

    let diagram_path = output_dir.join(DIAGRAM_FILE);
    fs::write(&diagram_path, &diagram).map_err(|e| GenerateError::Io(diagram_path.clone(), e))?;

    let viewer_path = output_dir.join(VIEWER_FILE);
    let viewer = export_viewer(&diagram, &options.title);
    fs::write(&viewer_path, viewer).map_err(|e| GenerateError::Io(viewer_path.clone(), e))?;

    if options.emit_json {
        let json_path = output_dir.join(JSON_FILE);
        let json = export_json(&schema.entities, &schema.relationships);
        fs::write(&json_path, json).map_err(|e| GenerateError::Io(json_path.clone(), e))?;
    }

    info!(
        "wrote {} entities, {} relationships to {}",
        schema.entities.len(),
        schema.relationships.len(),
        output_dir.display()
    );

    Ok(())
}
