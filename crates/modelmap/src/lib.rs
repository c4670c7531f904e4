//! # modelmap
//!
//! Infer a relational schema from model source files and render it as an ER diagram.
//!
//! ## Core Principles
//!
//! - **Language Agnostic Core**: schema model, assembly, and rendering know nothing
//!   about any source language; extraction lives behind [`ModelExtractor`]
//! - **Pattern Matching, Not Parsing**: extractors read declaration idioms from
//!   source text; mismatches are false negatives, never fatal
//! - **Never Abort the Batch**: a malformed source unit is recorded and skipped;
//!   only zero usable output fails a run
//! - **Recompute, Don't Carry**: presentation (edge notation, labels) is derived
//!   from [`RelationKind`] at render time, so stored state cannot drift
//!
//! ## Architecture
//!
//! ```text
//! Source units (*.php, ...)
//!     ↓
//! ModelExtractor impl (modelmap-php, ...)
//!     ↓
//! Schema assembler (entities + relationships + per-unit errors)
//!     ↓
//! Exporters (Mermaid text, HTML viewer, JSON)
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use modelmap::{generate_from_schema, Attribute, AttributeType, Entity, GenerateOptions};
//! use std::path::Path;
//!
//! let entity = Entity::new("User", "users")
//!     .with_attributes(vec![Attribute::new("id", AttributeType::BigInt).primary()]);
//!
//! let summary = generate_from_schema(
//!     vec![entity],
//!     Vec::new(),
//!     Path::new("./out"),
//!     &GenerateOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(summary.entity_count, 1);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod assemble;
pub mod error;
pub mod export;
pub mod extract;
pub mod generate;
pub mod schema;

// Re-export main types
pub use assemble::{build_schema, Schema, UnitError};
pub use error::{ExtractError, GenerateError, Result};
pub use export::{export_json, export_mermaid, export_viewer};
pub use extract::{ModelExtractor, SourceUnit};
pub use generate::{generate_from_directory, generate_from_schema, GenerateOptions, Summary};
pub use schema::{Attribute, AttributeType, Entity, RelationKind, Relationship};
