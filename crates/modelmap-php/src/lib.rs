//! # modelmap-php
//!
//! PHP model extractor for Modelmap - infers entities and relationships from
//! Eloquent-style model classes.
//!
//! ## Features
//!
//! - Pattern-based extraction, no AST: common declaration idioms are matched
//!   directly in the source text
//! - Attributes from `$fillable` and `$casts`, with cast types authoritative
//! - Table names from `$table` or pluralized class names
//! - Relationships from zero-argument accessors calling `hasOne`,
//!   `belongsTo`, `hasMany`, or `belongsToMany`
//!
//! ## Known blind spots
//!
//! Accepted limitations of the heuristic, not bugs: nested braces inside a
//! matched method body, method signatures split across lines before the
//! opening brace, and computed or dynamic class references all produce
//! false negatives.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use modelmap::{generate_from_directory, GenerateOptions};
//! use modelmap_php::PhpModelExtractor;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = PhpModelExtractor::new();
//! let summary = generate_from_directory(
//!     &extractor,
//!     Path::new("app/Models"),
//!     Path::new("./modelmap"),
//!     &GenerateOptions::default(),
//! )?;
//! println!("Extracted {} entities", summary.entity_count);
//! # Ok(())
//! # }
//! ```

mod attributes;
mod extractor;
mod patterns;
mod pluralize;
mod relations;

// Re-export core types for convenience
pub use modelmap::{ExtractError, ModelExtractor, SourceUnit};

// Export the PHP extractor implementation
pub use extractor::PhpModelExtractor;
