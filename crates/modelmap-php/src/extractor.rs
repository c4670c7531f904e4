//! Implementation of the core extractor trait for PHP model classes.

use crate::{attributes, relations};
use log::debug;
use modelmap::{Entity, ExtractError, ModelExtractor, Relationship, SourceUnit};

// Inheritance and trait-usage markers a plausible model carries
const MODEL_MARKERS: &[&str] = &[
    "extends Model",
    "extends Authenticatable",
    "extends Pivot",
    "use HasFactory",
    "Illuminate\\Database\\Eloquent",
];

/// PHP model extractor.
///
/// Reads Eloquent-style model classes with pattern matching and produces
/// entities and relationship edges for the schema assembler.
#[derive(Debug, Default)]
pub struct PhpModelExtractor;

impl PhpModelExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }
}

impl ModelExtractor for PhpModelExtractor {
    fn language(&self) -> &str {
        "php"
    }

    fn file_extensions(&self) -> &[&str] {
        &[".php"]
    }

    /// Plausibility pre-filter: an inheritance marker, a known trait-usage
    /// marker, or the conventional `*Model` filename suffix.
    fn is_candidate(&self, unit: &SourceUnit) -> bool {
        MODEL_MARKERS
            .iter()
            .any(|marker| unit.content.contains(marker))
            || unit.name.ends_with("Model")
    }

    fn extract_entity(&self, unit: &SourceUnit) -> Result<Option<Entity>, ExtractError> {
        debug!("extracting attributes from {}", unit.path.display());
        attributes::extract_attributes(&unit.name, &unit.content)
            .map_err(|message| ExtractError::Malformed(unit.path.clone(), message))
    }

    fn extract_relations(&self, unit: &SourceUnit, known: &[Entity]) -> Vec<Relationship> {
        relations::extract_relations(&unit.name, &unit.content, known)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(name: &str, content: &str) -> SourceUnit {
        SourceUnit::new(name, format!("{name}.php"), content)
    }

    #[test]
    fn test_language_and_extensions() {
        let extractor = PhpModelExtractor::new();
        assert_eq!(extractor.language(), "php");
        assert_eq!(extractor.file_extensions(), &[".php"]);
    }

    #[test]
    fn test_candidate_markers() {
        let extractor = PhpModelExtractor::new();

        assert!(extractor.is_candidate(&unit("User", "class User extends Model {}")));
        assert!(extractor.is_candidate(&unit("User", "use HasFactory;")));
        assert!(extractor.is_candidate(&unit("UserModel", "class UserModel {}")));
        assert!(!extractor.is_candidate(&unit("helpers", "function helper() {}")));
    }

    #[test]
    fn test_malformed_unit_carries_path() {
        let extractor = PhpModelExtractor::new();
        let bad = unit(
            "Receipt",
            "<?php class Receipt extends Model { protected $fillable = ['number, 'total']; }",
        );

        let err = extractor.extract_entity(&bad).unwrap_err();
        assert!(matches!(err, ExtractError::Malformed(ref path, _) if path.ends_with("Receipt.php")));
    }
}
