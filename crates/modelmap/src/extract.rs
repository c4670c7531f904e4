//! Extractor contract between the language-agnostic core and concrete
//! source analyzers.

use crate::error::ExtractError;
use crate::schema::{Entity, Relationship};
use std::fs;
use std::path::{Path, PathBuf};

/// One declarative source file.
///
/// The symbolic `name` is the base filename minus its extension and doubles
/// as the entity name when the unit turns out to be a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// Symbolic entity name derived from the filename
    pub name: String,

    /// Path the unit was loaded from
    pub path: PathBuf,

    /// Raw source text
    pub content: String,
}

impl SourceUnit {
    /// Create a unit from in-memory source text.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Core trait a concrete schema extractor must implement.
///
/// Extraction is pattern matching over declaration idioms, not parsing:
/// implementations return `Ok(None)` for units that do not look like a
/// model, and an error only when a declaration was matched but could not
/// be read. Both outcomes are recovered by the assembler.
///
/// # Thread Safety
/// Implementations must be `Send + Sync`.
pub trait ModelExtractor: Send + Sync {
    /// Language identifier (lowercase, e.g. "php").
    fn language(&self) -> &str;

    /// Supported file extensions (e.g. `[".php"]`).
    fn file_extensions(&self) -> &[&str];

    /// Cheap pre-filter to skip units that cannot plausibly be models.
    ///
    /// Default accepts everything; implementations override with
    /// inheritance/trait-usage markers to avoid wasted extraction work.
    fn is_candidate(&self, _unit: &SourceUnit) -> bool {
        true
    }

    /// Extract one entity from the unit, or `Ok(None)` when it is not a model.
    fn extract_entity(&self, unit: &SourceUnit) -> Result<Option<Entity>, ExtractError>;

    /// Extract relationship edges declared by the unit.
    ///
    /// `known` is an immutable snapshot of the entities accumulated so far.
    /// Implementations may use it for cross-checking but must tolerate
    /// targets that are not (yet) in it: dangling references are carried
    /// through to rendering.
    fn extract_relations(&self, unit: &SourceUnit, known: &[Entity]) -> Vec<Relationship>;

    /// Discover extractable files under a directory.
    ///
    /// Default implementation walks the tree recursively, filters by
    /// [`file_extensions`](Self::file_extensions), and sorts the result so
    /// accumulation order is deterministic.
    fn discover_files(&self, dir: &Path) -> Result<Vec<PathBuf>, ExtractError> {
        let mut files = Vec::new();
        let extensions = self.file_extensions();

        fn walk_dir(
            dir: &Path,
            extensions: &[&str],
            files: &mut Vec<PathBuf>,
        ) -> Result<(), ExtractError> {
            if !dir.is_dir() {
                return Ok(());
            }

            for entry in fs::read_dir(dir).map_err(|e| ExtractError::Io(dir.to_path_buf(), e))? {
                let entry = entry.map_err(|e| ExtractError::Io(dir.to_path_buf(), e))?;
                let path = entry.path();

                if path.is_dir() {
                    walk_dir(&path, extensions, files)?;
                } else if let Some(ext) = path.extension() {
                    let ext_str = format!(".{}", ext.to_string_lossy());
                    if extensions.contains(&ext_str.as_str()) {
                        files.push(path);
                    }
                }
            }

            Ok(())
        }

        walk_dir(dir, extensions, &mut files)?;
        files.sort();
        Ok(files)
    }

    /// Load a source unit from disk, deriving the symbolic name from the
    /// file stem.
    fn load_unit(&self, path: &Path) -> Result<SourceUnit, ExtractError> {
        let content =
            fs::read_to_string(path).map_err(|e| ExtractError::Io(path.to_path_buf(), e))?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        Ok(SourceUnit {
            name,
            path: path.to_path_buf(),
            content,
        })
    }

    /// Check whether this extractor can handle the given file.
    fn can_extract(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension() {
            let ext_str = format!(".{}", ext.to_string_lossy());
            self.file_extensions().contains(&ext_str.as_str())
        } else {
            false
        }
    }
}
