//! Error types for schema extraction and generation.
//!
//! Failures split into two layers: [`ExtractError`] covers a single source
//! unit and is always recovered by the assembler; [`GenerateError`] covers
//! whole-run conditions and surfaces to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for run-level operations.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Failure extracting one source unit.
///
/// These never abort a batch: the assembler records them and moves on to
/// the next unit.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Source unit could not be read
    #[error("IO error reading {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    /// A declaration was matched but its body could not be parsed
    #[error("Extraction failed for {0}: {1}")]
    Malformed(PathBuf, String),
}

impl ExtractError {
    /// Path of the unit this error belongs to.
    pub fn path(&self) -> &PathBuf {
        match self {
            ExtractError::Io(path, _) => path,
            ExtractError::Malformed(path, _) => path,
        }
    }
}

/// Fatal conditions for a whole generation run.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Input directory does not exist
    #[error("Input directory not found: {0}")]
    InputNotFound(PathBuf),

    /// The batch finished without extracting a single entity
    #[error("no valid models found in {0}")]
    NoEntitiesExtracted(PathBuf),

    /// Schema-literal generation invoked with an empty entity collection
    #[error("schema contains no entities")]
    EmptySchema,

    /// Failed to write an output artifact
    #[error("IO error writing {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
}
