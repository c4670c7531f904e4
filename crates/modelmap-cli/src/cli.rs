//! Command-line interface for the modelmap utility
//!
//! Scans a directory of PHP model classes and writes the diagram artifacts
//! into an output directory.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use modelmap::{generate_from_directory, GenerateOptions};
use modelmap_php::PhpModelExtractor;
use std::path::PathBuf;

/// Modelmap - generate an ER diagram from PHP model classes
#[derive(Parser, Debug)]
#[command(name = "modelmap")]
#[command(about = "Infer a relational schema from PHP model classes and render it as an ER diagram")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Directory containing model source files
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory for the generated artifacts
    #[arg(short, long, default_value = "modelmap")]
    pub output: PathBuf,

    /// Diagram title
    #[arg(short, long, default_value = "Database Schema")]
    pub title: String,

    /// Skip relationship extraction
    #[arg(long)]
    pub no_relations: bool,

    /// Also write a JSON export of the schema
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run a generation pass and report the outcome on stdout/stderr.
pub fn run(cli: Cli) -> Result<()> {
    let options = GenerateOptions {
        title: cli.title.clone(),
        include_relations: !cli.no_relations,
        emit_json: cli.json,
    };

    info!("scanning {}", cli.input.display());
    let extractor = PhpModelExtractor::new();
    let summary = generate_from_directory(&extractor, &cli.input, &cli.output, &options)
        .with_context(|| format!("generating diagram from {}", cli.input.display()))?;

    // Per-unit failures are warnings; the run already succeeded
    for error in &summary.errors {
        eprintln!("warning: {}: {}", error.file.display(), error.message);
    }

    println!(
        "Extracted {} entities and {} relationships into {}",
        summary.entity_count,
        summary.relationship_count,
        cli.output.display()
    );
    println!("Entities: {}", summary.entity_names.join(", "));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["modelmap", "--input", "app/Models"]).unwrap();

        assert_eq!(cli.input, PathBuf::from("app/Models"));
        assert_eq!(cli.output, PathBuf::from("modelmap"));
        assert_eq!(cli.title, "Database Schema");
        assert!(!cli.no_relations);
        assert!(!cli.json);
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["modelmap"]).is_err());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "modelmap",
            "-i",
            "src",
            "-o",
            "out",
            "-t",
            "My Schema",
            "--no-relations",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.title, "My Schema");
        assert!(cli.no_relations);
        assert!(cli.json);
    }

    #[test]
    fn test_run_against_missing_input_fails() {
        let cli = Cli::try_parse_from(["modelmap", "--input", "/nonexistent/models"]).unwrap();
        assert!(run(cli).is_err());
    }

    #[test]
    fn test_run_end_to_end() {
        let input = tempfile::TempDir::new().unwrap();
        std::fs::write(
            input.path().join("User.php"),
            "<?php\nclass User extends Model\n{\n    protected $fillable = ['name'];\n}\n",
        )
        .unwrap();
        let output = tempfile::TempDir::new().unwrap();

        let cli = Cli::try_parse_from([
            "modelmap",
            "-i",
            input.path().to_str().unwrap(),
            "-o",
            output.path().to_str().unwrap(),
        ])
        .unwrap();

        run(cli).unwrap();
        assert!(output.path().join("schema.mmd").is_file());
        assert!(output.path().join("index.html").is_file());
    }
}
