//! Integration tests for modelmap-php over on-disk fixtures.

use modelmap::{
    build_schema, generate_from_directory, GenerateOptions, ModelExtractor, RelationKind,
};
use modelmap_php::PhpModelExtractor;
use std::path::Path;
use tempfile::TempDir;

fn fixtures_path() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"))
}

fn assemble() -> modelmap::Schema {
    let extractor = PhpModelExtractor::new();
    let paths = extractor.discover_files(fixtures_path()).unwrap();
    let units: Vec<_> = paths
        .iter()
        .map(|p| extractor.load_unit(p).unwrap())
        .collect();

    build_schema(&extractor, &units, true, fixtures_path()).unwrap()
}

#[test]
fn test_extracts_all_concrete_models() {
    let schema = assemble();

    // Abstract class and helper file are skipped; broken file errors out
    assert_eq!(
        schema.entity_names(),
        vec!["Country", "Invoice", "Post", "Role", "User"]
    );
}

#[test]
fn test_broken_unit_lands_in_errors_only() {
    let schema = assemble();

    assert_eq!(schema.errors.len(), 1);
    assert!(schema.errors[0].file.ends_with("Receipt.php"));
    assert!(schema.errors[0].message.contains("unterminated string"));
}

#[test]
fn test_table_names() {
    let schema = assemble();
    let table = |name: &str| {
        schema
            .entities
            .iter()
            .find(|e| e.name == name)
            .unwrap()
            .table_name
            .clone()
    };

    assert_eq!(table("Country"), "countries");
    assert_eq!(table("Post"), "blog_posts");
    assert_eq!(table("User"), "users");
}

#[test]
fn test_relationships_across_fixtures() {
    let schema = assemble();

    let find = |from: &str, name: &str| {
        schema
            .relationships
            .iter()
            .find(|r| r.from == from && r.name == name)
            .unwrap()
    };

    assert_eq!(find("User", "posts").kind, RelationKind::OneToMany);
    assert_eq!(find("User", "profile").kind, RelationKind::OneToOne);
    assert_eq!(find("User", "roles").kind, RelationKind::ManyToMany);
    assert_eq!(find("Post", "author").kind, RelationKind::ManyToOne);

    // Profile has no source unit; the dangling edge is still present
    assert_eq!(find("User", "profile").to, "Profile");
}

#[test]
fn test_generate_from_fixture_directory() {
    let out = TempDir::new().unwrap();
    let extractor = PhpModelExtractor::new();
    let options = GenerateOptions {
        emit_json: true,
        ..Default::default()
    };

    let summary =
        generate_from_directory(&extractor, fixtures_path(), out.path(), &options).unwrap();

    assert_eq!(summary.entity_count, 5);
    assert_eq!(summary.relationship_count, 7);
    assert_eq!(summary.errors.len(), 1);

    let diagram = std::fs::read_to_string(out.path().join("schema.mmd")).unwrap();
    assert!(diagram.contains("    User {"));
    assert!(diagram.contains("    Post }o--|| User : \"author\""));
    assert!(diagram.contains("    User }o--o{ Role : \"roles\""));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.path().join("schema.json")).unwrap())
            .unwrap();
    assert_eq!(json["entities"].as_array().unwrap().len(), 5);
}

#[test]
fn test_missing_input_directory_is_fatal() {
    let out = TempDir::new().unwrap();
    let extractor = PhpModelExtractor::new();

    let result = generate_from_directory(
        &extractor,
        Path::new("/nonexistent/models"),
        out.path(),
        &GenerateOptions::default(),
    );

    assert!(matches!(
        result,
        Err(modelmap::GenerateError::InputNotFound(_))
    ));
}

#[test]
fn test_directory_without_models_is_fatal() {
    let input = TempDir::new().unwrap();
    std::fs::write(
        input.path().join("readme.php"),
        "<?php // nothing to see here",
    )
    .unwrap();
    let out = TempDir::new().unwrap();
    let extractor = PhpModelExtractor::new();

    let result = generate_from_directory(
        &extractor,
        input.path(),
        out.path(),
        &GenerateOptions::default(),
    );

    assert!(matches!(
        result,
        Err(modelmap::GenerateError::NoEntitiesExtracted(_))
    ));
}
