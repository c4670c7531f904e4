//! Integration tests for the generation entry points.

use modelmap::{
    generate_from_schema, Attribute, AttributeType, Entity, GenerateError, GenerateOptions,
    RelationKind, Relationship,
};
use std::fs;
use tempfile::TempDir;

fn sample_entity() -> Entity {
    Entity::new("User", "users").with_attributes(vec![
        Attribute::new("id", AttributeType::BigInt).primary(),
        Attribute::new("name", AttributeType::String),
    ])
}

#[test]
fn test_schema_literal_writes_artifacts() {
    let out = TempDir::new().unwrap();
    let summary = generate_from_schema(
        vec![sample_entity()],
        vec![Relationship::new(
            "User",
            "Post",
            "posts",
            RelationKind::OneToMany,
        )],
        out.path(),
        &GenerateOptions::default(),
    )
    .unwrap();

    assert_eq!(summary.entity_count, 1);
    assert_eq!(summary.entity_names, vec!["User"]);
    assert_eq!(summary.relationship_count, 1);
    assert!(summary.errors.is_empty());

    assert!(out.path().join("schema.mmd").is_file());
    assert!(out.path().join("index.html").is_file());
    assert!(!out.path().join("schema.json").exists());
}

#[test]
fn test_viewer_round_trips_diagram_text() {
    let out = TempDir::new().unwrap();
    generate_from_schema(
        vec![sample_entity()],
        Vec::new(),
        out.path(),
        &GenerateOptions::default(),
    )
    .unwrap();

    let viewer = fs::read_to_string(out.path().join("index.html")).unwrap();

    // The entity block header and the exact attribute line appear verbatim
    // inside the embedded diagram text.
    assert!(viewer.contains("    User {"));
    assert!(viewer.contains("        bigint id PK"));
}

#[test]
fn test_empty_literal_is_rejected() {
    let out = TempDir::new().unwrap();
    let result = generate_from_schema(
        Vec::new(),
        Vec::new(),
        out.path(),
        &GenerateOptions::default(),
    );

    assert!(matches!(result, Err(GenerateError::EmptySchema)));
    assert!(!out.path().join("schema.mmd").exists());
}

#[test]
fn test_json_artifact_on_request() {
    let out = TempDir::new().unwrap();
    let options = GenerateOptions {
        emit_json: true,
        ..Default::default()
    };
    generate_from_schema(vec![sample_entity()], Vec::new(), out.path(), &options).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("schema.json")).unwrap()).unwrap();
    assert_eq!(json["entities"][0]["tableName"], "users");
}

#[test]
fn test_rerun_overwrites_artifacts() {
    let out = TempDir::new().unwrap();
    generate_from_schema(
        vec![sample_entity()],
        Vec::new(),
        out.path(),
        &GenerateOptions {
            title: "First".to_string(),
            ..Default::default()
        },
    )
    .unwrap();
    generate_from_schema(
        vec![sample_entity()],
        Vec::new(),
        out.path(),
        &GenerateOptions {
            title: "Second".to_string(),
            ..Default::default()
        },
    )
    .unwrap();

    let diagram = fs::read_to_string(out.path().join("schema.mmd")).unwrap();
    assert!(diagram.contains("title: Second"));
    assert!(!diagram.contains("title: First"));
}
