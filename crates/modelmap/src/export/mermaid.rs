//! Mermaid `erDiagram` export.
//!
//! Generates the textual diagram notation consumed by the HTML viewer and
//! by any Mermaid-aware renderer.

use crate::schema::{Entity, RelationKind, Relationship};

/// Edge notation for a cardinality class.
///
/// Recomputed from the kind on every render; no notation is ever read off
/// the relationship record itself.
fn edge_symbol(kind: RelationKind) -> &'static str {
    match kind {
        RelationKind::OneToOne => "||--||",
        RelationKind::OneToMany => "||--o{",
        RelationKind::ManyToOne => "}o--||",
        RelationKind::ManyToMany => "}o--o{",
    }
}

/// Render the schema as Mermaid `erDiagram` text.
///
/// One block per entity listing `<type> <name>` per attribute with trailing
/// flag tokens (`PK`, `NULL`), then one line per relationship as
/// `<from> <symbol> <to> : "<name>"`.
pub fn export_mermaid(entities: &[Entity], relationships: &[Relationship], title: &str) -> String {
    let mut output = String::new();

    if !title.is_empty() {
        output.push_str("---\n");
        output.push_str(&format!("title: {title}\n"));
        output.push_str("---\n");
    }
    output.push_str("erDiagram\n");

    for entity in entities {
        output.push_str(&format!("    {} {{\n", entity.name));
        for attr in &entity.attributes {
            let mut line = format!("        {} {}", attr.data_type, attr.name);
            if attr.is_primary() {
                line.push_str(" PK");
            }
            if attr.is_nullable() {
                line.push_str(" NULL");
            }
            line.push('\n');
            output.push_str(&line);
        }
        output.push_str("    }\n");
    }

    if !relationships.is_empty() {
        output.push('\n');
    }

    for rel in relationships {
        output.push_str(&format!(
            "    {} {} {} : \"{}\"\n",
            rel.from,
            edge_symbol(rel.kind),
            rel.to,
            escape_label(&rel.name)
        ));
    }

    output
}

/// Escape quote characters inside a relationship label.
fn escape_label(s: &str) -> String {
    s.replace('"', "#quot;")
}
