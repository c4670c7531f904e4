use serde::{Deserialize, Serialize};
use std::fmt;

/// Cardinality class of a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    /// Pairwise-owning: each side has at most one of the other
    #[serde(rename = "1-1")]
    OneToOne,
    /// Collection-owning: one record owns many
    #[serde(rename = "1-N")]
    OneToMany,
    /// Owned-by: many records point back at one
    #[serde(rename = "N-1")]
    ManyToOne,
    /// Many-to-many through a join table
    #[serde(rename = "N-N")]
    ManyToMany,
}

impl RelationKind {
    /// Cardinality notation ("1-1", "1-N", "N-1", "N-N").
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::OneToOne => "1-1",
            RelationKind::OneToMany => "1-N",
            RelationKind::ManyToOne => "N-1",
            RelationKind::ManyToMany => "N-N",
        }
    }

    /// Human description of the owning direction, where one exists.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            RelationKind::OneToOne => Some("has one"),
            RelationKind::OneToMany => Some("has many"),
            RelationKind::ManyToOne => Some("belongs to"),
            RelationKind::ManyToMany => None,
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed, labeled, cardinality-typed edge between two entity names.
///
/// `to` need not resolve to a known entity: forward and dangling references
/// are carried through and rendered as-is. Diagram notation and the human
/// label are derived from `kind` at render time, never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Source entity name
    pub from: String,

    /// Target entity name (may dangle)
    pub to: String,

    /// Accessor method that declared the relationship; not guaranteed unique
    pub name: String,

    /// Cardinality class
    #[serde(rename = "type")]
    pub kind: RelationKind,
}

impl Relationship {
    /// Create a relationship edge.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        name: impl Into<String>,
        kind: RelationKind,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            name: name.into(),
            kind,
        }
    }
}
