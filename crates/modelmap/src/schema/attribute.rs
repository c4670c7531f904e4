use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed vocabulary of semantic attribute types.
///
/// Extractors map language-specific type declarations into this set;
/// anything they cannot resolve defaults to [`AttributeType::String`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    /// Short character data
    String,
    /// 32-bit integer
    Integer,
    /// 64-bit integer
    BigInt,
    /// True/false flag
    Boolean,
    /// Fixed-point numeric data
    Decimal,
    /// Calendar date without time of day
    Date,
    /// Date and time
    Timestamp,
    /// Structured document data
    Json,
    /// Long character data
    Text,
}

impl AttributeType {
    /// Lowercase name used in diagram notation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::String => "string",
            AttributeType::Integer => "integer",
            AttributeType::BigInt => "bigint",
            AttributeType::Boolean => "boolean",
            AttributeType::Decimal => "decimal",
            AttributeType::Date => "date",
            AttributeType::Timestamp => "timestamp",
            AttributeType::Json => "json",
            AttributeType::Text => "text",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field of an [`Entity`](super::Entity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Field identifier
    pub name: String,

    /// Semantic type
    #[serde(rename = "type")]
    pub data_type: AttributeType,

    /// Set only on the synthesized identifier field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,

    /// Reserved for future inference; not populated by current extraction rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
}

impl Attribute {
    /// Create an attribute with no flags set.
    pub fn new(name: impl Into<String>, data_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            data_type,
            primary: None,
            nullable: None,
        }
    }

    /// Mark as the primary identifier field.
    pub fn primary(mut self) -> Self {
        self.primary = Some(true);
        self
    }

    /// Mark as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = Some(true);
        self
    }

    /// Whether the primary flag is set.
    pub fn is_primary(&self) -> bool {
        self.primary == Some(true)
    }

    /// Whether the nullable flag is set.
    pub fn is_nullable(&self) -> bool {
        self.nullable == Some(true)
    }
}
