use super::attribute::{Attribute, AttributeType};
use serde::{Deserialize, Serialize};

/// One inferred table/model.
///
/// Attribute order is preserved from extraction (identifier first, declared
/// fields next, timestamps last) and affects only rendering. No two
/// attributes share a name; later declarations override the type in place
/// via [`Entity::upsert_attribute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Symbolic identifier, unique within a run
    pub name: String,

    /// Resolved storage name (explicit override or pluralized lowercase name)
    #[serde(rename = "tableName")]
    pub table_name: String,

    /// Ordered fields
    pub attributes: Vec<Attribute>,
}

impl Entity {
    /// Create an entity with no attributes.
    pub fn new(name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
            attributes: Vec::new(),
        }
    }

    /// Replace the attribute list.
    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Look up an attribute by exact name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Whether an attribute with this exact name exists.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Append the attribute, or overwrite the type of an existing one.
    ///
    /// Keeps the name-uniqueness invariant: a repeated declaration changes
    /// the type of the row already in place instead of adding a second row.
    pub fn upsert_attribute(&mut self, name: impl Into<String>, data_type: AttributeType) {
        let name = name.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.data_type = data_type,
            None => self.attributes.push(Attribute::new(name, data_type)),
        }
    }

    /// Append the attribute only if the name is not already taken.
    pub fn push_if_absent(&mut self, attribute: Attribute) {
        if !self.has_attribute(&attribute.name) {
            self.attributes.push(attribute);
        }
    }
}
