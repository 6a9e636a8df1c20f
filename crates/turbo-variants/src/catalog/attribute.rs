//! Attribute types and values.

use crate::ids::AttributeTypeId;
use serde::{Deserialize, Serialize};

/// A facet of variation (e.g., Size).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AttributeType {
    /// Unique attribute type identifier.
    pub id: AttributeTypeId,
    /// Machine name, used as the key in flat selection params.
    pub name: String,
    /// Display title.
    pub title: String,
    /// Catalog-wide ordering; also the dependency order of the chain.
    pub position: i32,
}

impl AttributeType {
    /// Create a new attribute type.
    pub fn new(
        id: impl Into<AttributeTypeId>,
        name: impl Into<String>,
        title: impl Into<String>,
        position: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            title: title.into(),
            position,
        }
    }
}

/// One legal value of an attribute type (e.g., Large).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AttributeValue {
    /// Identifier, unique within its attribute type.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Sort order among sibling values.
    pub position: i32,
}

impl AttributeValue {
    pub fn new(code: impl Into<String>, name: impl Into<String>, position: i32) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            position,
        }
    }
}

/// An attribute type together with its declared values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductAttribute {
    #[serde(flatten)]
    pub attribute_type: AttributeType,
    #[serde(default)]
    pub values: Vec<AttributeValue>,
}

impl ProductAttribute {
    pub fn new(attribute_type: AttributeType, values: Vec<AttributeValue>) -> Self {
        Self {
            attribute_type,
            values,
        }
    }

    /// Look up a declared value by code.
    pub fn value(&self, code: &str) -> Option<&AttributeValue> {
        self.values.iter().find(|v| v.code == code)
    }
}

/// One fixed attribute on a variant (e.g., Size: Large).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VariantAttribute {
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    pub value: AttributeValue,
}

impl VariantAttribute {
    pub fn new(attribute_type: AttributeType, value: AttributeValue) -> Self {
        Self {
            attribute_type,
            value,
        }
    }

    /// Check the attribute against a structured selection (type id + value code).
    pub fn matches(&self, type_id: &AttributeTypeId, code: &str) -> bool {
        self.attribute_type.id == *type_id && self.value.code == code
    }

    /// Check the attribute against a flat selection (type name + value code).
    pub fn matches_named(&self, name: &str, code: &str) -> bool {
        self.attribute_type.name == name && self.value.code == code
    }
}
