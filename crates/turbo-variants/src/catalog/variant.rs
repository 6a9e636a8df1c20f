//! Purchasable variants.

use crate::catalog::VariantAttribute;
use crate::ids::{AttributeTypeId, VariantId};
use crate::selection::SelectionParams;
use serde::{Deserialize, Serialize};

/// A concrete, purchasable combination of attribute values (a SKU).
///
/// `attributes` holds at most one entry per attribute type. A variant may
/// omit types that do not apply to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Stock keeping unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Variant name (e.g., "Large / Blue").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Attribute values that define this variant.
    #[serde(default)]
    pub attributes: Vec<VariantAttribute>,
}

impl Variant {
    /// Create a variant with no attributes.
    pub fn new(id: impl Into<VariantId>) -> Self {
        Self {
            id: id.into(),
            sku: None,
            name: None,
            attributes: Vec::new(),
        }
    }

    /// Add an attribute, builder style.
    pub fn with_attribute(mut self, attribute: VariantAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// The attribute fixed for a type, if any.
    pub fn attribute(&self, type_id: &AttributeTypeId) -> Option<&VariantAttribute> {
        self.attributes
            .iter()
            .find(|a| a.attribute_type.id == *type_id)
    }

    /// The attribute fixed for a type name, if any.
    pub fn attribute_by_name(&self, name: &str) -> Option<&VariantAttribute> {
        self.attributes
            .iter()
            .find(|a| a.attribute_type.name == name)
    }

    /// Check if the variant fixes `type_id` to `code`.
    pub fn has_attribute(&self, type_id: &AttributeTypeId, code: &str) -> bool {
        self.attributes.iter().any(|a| a.matches(type_id, code))
    }

    /// Check if the variant fixes the type named `name` to `code`.
    pub fn has_attribute_named(&self, name: &str, code: &str) -> bool {
        self.attributes.iter().any(|a| a.matches_named(name, code))
    }

    /// Flatten the attributes into name -> code params.
    pub fn to_params(&self) -> SelectionParams {
        self.attributes
            .iter()
            .map(|a| (a.attribute_type.name.clone(), a.value.code.clone()))
            .collect()
    }
}
