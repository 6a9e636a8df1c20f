//! Product catalog unit.

use std::collections::{HashMap, HashSet};

use crate::catalog::{ProductAttribute, Variant};
use crate::error::CatalogError;
use crate::ids::{ProductId, VariantId};
use serde::{Deserialize, Serialize};

/// A product with its attribute types and variants.
///
/// Read-only input to the resolution functions; they never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    #[serde(default)]
    pub name: String,
    /// Attribute types with their declared values, ordered by `position`.
    #[serde(default)]
    pub attributes: Vec<ProductAttribute>,
    /// Purchasable variants.
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Create an empty product.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            attributes: Vec::new(),
            variants: Vec::new(),
        }
    }

    /// Parse a product from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert a JSON value into a product.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, CatalogError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Add an attribute type, builder style.
    pub fn with_attribute(mut self, attribute: ProductAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Add a variant, builder style.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Attribute types in ascending `position` order.
    ///
    /// The sort is stable, so equal positions keep their declared order.
    pub fn sorted_attributes(&self) -> Vec<&ProductAttribute> {
        let mut attributes: Vec<&ProductAttribute> = self.attributes.iter().collect();
        attributes.sort_by_key(|a| a.attribute_type.position);
        attributes
    }

    /// Look up a variant by ID.
    pub fn variant(&self, id: &VariantId) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == *id)
    }

    /// Check if `variant` is one of this product's variants (by identity).
    pub fn owns_variant(&self, variant: &Variant) -> bool {
        self.variants.iter().any(|v| std::ptr::eq(v, variant))
    }

    /// Check if the product has any variants.
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Check the catalog invariants, reporting the first violation.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut type_ids = HashSet::new();
        let mut positions: HashMap<i32, &str> = HashMap::new();

        for attribute in &self.attributes {
            let attribute_type = &attribute.attribute_type;
            if !type_ids.insert(&attribute_type.id) {
                return Err(CatalogError::DuplicateAttributeType(
                    attribute_type.id.to_string(),
                ));
            }
            if let Some(first) = positions.insert(attribute_type.position, attribute_type.id.as_str()) {
                return Err(CatalogError::DuplicatePosition {
                    first: first.to_string(),
                    second: attribute_type.id.to_string(),
                    position: attribute_type.position,
                });
            }

            let mut codes = HashSet::new();
            for value in &attribute.values {
                if !codes.insert(value.code.as_str()) {
                    return Err(CatalogError::DuplicateValueCode {
                        attribute_type: attribute_type.id.to_string(),
                        code: value.code.clone(),
                    });
                }
            }
        }

        for variant in &self.variants {
            let mut seen = HashSet::new();
            for attribute in &variant.attributes {
                let type_id = &attribute.attribute_type.id;
                if !type_ids.contains(type_id) {
                    return Err(CatalogError::UnknownAttributeType {
                        variant: variant.id.to_string(),
                        attribute_type: type_id.to_string(),
                    });
                }
                if !seen.insert(type_id) {
                    return Err(CatalogError::DuplicateVariantAttribute {
                        variant: variant.id.to_string(),
                        attribute_type: type_id.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
