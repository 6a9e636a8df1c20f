//! Caller-supplied attribute selections.
//!
//! Two shapes exist: an ordered list of structured (type id, value code)
//! pairs, and a flat name -> code map as it arrives from URL query params.
//! Neither is deduplicated or reconciled here; conflicting entries are the
//! caller's responsibility.

use std::collections::BTreeMap;

use crate::catalog::{Product, Variant};
use crate::ids::AttributeTypeId;
use serde::{Deserialize, Serialize};

/// One structured selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AttributeSelection {
    pub type_id: AttributeTypeId,
    pub value_code: String,
}

impl AttributeSelection {
    pub fn new(type_id: impl Into<AttributeTypeId>, value_code: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            value_code: value_code.into(),
        }
    }
}

/// Ordered structured selections; index 0 has the highest priority.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SelectedAttributes(Vec<AttributeSelection>);

impl SelectedAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a selection at the lowest priority.
    pub fn with(mut self, type_id: impl Into<AttributeTypeId>, value_code: impl Into<String>) -> Self {
        self.0.push(AttributeSelection::new(type_id, value_code));
        self
    }

    /// Selections mirroring a variant's attributes in catalog order.
    ///
    /// Types the variant does not fix are skipped.
    pub fn from_variant(variant: &Variant, product: &Product) -> Self {
        let selections = product
            .sorted_attributes()
            .into_iter()
            .filter_map(|attribute| variant.attribute(&attribute.attribute_type.id))
            .map(|a| AttributeSelection::new(a.attribute_type.id.clone(), a.value.code.clone()))
            .collect();
        Self(selections)
    }

    /// Move the selection for `type_id` to the front with the given code.
    ///
    /// Any existing selections for that type are dropped first, so the
    /// result holds exactly one entry for it.
    pub fn prioritize(mut self, type_id: impl Into<AttributeTypeId>, value_code: impl Into<String>) -> Self {
        let selection = AttributeSelection::new(type_id, value_code);
        self.0.retain(|s| s.type_id != selection.type_id);
        self.0.insert(0, selection);
        self
    }

    pub fn as_slice(&self) -> &[AttributeSelection] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AttributeSelection> {
        self.0.iter()
    }
}

impl From<Vec<AttributeSelection>> for SelectedAttributes {
    fn from(selections: Vec<AttributeSelection>) -> Self {
        Self(selections)
    }
}

impl AsRef<[AttributeSelection]> for SelectedAttributes {
    fn as_ref(&self) -> &[AttributeSelection] {
        &self.0
    }
}

/// Flat attribute name -> value code params.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SelectionParams(BTreeMap<String, String>);

impl SelectionParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the code for an attribute name, returning any previous code.
    pub fn insert(&mut self, name: impl Into<String>, code: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), code.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SelectionParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
