//! Attribute chain derivation.
//!
//! Walks attribute types in position order and narrows the candidate
//! variants level by level, so the values offered for a type depend on the
//! values the selected variant fixes for the types before it.

use crate::catalog::{AttributeType, AttributeValue, Product, Variant};
use crate::ids::AttributeTypeId;
use serde::Serialize;
use tracing::{debug, trace};

/// One attribute type with the values still reachable at its level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainLink<'a> {
    #[serde(flatten)]
    pub attribute_type: &'a AttributeType,
    pub values: Vec<&'a AttributeValue>,
}

impl<'a> ChainLink<'a> {
    /// Check if a value code is selectable at this level.
    pub fn contains(&self, code: &str) -> bool {
        self.values.iter().any(|v| v.code == code)
    }

    /// The value codes, in position order.
    pub fn codes(&self) -> Vec<&'a str> {
        self.values.iter().map(|v| v.code.as_str()).collect()
    }
}

/// Ordered attribute types with their reachable values.
///
/// Borrows from the product it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributeChain<'a> {
    links: Vec<ChainLink<'a>>,
}

impl<'a> AttributeChain<'a> {
    pub fn links(&self) -> &[ChainLink<'a>] {
        &self.links
    }

    /// The link for an attribute type, if it is reachable.
    pub fn get(&self, type_id: &AttributeTypeId) -> Option<&ChainLink<'a>> {
        self.links.iter().find(|l| l.attribute_type.id == *type_id)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChainLink<'a>> {
        self.links.iter()
    }

    pub fn into_links(self) -> Vec<ChainLink<'a>> {
        self.links
    }
}

impl<'a> IntoIterator for AttributeChain<'a> {
    type Item = ChainLink<'a>;
    type IntoIter = std::vec::IntoIter<ChainLink<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.into_iter()
    }
}

/// Build the attribute chain for `selected`.
///
/// A candidate variant is dropped, for every later level too, as soon as it
/// lacks the current type or disagrees with `selected` on the previous
/// type. If `selected` fixes nothing for a type, every type after it
/// becomes unreachable and is left out of the chain.
pub fn build_attribute_chain<'a>(product: &'a Product, selected: &Variant) -> AttributeChain<'a> {
    let attributes = product.sorted_attributes();
    let mut candidates: Vec<&'a Variant> = product.variants.iter().collect();
    let mut links = Vec::with_capacity(attributes.len());

    for (index, attribute) in attributes.iter().enumerate() {
        let attribute_type = &attribute.attribute_type;
        let ancestor = index
            .checked_sub(1)
            .map(|prev| &attributes[prev].attribute_type.id);
        let ancestor_code = ancestor
            .and_then(|id| selected.attribute(id))
            .map(|a| a.value.code.as_str());

        candidates.retain(|&variant| {
            if variant.attribute(&attribute_type.id).is_none() {
                return false;
            }
            match ancestor {
                Some(ancestor_id) => match (variant.attribute(ancestor_id), ancestor_code) {
                    (Some(own), Some(code)) => own.value.code == code,
                    _ => false,
                },
                None => true,
            }
        });

        // Survivors are read last to first; equal positions keep that order.
        let mut values: Vec<&'a AttributeValue> = Vec::new();
        for &variant in candidates.iter().rev() {
            let Some(current) = variant.attribute(&attribute_type.id) else {
                continue;
            };
            if !values.iter().any(|v| v.code == current.value.code) {
                values.push(&current.value);
            }
        }

        if values.is_empty() {
            debug!(
                product = %product.id,
                variant = %selected.id,
                attribute_type = %attribute_type.id,
                "Attribute type unreachable, omitted from chain"
            );
            continue;
        }

        values.sort_by_key(|v| v.position);
        trace!(
            attribute_type = %attribute_type.id,
            values = values.len(),
            candidates = candidates.len(),
            "Chain link resolved"
        );
        links.push(ChainLink {
            attribute_type,
            values,
        });
    }

    links.sort_by_key(|l| l.attribute_type.position);
    AttributeChain { links }
}
