//! Shared catalog fixtures for unit tests.

use crate::catalog::{AttributeType, AttributeValue, Product, ProductAttribute, Variant, VariantAttribute};

pub(crate) fn size() -> AttributeType {
    AttributeType::new("attr-size", "size", "Size", 0)
}

pub(crate) fn color() -> AttributeType {
    AttributeType::new("attr-color", "color", "Color", 1)
}

pub(crate) fn large() -> AttributeValue {
    AttributeValue::new("L", "Large", 0)
}

pub(crate) fn small() -> AttributeValue {
    AttributeValue::new("S", "Small", 1)
}

pub(crate) fn red() -> AttributeValue {
    AttributeValue::new("red", "Red", 0)
}

pub(crate) fn blue() -> AttributeValue {
    AttributeValue::new("blue", "Blue", 1)
}

pub(crate) fn variant(id: &str, attributes: &[(AttributeType, AttributeValue)]) -> Variant {
    attributes
        .iter()
        .cloned()
        .fold(Variant::new(id), |v, (t, value)| {
            v.with_attribute(VariantAttribute::new(t, value))
        })
}

/// Size -> Color with V1 {L, red}, V2 {L, blue}, V3 {S, red}.
pub(crate) fn size_color_product() -> Product {
    Product::new("p-shirt", "Shirt")
        .with_attribute(ProductAttribute::new(size(), vec![large(), small()]))
        .with_attribute(ProductAttribute::new(color(), vec![red(), blue()]))
        .with_variant(variant("V1", &[(size(), large()), (color(), red())]))
        .with_variant(variant("V2", &[(size(), large()), (color(), blue())]))
        .with_variant(variant("V3", &[(size(), small()), (color(), red())]))
}
