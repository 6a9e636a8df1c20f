//! Product catalog module.
//!
//! Contains the read-only data model: products, attribute types and
//! values, and variants.

mod attribute;
mod product;
mod variant;

pub use attribute::{AttributeType, AttributeValue, ProductAttribute, VariantAttribute};
pub use product::Product;
pub use variant::Variant;
