//! Catalog error types.
//!
//! Resolution itself never fails: the matchers return `None` and the chain
//! builder returns an empty chain. These errors only come out of loading,
//! configuration and [`Product::validate`](crate::catalog::Product::validate).

use thiserror::Error;

/// Errors raised while loading or validating a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two attribute types share a position.
    #[error("Attribute types {first} and {second} share position {position}")]
    DuplicatePosition {
        first: String,
        second: String,
        position: i32,
    },

    /// An attribute type is declared twice.
    #[error("Attribute type declared twice: {0}")]
    DuplicateAttributeType(String),

    /// A value code appears twice within one attribute type.
    #[error("Value code {code} declared twice for attribute type {attribute_type}")]
    DuplicateValueCode {
        attribute_type: String,
        code: String,
    },

    /// A variant fixes the same attribute type more than once.
    #[error("Variant {variant} has more than one value for attribute type {attribute_type}")]
    DuplicateVariantAttribute {
        variant: String,
        attribute_type: String,
    },

    /// A variant references an attribute type the product does not declare.
    #[error("Variant {variant} references unknown attribute type {attribute_type}")]
    UnknownAttributeType {
        variant: String,
        attribute_type: String,
    },

    /// Catalog JSON could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Resolver configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// Config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for CatalogError {
    fn from(e: toml::de::Error) -> Self {
        CatalogError::Config(e.to_string())
    }
}
