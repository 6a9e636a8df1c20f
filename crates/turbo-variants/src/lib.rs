//! Product variant resolution for TurboCommerce storefronts.
//!
//! Given a product's attribute types and its concrete variants, this crate
//! answers the two questions a product page asks on every picker change:
//!
//! - **Chain**: which attribute values are still selectable, given the
//!   values the current variant fixes for earlier attribute types
//! - **Match**: which variant a (possibly partial) selection refers to,
//!   with a closest-match fallback or an exact-only mode
//!
//! Everything here is synchronous and read-only over a borrowed
//! [`Product`]; results borrow from it.
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_variants::prelude::*;
//!
//! let product = Product::from_json(&catalog_json)?;
//! let resolver = VariantResolver::try_new(&product, ResolverConfig::default())?;
//!
//! // Resolve the variant from URL params, then render its pickers.
//! let variant = resolver
//!     .resolve_params(&params)
//!     .or_else(|| resolver.default_variant());
//! if let Some(variant) = variant {
//!     for link in resolver.chain(variant).iter() {
//!         println!("{}: {:?}", link.attribute_type.title, link.codes());
//!     }
//!
//!     // User picks Size = S.
//!     let next = resolver.select(variant, "attr-size", "S");
//! }
//! ```

pub mod config;
pub mod error;
pub mod ids;

pub mod catalog;
pub mod resolve;
pub mod resolver;
pub mod selection;

#[cfg(test)]
mod testing;

pub use config::ResolverConfig;
pub use error::CatalogError;
pub use ids::*;
pub use resolver::{Selection, VariantResolver};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::ResolverConfig;
    pub use crate::error::CatalogError;
    pub use crate::ids::*;

    // Catalog
    pub use crate::catalog::{
        AttributeType, AttributeValue, Product, ProductAttribute, Variant, VariantAttribute,
    };

    // Selections
    pub use crate::selection::{AttributeSelection, SelectedAttributes, SelectionParams};

    // Resolution
    pub use crate::resolve::{
        build_attribute_chain, find_variant_by_attribute_params, find_variant_by_attributes,
        AttributeChain, ChainLink, MatchMode, MatchPolicy,
    };
    pub use crate::resolver::{Selection, VariantResolver};
}
