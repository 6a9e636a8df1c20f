//! Variant resolution.
//!
//! Pure functions over a borrowed [`Product`](crate::catalog::Product):
//! derive the selectable attribute chain for a variant, or resolve a
//! selection back to a variant.

mod chain;
mod matcher;

pub use chain::{build_attribute_chain, AttributeChain, ChainLink};
pub use matcher::{
    find_variant_by_attribute_params, find_variant_by_attributes, MatchMode, MatchPolicy,
};
