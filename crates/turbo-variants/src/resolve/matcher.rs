//! Variant lookup from a selection.
//!
//! The structured and flat matchers score partial matches differently and
//! are kept as two separate functions:
//!
//! - [`find_variant_by_attributes`] scores a variant by how long a leading
//!   run of selections it satisfies ([`MatchPolicy::PriorityPrefix`]). A
//!   variant satisfying only the first selection beats one satisfying every
//!   selection except the first.
//! - [`find_variant_by_attribute_params`] scores by the total number of
//!   params satisfied ([`MatchPolicy::MatchCount`]).
//!
//! Both return the first variant that satisfies the whole selection, keep
//! the earliest variant on ties, and never return a variant the product
//! does not own.

use crate::catalog::{Product, Variant};
use crate::selection::{AttributeSelection, SelectionParams};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// What to return when no variant satisfies the whole selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Fall back to the best partial match.
    #[default]
    Closest,
    /// Return nothing.
    Exact,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Closest => "closest",
            MatchMode::Exact => "exact",
        }
    }

    pub fn is_exact(&self) -> bool {
        *self == MatchMode::Exact
    }
}

/// Scoring strategy used to rank partial matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchPolicy {
    /// Length of the leading run of satisfied selections.
    PriorityPrefix,
    /// Number of satisfied params, in any order.
    MatchCount,
}

impl MatchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPolicy::PriorityPrefix => "priority_prefix",
            MatchPolicy::MatchCount => "match_count",
        }
    }
}

/// Find the variant for a structured selection.
///
/// `selections` is in priority order. Type IDs and value codes are compared;
/// names are ignored. An empty selection never counts as a full match, so
/// it yields the first variant in [`MatchMode::Closest`] and `None` in
/// [`MatchMode::Exact`].
pub fn find_variant_by_attributes<'a>(
    product: &'a Product,
    selections: &[AttributeSelection],
    mode: MatchMode,
) -> Option<&'a Variant> {
    let mut closest = product.variants.first()?;
    let mut closest_score = 0;

    for variant in &product.variants {
        let score = selections
            .iter()
            .take_while(|s| variant.has_attribute(&s.type_id, &s.value_code))
            .count();

        if !selections.is_empty() && score == selections.len() {
            trace!(
                product = %product.id,
                variant = %variant.id,
                policy = MatchPolicy::PriorityPrefix.as_str(),
                "Full attribute match"
            );
            return Some(variant);
        }

        if score > closest_score {
            closest = variant;
            closest_score = score;
        }
    }

    fall_back(product, closest, closest_score, MatchPolicy::PriorityPrefix, mode)
}

/// Find the variant for flat name -> code params.
///
/// Attribute types are matched by name. A variant satisfying every param
/// is returned immediately; empty params are satisfied by the first
/// variant regardless of `mode`.
pub fn find_variant_by_attribute_params<'a>(
    product: &'a Product,
    params: &SelectionParams,
    mode: MatchMode,
) -> Option<&'a Variant> {
    let mut closest = product.variants.first()?;
    let mut closest_score = 0;

    for variant in &product.variants {
        let score = params
            .iter()
            .filter(|(name, code)| variant.has_attribute_named(name, code))
            .count();

        if score >= params.len() {
            trace!(
                product = %product.id,
                variant = %variant.id,
                policy = MatchPolicy::MatchCount.as_str(),
                "Full param match"
            );
            return Some(variant);
        }

        if score > closest_score {
            closest = variant;
            closest_score = score;
        }
    }

    fall_back(product, closest, closest_score, MatchPolicy::MatchCount, mode)
}

fn fall_back<'a>(
    product: &Product,
    closest: &'a Variant,
    score: usize,
    policy: MatchPolicy,
    mode: MatchMode,
) -> Option<&'a Variant> {
    match mode {
        MatchMode::Exact => {
            debug!(
                product = %product.id,
                policy = policy.as_str(),
                "No exact variant match"
            );
            None
        }
        MatchMode::Closest => {
            debug!(
                product = %product.id,
                variant = %closest.id,
                score,
                policy = policy.as_str(),
                "Falling back to closest variant"
            );
            Some(closest)
        }
    }
}
