//! Caller-facing resolver over a single product.

use crate::catalog::{Product, Variant};
use crate::config::ResolverConfig;
use crate::error::CatalogError;
use crate::ids::AttributeTypeId;
use crate::resolve::{
    build_attribute_chain, find_variant_by_attribute_params, find_variant_by_attributes,
    AttributeChain, MatchMode,
};
use crate::selection::{AttributeSelection, SelectedAttributes, SelectionParams};
use tracing::debug;

/// A resolved variant and the attribute chain to display for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    pub variant: &'a Variant,
    pub chain: AttributeChain<'a>,
}

/// Resolves selections against one product.
///
/// Holds no state besides the borrowed product and its config, so it is
/// cheap to build per request and safe to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct VariantResolver<'a> {
    product: &'a Product,
    config: ResolverConfig,
}

impl<'a> VariantResolver<'a> {
    /// Create a resolver with the default config, without validation.
    pub fn new(product: &'a Product) -> Self {
        Self {
            product,
            config: ResolverConfig::default(),
        }
    }

    /// Create a resolver with an explicit config, without validation.
    pub fn with_config(product: &'a Product, config: ResolverConfig) -> Self {
        Self { product, config }
    }

    /// Create a resolver, validating the catalog if the config asks for it.
    pub fn try_new(product: &'a Product, config: ResolverConfig) -> Result<Self, CatalogError> {
        if config.validate_catalog {
            product.validate()?;
        }
        Ok(Self::with_config(product, config))
    }

    pub fn product(&self) -> &'a Product {
        self.product
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The variant to show before the caller has selected anything.
    pub fn default_variant(&self) -> Option<&'a Variant> {
        self.product.variants.first()
    }

    /// Attribute pickers and their reachable values for `variant`.
    pub fn chain(&self, variant: &Variant) -> AttributeChain<'a> {
        build_attribute_chain(self.product, variant)
    }

    /// Resolve structured selections with the configured mode.
    pub fn resolve(&self, selections: &[AttributeSelection]) -> Option<&'a Variant> {
        self.resolve_with(selections, self.config.match_mode)
    }

    pub fn resolve_with(
        &self,
        selections: &[AttributeSelection],
        mode: MatchMode,
    ) -> Option<&'a Variant> {
        find_variant_by_attributes(self.product, selections, mode)
    }

    /// Resolve flat params with the configured mode.
    pub fn resolve_params(&self, params: &SelectionParams) -> Option<&'a Variant> {
        self.resolve_params_with(params, self.config.match_mode)
    }

    pub fn resolve_params_with(
        &self,
        params: &SelectionParams,
        mode: MatchMode,
    ) -> Option<&'a Variant> {
        find_variant_by_attribute_params(self.product, params, mode)
    }

    /// Change one attribute of `current` and resolve the resulting variant.
    ///
    /// The changed attribute takes top priority; the rest of `current`'s
    /// attributes follow in catalog order, so as many of them as possible
    /// are kept. Returns the new variant with its chain, or `None` if
    /// nothing resolves under the configured mode.
    pub fn select(
        &self,
        current: &Variant,
        type_id: impl Into<AttributeTypeId>,
        value_code: impl Into<String>,
    ) -> Option<Selection<'a>> {
        let type_id = type_id.into();
        let value_code = value_code.into();
        let selections = SelectedAttributes::from_variant(current, self.product)
            .prioritize(type_id.clone(), value_code.clone());

        let variant = self.resolve(selections.as_slice())?;
        debug!(
            product = %self.product.id,
            from = %current.id,
            to = %variant.id,
            attribute_type = %type_id,
            value = %value_code,
            "Selection changed"
        );

        Some(Selection {
            variant,
            chain: self.chain(variant),
        })
    }
}
