//! Resolver configuration.

use std::path::Path;

use crate::error::CatalogError;
use crate::resolve::MatchMode;
use serde::{Deserialize, Serialize};

/// Configuration for a [`VariantResolver`](crate::resolver::VariantResolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Mode used by `resolve` and `resolve_params` when none is given.
    pub match_mode: MatchMode,

    /// Whether `VariantResolver::try_new` validates the catalog first.
    pub validate_catalog: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Closest,
            validate_catalog: true,
        }
    }
}

impl ResolverConfig {
    /// Load config from a file; `.json` is parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| CatalogError::Config(e.to_string()))
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Parse config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the default match mode.
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Enable or disable catalog validation.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate_catalog = validate;
        self
    }
}
