//! Newtype IDs for catalog identifiers.
//!
//! Keeps a variant ID from being passed where an attribute type ID is
//! expected. Attribute value codes are plain strings since they are only
//! unique within their attribute type.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Declares string-backed catalog IDs, each with its own doc comment.
macro_rules! catalog_ids {
    ($($(#[doc = $doc:literal])* $name:ident;)+) => {$(
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        // Lets `HashMap<$name, _>` be queried with a `&str`.
        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    )+};
}

catalog_ids! {
    /// Identifies a product in the catalog.
    ProductId;
    /// Identifies a purchasable variant.
    VariantId;
    /// Identifies an attribute type (a facet such as Size).
    AttributeTypeId;
}
