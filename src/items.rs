//! Items

use std::{borrow::Borrow, fmt};

use serde::Deserialize;

/// An item identifier (stock keeping unit).
///
/// Opaque to the checkout: two identifiers are the same item if and only if
/// their strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    /// Creates a new identifier
    pub fn new(sku: impl Into<String>) -> Self {
        Self(sku.into())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Sku {
    fn from(sku: &str) -> Self {
        Self(sku.to_string())
    }
}

impl From<String> for Sku {
    fn from(sku: String) -> Self {
        Self(sku)
    }
}

impl From<&Sku> for Sku {
    fn from(sku: &Sku) -> Self {
        sku.clone()
    }
}

impl Borrow<str> for Sku {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Sku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
