//! Fixtures
//!
//! Checkout configuration loaded from YAML:
//!
//! ```yaml
//! prices:
//!   A: 50
//!   B: 30
//! discounts:
//!   A: { bundle_size: 3, bundle_price: 130 }
//! ```

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    checkout::{Checkout, CheckoutError, Till},
    discounts::BundleDiscount,
    items::Sku,
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Prices or discounts were rejected by the checkout
    #[error("Invalid checkout configuration: {0}")]
    Checkout(#[from] CheckoutError),
}

/// Prices and discounts for a checkout.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fixture {
    /// Unit prices keyed by item
    pub prices: FxHashMap<Sku, i64>,

    /// Bundle discounts keyed by item
    #[serde(default)]
    pub discounts: FxHashMap<Sku, BundleDiscount>,
}

impl Fixture {
    /// Load a fixture from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        debug!(path = %path.display(), "loading fixture");

        Self::from_yaml(&contents)
    }

    /// Parse a fixture from a YAML string
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Build a till configured with the fixture's prices, then its discounts.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Checkout`] if a price or discount is invalid.
    pub fn till(&self) -> Result<Till, FixtureError> {
        let mut till = Till::with_prices(self.prices.iter().map(|(sku, price)| (sku, *price)))?;

        till.set_discounts(
            self.discounts
                .iter()
                .map(|(sku, discount)| (sku, *discount)),
        )?;

        Ok(till)
    }
}
