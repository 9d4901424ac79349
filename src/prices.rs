//! Prices

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{checkout::CheckoutError, items::Sku};

/// Unit prices keyed by item, in the smallest currency unit.
#[derive(Debug, Clone, Default)]
pub struct PriceList {
    prices: FxHashMap<Sku, i64>,
}

impl PriceList {
    /// Creates an empty price list
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges the given prices into the list, overriding existing entries.
    ///
    /// Every entry is validated before any is applied, so a failed call
    /// leaves the list unchanged. Later duplicates in `prices` win.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidPrice`] for the first negative price.
    pub fn set_all<I, K>(&mut self, prices: I) -> Result<(), CheckoutError>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<Sku>,
    {
        let staged = prices
            .into_iter()
            .map(|(sku, price)| {
                let sku = sku.into();

                if price < 0 {
                    Err(CheckoutError::InvalidPrice { sku, price })
                } else {
                    Ok((sku, price))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(entries = staged.len(), "merging prices");

        self.prices.extend(staged);

        Ok(())
    }

    /// Returns the unit price for an item, if one is set
    pub fn get(&self, sku: &str) -> Option<i64> {
        self.prices.get(sku).copied()
    }

    /// Whether a price is set for the item
    pub fn contains(&self, sku: &str) -> bool {
        self.prices.contains_key(sku)
    }

    /// Number of priced items
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether no prices are set
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Iterate over `(item, unit price)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&Sku, i64)> {
        self.prices.iter().map(|(sku, price)| (sku, *price))
    }
}
