//! Discounts
//!
//! Bundle discounts: every `bundle_size` units of an item are charged
//! `bundle_price` instead of `bundle_size` times the unit price.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::debug;

use crate::{checkout::CheckoutError, items::Sku, prices::PriceList};

/// A bundle pricing rule for a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BundleDiscount {
    bundle_size: i64,
    bundle_price: i64,
}

impl BundleDiscount {
    /// Creates a new bundle discount. Use [`BundleDiscount::validate`] to check
    /// it against an item's unit price.
    pub fn new(bundle_size: i64, bundle_price: i64) -> Self {
        Self {
            bundle_size,
            bundle_price,
        }
    }

    /// Number of units making up a bundle
    pub fn bundle_size(&self) -> i64 {
        self.bundle_size
    }

    /// Price charged for a complete bundle
    pub fn bundle_price(&self) -> i64 {
        self.bundle_price
    }

    /// Checks the rule against the unit price of `sku`.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::InvalidBundleSize`]: `bundle_size` is not positive.
    /// - [`CheckoutError::InvalidDiscountPrice`]: `bundle_price` is negative, or
    ///   not cheaper than buying `bundle_size` units at `unit_price`.
    pub fn validate(&self, sku: &Sku, unit_price: i64) -> Result<(), CheckoutError> {
        if self.bundle_size <= 0 {
            return Err(CheckoutError::InvalidBundleSize {
                sku: sku.clone(),
                bundle_size: self.bundle_size,
            });
        }

        // An overflowing regular price is larger than any bundle price.
        let regular_price = unit_price.checked_mul(self.bundle_size);

        let too_expensive = regular_price.is_some_and(|regular| self.bundle_price >= regular);

        if self.bundle_price < 0 || too_expensive {
            return Err(CheckoutError::InvalidDiscountPrice {
                sku: sku.clone(),
                bundle_price: self.bundle_price,
                regular_price: regular_price.unwrap_or(i64::MAX),
            });
        }

        Ok(())
    }
}

/// Bundle discounts keyed by item.
#[derive(Debug, Clone, Default)]
pub struct DiscountList {
    discounts: FxHashMap<Sku, BundleDiscount>,
}

impl DiscountList {
    /// Creates an empty discount list
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges the given discounts into the list, overriding existing entries.
    ///
    /// Each discount is validated against `prices` before any is applied, so a
    /// failed call leaves the list unchanged.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::UnknownItem`]: the item has no price in `prices`.
    /// - [`CheckoutError::InvalidBundleSize`] / [`CheckoutError::InvalidDiscountPrice`]:
    ///   see [`BundleDiscount::validate`].
    pub fn set_all<I, K>(&mut self, discounts: I, prices: &PriceList) -> Result<(), CheckoutError>
    where
        I: IntoIterator<Item = (K, BundleDiscount)>,
        K: Into<Sku>,
    {
        let staged = discounts
            .into_iter()
            .map(|(sku, discount)| {
                let sku = sku.into();

                let Some(unit_price) = prices.get(sku.as_str()) else {
                    return Err(CheckoutError::UnknownItem(sku));
                };

                discount.validate(&sku, unit_price)?;

                Ok((sku, discount))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(entries = staged.len(), "merging discounts");

        self.discounts.extend(staged);

        Ok(())
    }

    /// Returns the discount for an item, if one is set
    pub fn get(&self, sku: &str) -> Option<&BundleDiscount> {
        self.discounts.get(sku)
    }

    /// Number of discounted items
    pub fn len(&self) -> usize {
        self.discounts.len()
    }

    /// Whether no discounts are set
    pub fn is_empty(&self) -> bool {
        self.discounts.is_empty()
    }

    /// Iterate over `(item, discount)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&Sku, &BundleDiscount)> {
        self.discounts.iter()
    }
}
