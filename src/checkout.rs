//! Checkout

use thiserror::Error;
use tracing::trace;

use crate::{
    discounts::{BundleDiscount, DiscountList},
    items::Sku,
    ledger::ScanLedger,
    prices::PriceList,
    pricing,
};

/// Errors returned by checkout configuration, scanning and totals.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// A unit price was negative.
    #[error("item {sku} price cannot be negative: {price}")]
    InvalidPrice {
        /// Item the price was set for
        sku: Sku,
        /// Rejected price
        price: i64,
    },

    /// The item has no unit price configured.
    #[error("item {0} not recognised by shop")]
    UnknownItem(Sku),

    /// A discount bundle size was zero or negative.
    #[error("item {sku} discount bundle size must be positive, got {bundle_size}")]
    InvalidBundleSize {
        /// Item the discount was set for
        sku: Sku,
        /// Rejected bundle size
        bundle_size: i64,
    },

    /// A discount bundle price was negative or not cheaper than the regular price.
    #[error("item {sku} discount price must satisfy 0 <= {bundle_price} < {regular_price}")]
    InvalidDiscountPrice {
        /// Item the discount was set for
        sku: Sku,
        /// Rejected bundle price
        bundle_price: i64,
        /// Price of a bundle at the unit price
        regular_price: i64,
    },

    /// A line price or the running total does not fit in an `i64`.
    #[error("price of item {0} overflows the total")]
    PriceOverflow(Sku),
}

/// The operations of a checkout.
///
/// Configuration calls merge into the existing configuration: colliding items
/// are overridden, everything else is kept. A failed configuration call
/// applies nothing.
pub trait Checkout {
    /// Merges unit prices into the price configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidPrice`] if any price is negative.
    fn set_prices<I, K>(&mut self, prices: I) -> Result<(), CheckoutError>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<Sku>;

    /// Merges bundle discounts into the discount configuration.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::UnknownItem`]: the item has no price.
    /// - [`CheckoutError::InvalidBundleSize`]: the bundle size is not positive.
    /// - [`CheckoutError::InvalidDiscountPrice`]: the bundle price is negative or
    ///   not below the regular price of a bundle.
    fn set_discounts<I, K>(&mut self, discounts: I) -> Result<(), CheckoutError>
    where
        I: IntoIterator<Item = (K, BundleDiscount)>,
        K: Into<Sku>;

    /// Scans one unit of an item.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::UnknownItem`] if the item has no price. Nothing
    /// is recorded in that case.
    fn scan(&mut self, sku: &str) -> Result<(), CheckoutError>;

    /// Total price of everything scanned, using the current configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::PriceOverflow`] if the total does not fit in an `i64`.
    fn total_price(&self) -> Result<i64, CheckoutError>;
}

/// An in-memory checkout for a single session.
#[derive(Debug, Clone, Default)]
pub struct Till {
    prices: PriceList,
    discounts: DiscountList,
    ledger: ScanLedger,
}

impl Till {
    /// Creates an empty till with no prices, discounts or scans.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a till with the given prices.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidPrice`] if any price is negative.
    pub fn with_prices<I, K>(prices: I) -> Result<Self, CheckoutError>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<Sku>,
    {
        let mut till = Self::new();
        till.set_prices(prices)?;

        Ok(till)
    }

    /// Scans each item in turn.
    ///
    /// # Errors
    ///
    /// Stops at the first unknown item and returns [`CheckoutError::UnknownItem`].
    /// Items scanned before it stay recorded.
    pub fn scan_all<'s>(
        &mut self,
        skus: impl IntoIterator<Item = &'s str>,
    ) -> Result<(), CheckoutError> {
        skus.into_iter().try_for_each(|sku| self.scan(sku))
    }

    /// Total price of everything scanned at unit prices, ignoring discounts.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::PriceOverflow`] if the total does not fit in an `i64`.
    pub fn subtotal(&self) -> Result<i64, CheckoutError> {
        pricing::subtotal(&self.ledger, &self.prices)
    }

    /// Amount saved by discounts, `subtotal - total`, never below zero.
    ///
    /// Discounts are not re-checked when prices change, so after a price drop a
    /// bundle can cost more than its units at the new price. Such a bundle
    /// saves nothing rather than counting as a negative saving.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::PriceOverflow`] if either total does not fit in an `i64`.
    pub fn savings(&self) -> Result<i64, CheckoutError> {
        let subtotal = self.subtotal()?;
        let total = self.total_price()?;

        // Both totals are non-negative, so the difference always fits.
        Ok(subtotal.checked_sub(total).map_or(0, |saved| saved.max(0)))
    }

    /// Number of units of `sku` scanned so far.
    pub fn count(&self, sku: &str) -> u64 {
        self.ledger.count(sku)
    }

    /// Unit price configured for `sku`.
    pub fn unit_price(&self, sku: &str) -> Option<i64> {
        self.prices.get(sku)
    }

    /// Discount configured for `sku`.
    pub fn discount(&self, sku: &str) -> Option<&BundleDiscount> {
        self.discounts.get(sku)
    }

    /// The configured prices.
    pub fn prices(&self) -> &PriceList {
        &self.prices
    }

    /// The configured discounts.
    pub fn discounts(&self) -> &DiscountList {
        &self.discounts
    }

    /// The scans recorded so far.
    pub fn ledger(&self) -> &ScanLedger {
        &self.ledger
    }
}

impl Checkout for Till {
    fn set_prices<I, K>(&mut self, prices: I) -> Result<(), CheckoutError>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<Sku>,
    {
        self.prices.set_all(prices)
    }

    fn set_discounts<I, K>(&mut self, discounts: I) -> Result<(), CheckoutError>
    where
        I: IntoIterator<Item = (K, BundleDiscount)>,
        K: Into<Sku>,
    {
        self.discounts.set_all(discounts, &self.prices)
    }

    fn scan(&mut self, sku: &str) -> Result<(), CheckoutError> {
        if !self.prices.contains(sku) {
            return Err(CheckoutError::UnknownItem(Sku::from(sku)));
        }

        let count = self.ledger.record(sku);

        trace!(sku, count, "scanned item");

        Ok(())
    }

    fn total_price(&self) -> Result<i64, CheckoutError> {
        pricing::total_price(&self.ledger, &self.prices, &self.discounts)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn standard_till() -> Result<Till, CheckoutError> {
        Till::with_prices([("A", 50), ("B", 30), ("C", 20), ("D", 15)])
    }

    #[test]
    fn scanning_one_item_returns_its_price() -> TestResult {
        for price in [0, 1, 50, 9_999] {
            let mut till = Till::with_prices([("A", price)])?;

            till.scan("A")?;

            assert_eq!(till.total_price()?, price, "single scan of price {price}");
        }

        Ok(())
    }

    #[test]
    fn empty_till_totals_zero() -> TestResult {
        let till = Till::new();

        assert_eq!(till.total_price()?, 0);
        assert_eq!(till.subtotal()?, 0);
        assert_eq!(till.savings()?, 0);

        Ok(())
    }

    #[test]
    fn negative_price_is_rejected_without_corrupting_others() -> TestResult {
        let mut till = standard_till()?;

        let result = till.set_prices([("A", 10), ("E", -50)]);

        assert!(matches!(
            result,
            Err(CheckoutError::InvalidPrice { ref sku, price: -50 }) if sku.as_str() == "E"
        ));
        assert_eq!(till.unit_price("A"), Some(50));
        assert_eq!(till.unit_price("E"), None);

        Ok(())
    }

    #[test]
    fn scanning_unknown_item_does_not_touch_ledger() -> TestResult {
        let mut till = standard_till()?;
        till.scan("A")?;

        let result = till.scan("Z");

        assert!(matches!(result, Err(CheckoutError::UnknownItem(ref sku)) if sku.as_str() == "Z"));
        assert_eq!(till.count("Z"), 0);
        assert_eq!(till.ledger().len(), 1);
        assert_eq!(till.total_price()?, 50);

        Ok(())
    }

    #[test]
    fn bundle_discount_applies_to_complete_bundles() -> TestResult {
        let mut till = Till::with_prices([("A", 50)])?;
        till.set_discounts([("A", BundleDiscount::new(3, 130))])?;

        let expected = [(1, 50), (2, 100), (3, 130), (4, 180), (5, 230), (6, 260)];

        for (count, total) in expected {
            till.scan("A")?;

            assert_eq!(till.count("A"), count);
            assert_eq!(till.total_price()?, total, "{count} scans of A");
        }

        assert_eq!(till.subtotal()?, 300);
        assert_eq!(till.savings()?, 40);

        Ok(())
    }

    #[test]
    fn discount_not_cheaper_than_regular_is_rejected() -> TestResult {
        let mut till = Till::with_prices([("A", 50)])?;

        let result = till.set_discounts([("A", BundleDiscount::new(2, 200))]);

        assert!(matches!(
            result,
            Err(CheckoutError::InvalidDiscountPrice {
                bundle_price: 200,
                regular_price: 100,
                ..
            })
        ));
        assert!(till.discount("A").is_none());

        Ok(())
    }

    #[test]
    fn discount_on_unpriced_item_is_rejected() {
        let mut till = Till::new();

        let result = till.set_discounts([("A", BundleDiscount::new(2, 20))]);

        assert!(matches!(result, Err(CheckoutError::UnknownItem(_))));
    }

    #[test]
    fn repricing_after_scans_changes_total() -> TestResult {
        let mut till = standard_till()?;
        till.scan_all(["A", "B"])?;

        assert_eq!(till.total_price()?, 80);

        till.set_prices([("A", 40)])?;

        assert_eq!(till.total_price()?, 70);

        Ok(())
    }

    #[test]
    fn adding_discount_after_scans_changes_total() -> TestResult {
        let mut till = standard_till()?;
        till.scan_all(["B", "B", "B"])?;

        till.set_discounts([("B", BundleDiscount::new(2, 45))])?;

        assert_eq!(till.total_price()?, 45 + 30);

        Ok(())
    }

    #[test]
    fn repricing_below_bundle_keeps_savings_at_zero() -> TestResult {
        let mut till = Till::with_prices([("A", 50)])?;
        till.set_discounts([("A", BundleDiscount::new(2, 90))])?;
        till.scan_all(["A", "A"])?;

        assert_eq!(till.savings()?, 10);

        till.set_prices([("A", 10)])?;

        assert_eq!(till.discount("A"), Some(&BundleDiscount::new(2, 90)));
        assert_eq!(till.total_price()?, 90);
        assert_eq!(till.subtotal()?, 20);
        assert_eq!(till.savings()?, 0);

        Ok(())
    }

    #[test]
    fn configuration_views_reflect_merges() -> TestResult {
        let mut till = standard_till()?;
        till.set_discounts([("A", BundleDiscount::new(3, 130))])?;
        till.set_prices([("E", 5)])?;

        assert_eq!(till.prices().len(), 5);
        assert_eq!(till.prices().get("E"), Some(5));
        assert_eq!(till.discounts().len(), 1);
        assert_eq!(
            till.discounts().get("A").map(BundleDiscount::bundle_price),
            Some(130)
        );

        Ok(())
    }

    #[test]
    fn scan_all_stops_at_unknown_item() -> TestResult {
        let mut till = standard_till()?;

        let result = till.scan_all(["A", "Z", "B"]);

        assert!(matches!(result, Err(CheckoutError::UnknownItem(_))));
        assert_eq!(till.count("A"), 1);
        assert_eq!(till.count("B"), 0);

        Ok(())
    }

    #[test]
    fn error_messages_name_the_item() {
        let err = CheckoutError::UnknownItem(Sku::from("Z"));

        assert_eq!(err.to_string(), "item Z not recognised by shop");
    }
}
