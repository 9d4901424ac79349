//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    checkout::{Checkout, CheckoutError, Till},
    discounts::{BundleDiscount, DiscountList},
    fixtures::{Fixture, FixtureError},
    items::Sku,
    ledger::ScanLedger,
    prices::PriceList,
    pricing::{price_for, subtotal, total_price},
};
