//! Till
//!
//! Till is a checkout pricing calculator: it records scanned items, looks up
//! their unit prices, applies bundle discounts and computes the running total.
//!
//! ```
//! use till::prelude::*;
//!
//! # fn main() -> Result<(), CheckoutError> {
//! let mut till = Till::with_prices([("A", 50), ("B", 30)])?;
//! till.set_discounts([("A", BundleDiscount::new(3, 130))])?;
//!
//! till.scan_all(["A", "B", "A", "A", "A"])?;
//!
//! assert_eq!(till.total_price()?, 130 + 50 + 30);
//! # Ok(())
//! # }
//! ```

pub mod checkout;
pub mod discounts;
pub mod fixtures;
pub mod items;
pub mod ledger;
pub mod prelude;
pub mod prices;
pub mod pricing;
