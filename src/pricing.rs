//! Pricing

use crate::{
    checkout::CheckoutError,
    discounts::{BundleDiscount, DiscountList},
    items::Sku,
    ledger::ScanLedger,
    prices::PriceList,
};

/// Calculates the price of `count` units of a single item.
///
/// With a discount, every complete bundle is charged at the bundle price and
/// the remaining units at the unit price. Returns `None` if the result does not
/// fit in an `i64`, or if the discount's bundle size is not positive (rules
/// accepted by [`DiscountList::set_all`] never are).
pub fn price_for(unit_price: i64, discount: Option<&BundleDiscount>, count: u64) -> Option<i64> {
    let count = i64::try_from(count).ok()?;

    let Some(discount) = discount else {
        return unit_price.checked_mul(count);
    };

    if discount.bundle_size() <= 0 {
        return None;
    }

    let bundles = count.checked_div(discount.bundle_size())?;
    let remainder = count.checked_rem(discount.bundle_size())?;

    discount
        .bundle_price()
        .checked_mul(bundles)?
        .checked_add(unit_price.checked_mul(remainder)?)
}

/// Calculates the total price of everything in the ledger, applying discounts.
///
/// # Errors
///
/// - [`CheckoutError::UnknownItem`]: a scanned item has no price.
/// - [`CheckoutError::PriceOverflow`]: a line or the total does not fit in an `i64`.
pub fn total_price(
    ledger: &ScanLedger,
    prices: &PriceList,
    discounts: &DiscountList,
) -> Result<i64, CheckoutError> {
    sum_lines(ledger, prices, |sku| discounts.get(sku.as_str()))
}

/// Calculates the total price of everything in the ledger at unit prices.
///
/// # Errors
///
/// See [`total_price`].
pub fn subtotal(ledger: &ScanLedger, prices: &PriceList) -> Result<i64, CheckoutError> {
    sum_lines(ledger, prices, |_sku| None)
}

fn sum_lines<'d>(
    ledger: &ScanLedger,
    prices: &PriceList,
    discount_for: impl Fn(&Sku) -> Option<&'d BundleDiscount>,
) -> Result<i64, CheckoutError> {
    ledger.iter().try_fold(0_i64, |total, (sku, count)| {
        let unit_price = prices
            .get(sku.as_str())
            .ok_or_else(|| CheckoutError::UnknownItem(sku.clone()))?;

        price_for(unit_price, discount_for(sku), count)
            .and_then(|line| total.checked_add(line))
            .ok_or_else(|| CheckoutError::PriceOverflow(sku.clone()))
    })
}
