//! Converts money between currencies using a rate table.
//!
//! A missing rate is not an error: the conversion yields `None` and the caller
//! decides how to present the absence.
use crate::core::currency::{CurrencyCode, CurrencyRateProvider, Money};
use crate::core::rates::RateTable;
use rust_decimal::Decimal;
use tracing::debug;

/// Converts `money` into `target` using the built-in rate table.
///
/// The result is rounded to a whole amount, ties going to the even neighbour.
pub fn convert(money: &Money, target: &CurrencyCode) -> Option<Decimal> {
    convert_with(RateTable::default_table(), money, target)
}

/// Rate applied when converting `source` into `target`. Same-currency
/// conversions always use a rate of one.
pub fn lookup_rate(
    rates: &(impl CurrencyRateProvider + ?Sized),
    source: &CurrencyCode,
    target: &CurrencyCode,
) -> Option<Decimal> {
    if source == target {
        debug!("No currency conversion needed ({source} -> {target})");
        return Some(Decimal::ONE);
    }
    let rate = rates.get_rate(source, target);
    if rate.is_none() {
        debug!("No rate known for {source} -> {target}");
    }
    rate
}

/// Same as [`convert`] but reads rates from `rates`.
///
/// A product too large for `Decimal` yields `None` as well.
pub fn convert_with(
    rates: &(impl CurrencyRateProvider + ?Sized),
    money: &Money,
    target: &CurrencyCode,
) -> Option<Decimal> {
    let rate = lookup_rate(rates, &money.currency, target)?;
    match money.amount.checked_mul(rate) {
        Some(product) => {
            let converted = product.round();
            debug!("Converted {money} to {target} at rate {rate}: {converted}");
            Some(converted)
        }
        None => {
            debug!("Conversion of {money} to {target} at rate {rate} overflowed");
            None
        }
    }
}
