//! Stateless money arithmetic.
//!
//! Each function quantizes with the currency's own rounding rule: the operand
//! currency's rule before combining, the result currency's rule afterwards.
//! Nothing here holds state, so these are safe to call from any thread.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use tally_shared::{Currency, Money, MoneyResult};

use super::engine::{self, Rounding};

/// Adds two amounts of the same currency.
///
/// # Example
///
/// ```
/// use tally_core::calculator::arithmetic;
/// use tally_shared::types::currencies::CNY;
///
/// let sum = arithmetic::add(&CNY.from_minor_units(101), &CNY.from_minor_units(109)).unwrap();
/// assert_eq!(sum.to_string(), "CNY 2.10");
/// ```
///
/// # Errors
///
/// Returns `CurrencyMismatch` when the currencies differ.
pub fn add(m1: &Money, m2: &Money) -> MoneyResult<Money> {
    engine::add(m1, m2, Rounding::PerCurrency)
}

/// Subtracts `m2` from `m1`.
///
/// # Errors
///
/// Returns `CurrencyMismatch` when the currencies differ.
pub fn subtract(m1: &Money, m2: &Money) -> MoneyResult<Money> {
    engine::subtract(m1, m2, Rounding::PerCurrency)
}

/// Multiplies by a rate, quantizing the product.
pub fn multiply(money: &Money, rate: Decimal) -> MoneyResult<Money> {
    engine::multiply(money, rate, Rounding::PerCurrency)
}

/// Divides by a rate, quantizing the quotient.
///
/// # Errors
///
/// Returns `InvalidArgument` when `rate` is zero.
pub fn divide(money: &Money, rate: Decimal) -> MoneyResult<Money> {
    engine::divide(money, rate, Rounding::PerCurrency)
}

/// Converts into `target` as `money * rate`, quantized to the target scale.
///
/// Converting into the same currency ignores the rate, zero included, and
/// returns `money` quantized to the target's scale (an already-rounded
/// amount comes back as it was).
///
/// # Errors
///
/// Returns `InvalidArgument` when `rate` is zero and the currencies differ.
pub fn fx_by_multiply(money: &Money, rate: Decimal, target: &Currency) -> MoneyResult<Money> {
    engine::fx_by_multiply(money, rate, target, Rounding::PerCurrency)
}

/// Converts into `target` as `money / rate`, quantized to the target scale.
///
/// Same-currency short-circuit as [`fx_by_multiply`].
///
/// # Errors
///
/// Returns `InvalidArgument` when `rate` is zero and the currencies differ.
pub fn fx_by_divide(money: &Money, rate: Decimal, target: &Currency) -> MoneyResult<Money> {
    engine::fx_by_divide(money, rate, target, Rounding::PerCurrency)
}

/// Compares two amounts by their minor unit values.
///
/// # Errors
///
/// Returns `CurrencyMismatch` when the currencies differ.
pub fn compare(m1: &Money, m2: &Money) -> MoneyResult<Ordering> {
    engine::compare(m1, m2, Rounding::PerCurrency)
}
