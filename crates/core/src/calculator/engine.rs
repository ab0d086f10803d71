//! Quantize-then-combine arithmetic shared by the stateless functions and
//! the calculator.
//!
//! CRITICAL: Rounding discipline:
//! - Every operand is quantized to its currency's scale BEFORE it is combined;
//!   the right-hand side of add/subtract takes the left-hand currency's scale
//! - add/subtract of quantized operands is exact and is never re-rounded
//! - multiply/divide/fx results are re-quantized to the result currency's scale

use std::cmp::Ordering;

use rust_decimal::Decimal;
use tally_shared::{Currency, Money, MoneyError, MoneyResult, RoundingMode};

/// Where the rounding rule comes from.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Rounding {
    /// Each currency's own default rule.
    PerCurrency,
    /// One rule for everything.
    Fixed(RoundingMode),
}

impl Rounding {
    fn mode_for(self, currency: &Currency) -> RoundingMode {
        match self {
            Self::PerCurrency => currency.rounding(),
            Self::Fixed(mode) => mode,
        }
    }
}

pub(crate) fn quantize(money: &Money, rounding: Rounding) -> Money {
    money.quantize(rounding.mode_for(money.currency()))
}

/// Quantizes `money` to the scale of `currency`, which shares its code.
///
/// Same-code currencies may be registered with different scales; the
/// result of add/subtract carries the left-hand currency's scale, and a
/// same-currency fx carries the target's.
fn quantize_into(money: &Money, currency: &Currency, rounding: Rounding) -> Money {
    Money::new(money.amount(), currency.clone()).quantize(rounding.mode_for(currency))
}

fn ensure_same_currency(m1: &Money, m2: &Money) -> MoneyResult<()> {
    if m1.currency() == m2.currency() {
        Ok(())
    } else {
        Err(MoneyError::CurrencyMismatch {
            expected: m1.currency().code().to_owned(),
            got: m2.currency().code().to_owned(),
        })
    }
}

fn ensure_non_zero(rate: Decimal) -> MoneyResult<()> {
    if rate.is_zero() {
        Err(MoneyError::invalid("rate can't be zero"))
    } else {
        Ok(())
    }
}

/// Re-quantizes a raw product or quotient into `currency`.
fn settle(value: Decimal, currency: &Currency, rounding: Rounding) -> Money {
    let mode = rounding.mode_for(currency);
    Money::new(mode.quantize(value, currency.scale()), currency.clone())
}

pub(crate) fn add(m1: &Money, m2: &Money, rounding: Rounding) -> MoneyResult<Money> {
    ensure_same_currency(m1, m2)?;
    let a = quantize(m1, rounding);
    let b = quantize_into(m2, a.currency(), rounding);
    let sum = a
        .amount()
        .checked_add(b.amount())
        .ok_or_else(|| MoneyError::overflow(format!("{a} + {b}")))?;
    Ok(Money::new(sum, a.currency().clone()))
}

pub(crate) fn subtract(m1: &Money, m2: &Money, rounding: Rounding) -> MoneyResult<Money> {
    ensure_same_currency(m1, m2)?;
    let a = quantize(m1, rounding);
    let b = quantize_into(m2, a.currency(), rounding);
    let difference = a
        .amount()
        .checked_sub(b.amount())
        .ok_or_else(|| MoneyError::overflow(format!("{a} - {b}")))?;
    Ok(Money::new(difference, a.currency().clone()))
}

pub(crate) fn multiply(money: &Money, rate: Decimal, rounding: Rounding) -> MoneyResult<Money> {
    let a = quantize(money, rounding);
    let product = a
        .amount()
        .checked_mul(rate)
        .ok_or_else(|| MoneyError::overflow(format!("{a} * {rate}")))?;
    Ok(settle(product, a.currency(), rounding))
}

pub(crate) fn divide(money: &Money, rate: Decimal, rounding: Rounding) -> MoneyResult<Money> {
    ensure_non_zero(rate)?;
    let a = quantize(money, rounding);
    let quotient = a
        .amount()
        .checked_div(rate)
        .ok_or_else(|| MoneyError::overflow(format!("{a} / {rate}")))?;
    Ok(settle(quotient, a.currency(), rounding))
}

pub(crate) fn fx_by_multiply(
    money: &Money,
    rate: Decimal,
    target: &Currency,
    rounding: Rounding,
) -> MoneyResult<Money> {
    if money.currency() == target {
        tracing::debug!(currency = %target, %rate, "fx target equals source, rate ignored");
        return Ok(quantize_into(money, target, rounding));
    }
    ensure_non_zero(rate)?;
    let a = quantize(money, rounding);
    let converted = a
        .amount()
        .checked_mul(rate)
        .ok_or_else(|| MoneyError::overflow(format!("{a} * {rate}")))?;
    let result = settle(converted, target, rounding);
    tracing::debug!(source = %a, %rate, target = %result, "fx by multiply");
    Ok(result)
}

pub(crate) fn fx_by_divide(
    money: &Money,
    rate: Decimal,
    target: &Currency,
    rounding: Rounding,
) -> MoneyResult<Money> {
    if money.currency() == target {
        tracing::debug!(currency = %target, %rate, "fx target equals source, rate ignored");
        return Ok(quantize_into(money, target, rounding));
    }
    ensure_non_zero(rate)?;
    let a = quantize(money, rounding);
    let converted = a
        .amount()
        .checked_div(rate)
        .ok_or_else(|| MoneyError::overflow(format!("{a} / {rate}")))?;
    let result = settle(converted, target, rounding);
    tracing::debug!(source = %a, %rate, target = %result, "fx by divide");
    Ok(result)
}

/// Orders two amounts by their quantized (minor unit) values.
pub(crate) fn compare(m1: &Money, m2: &Money, rounding: Rounding) -> MoneyResult<Ordering> {
    ensure_same_currency(m1, m2)?;
    let a = quantize(m1, rounding);
    let b = quantize(m2, rounding);
    Ok(a.amount().cmp(&b.amount()))
}
