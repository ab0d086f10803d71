//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for exact arithmetic; the only
//! float that ever crosses in is the input to `Currency::from_basic_units`.

use std::hash::{Hash, Hasher};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::rounding::RoundingMode;
use crate::error::{MoneyError, MoneyResult};

/// Represents a monetary amount with currency.
///
/// Immutable: arithmetic always produces a new value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "MoneyDef", from = "MoneyDef")]
pub struct Money {
    currency: Currency,
    amount: Decimal,
    /// Whether `amount` already carries exactly `currency.scale()` digits.
    rounded: bool,
}

#[derive(Serialize, Deserialize)]
struct MoneyDef {
    currency: Currency,
    amount: Decimal,
}

impl From<MoneyDef> for Money {
    fn from(def: MoneyDef) -> Self {
        Self::new(def.amount, def.currency)
    }
}

impl From<Money> for MoneyDef {
    fn from(money: Money) -> Self {
        Self {
            currency: money.currency,
            amount: money.amount,
        }
    }
}

impl Money {
    /// Creates a new Money instance holding `amount` exactly.
    #[must_use]
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        let rounded = amount.scale() == currency.scale();
        Self {
            currency,
            amount,
            rounded,
        }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        currency.zero()
    }

    /// The currency this amount is denominated in.
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// The exact amount in basic units.
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true if the amount is already quantized to the currency's scale.
    pub const fn is_rounded(&self) -> bool {
        self.rounded
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns this amount quantized to the currency's scale.
    ///
    /// Already-rounded values are returned as they are.
    #[must_use]
    pub fn quantize(&self, mode: RoundingMode) -> Self {
        if self.rounded {
            return self.clone();
        }
        Self::new(
            mode.quantize(self.amount, self.currency.scale()),
            self.currency.clone(),
        )
    }

    /// Amount in basic units as a float. For display only.
    pub fn basic_unit_value(&self) -> f64 {
        self.amount.to_f64().unwrap_or(f64::NAN)
    }

    /// Amount in basic units as exact decimal text, e.g. `1.00`.
    pub fn basic_unit_value_string(&self) -> String {
        self.amount.to_string()
    }

    /// Amount in minor units (`amount * 10^scale`), truncated toward zero.
    ///
    /// Only faithful for rounded values; digits beyond the scale are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] when the result does not fit in `i64`.
    pub fn minor_unit_value(&self) -> MoneyResult<i64> {
        let scale = self.currency.scale();
        let mut truncated = self.amount.round_dp_with_strategy(scale, RoundingStrategy::ToZero);
        truncated.rescale(scale);
        if truncated.scale() != scale {
            return Err(MoneyError::overflow(format!(
                "{self} can't be expressed in minor units"
            )));
        }
        i64::try_from(truncated.mantissa())
            .map_err(|_| MoneyError::overflow(format!("{self} exceeds the i64 minor unit range")))
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount && self.currency == other.currency
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.normalize().hash(state);
        self.currency.hash(state);
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency.code(), self.amount)
    }
}
