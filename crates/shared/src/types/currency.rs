//! Currency descriptor: code, symbol, scale and default rounding rule.
//!
//! Identity is the code alone. Two `Currency` values with the same code but
//! a different symbol or scale compare equal; the registry side treats such
//! differences as updates of one currency, not as separate currencies.

use std::borrow::Cow;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currencies;
use super::money::Money;
use super::rounding::RoundingMode;
use crate::error::{MoneyError, MoneyResult};

/// Largest scale the underlying decimal type can carry.
pub const MAX_SCALE: u32 = 28;

/// Immutable monetary unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CurrencyDef")]
pub struct Currency {
    code: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    symbol: Option<Cow<'static, str>>,
    scale: u32,
    rounding: RoundingMode,
}

/// Unvalidated wire form, checked by [`Currency::new`].
#[derive(Deserialize)]
struct CurrencyDef {
    code: String,
    #[serde(default)]
    symbol: Option<String>,
    scale: u32,
    #[serde(default)]
    rounding: Option<RoundingMode>,
}

impl TryFrom<CurrencyDef> for Currency {
    type Error = MoneyError;

    fn try_from(def: CurrencyDef) -> Result<Self, Self::Error> {
        Self::new(&def.code, def.symbol.as_deref(), def.scale, def.rounding)
    }
}

impl Currency {
    /// Creates a currency.
    ///
    /// The code is trimmed and upper-cased. `rounding` falls back to
    /// [`RoundingMode::HalfEven`].
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidArgument`] if the code is empty or the
    /// scale exceeds [`MAX_SCALE`].
    pub fn new(
        code: &str,
        symbol: Option<&str>,
        scale: u32,
        rounding: Option<RoundingMode>,
    ) -> MoneyResult<Self> {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return Err(MoneyError::invalid("currency code can't be empty"));
        }
        if scale > MAX_SCALE {
            return Err(MoneyError::invalid(format!(
                "scale {scale} exceeds the maximum of {MAX_SCALE}"
            )));
        }

        Ok(Self {
            code: Cow::Owned(code),
            symbol: symbol.map(|s| Cow::Owned(s.to_owned())),
            scale,
            rounding: rounding.unwrap_or_default(),
        })
    }

    /// Built-in table entry. Inputs are trusted.
    pub(crate) const fn builtin(code: &'static str, symbol: &'static str, scale: u32) -> Self {
        Self {
            code: Cow::Borrowed(code),
            symbol: Some(Cow::Borrowed(symbol)),
            scale,
            rounding: RoundingMode::HalfEven,
        }
    }

    /// Returns a copy of this currency with another default rounding rule.
    #[must_use]
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Upper-case alpha code, e.g. `USD`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display symbol, e.g. `US$`.
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Digits after the decimal separator.
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Rounding rule used when none is supplied explicitly.
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Builds money from an amount in basic units (e.g. dollars).
    ///
    /// The float is read through its shortest round-trip decimal text, so
    /// `1.455` becomes the decimal `1.455` rather than its binary
    /// approximation, then quantized with this currency's rounding rule.
    ///
    /// ```
    /// use tally_shared::types::currencies::CNY;
    ///
    /// assert_eq!(CNY.from_basic_units(1.455).unwrap().to_string(), "CNY 1.46");
    /// assert_eq!(CNY.from_basic_units(1.445).unwrap().to_string(), "CNY 1.44");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidArgument`] for NaN, infinities, or values
    /// outside the decimal range.
    pub fn from_basic_units(&self, value: f64) -> MoneyResult<Money> {
        if !value.is_finite() {
            return Err(MoneyError::invalid(
                "basic unit value can't be infinite or NaN",
            ));
        }
        let mut amount = Decimal::from_str(&value.to_string()).map_err(|_| {
            MoneyError::invalid(format!("basic unit value {value} is out of range"))
        })?;
        if amount.is_zero() {
            amount.set_sign_positive(true);
        }

        Ok(Money::new(
            self.rounding.quantize(amount, self.scale),
            self.clone(),
        ))
    }

    /// Builds money from an amount in minor units (e.g. cents).
    ///
    /// Exact: dividing by a power of ten never needs rounding.
    pub fn from_minor_units(&self, value: i64) -> Money {
        Money::new(Decimal::new(value, self.scale), self.clone())
    }

    /// Builds money from an exact decimal without rounding it.
    ///
    /// The amount is quantized later, when it enters a calculation.
    pub fn from_decimal(&self, amount: Decimal) -> Money {
        Money::new(amount, self.clone())
    }

    /// Zero in this currency.
    pub fn zero(&self) -> Money {
        self.from_minor_units(0)
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    /// Resolves a built-in currency by code, ignoring case and whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.is_empty() {
            return Err(MoneyError::invalid("currency code can't be empty"));
        }
        currencies::find(code)
            .cloned()
            .ok_or_else(|| MoneyError::UnknownCurrency(code.to_uppercase()))
    }
}
