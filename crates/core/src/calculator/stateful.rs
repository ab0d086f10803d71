//! Chained calculations under one fixed rounding rule.
//!
//! A [`MoneyCalculator`] only carries the rounding rule. [`MoneyCalculator::init`]
//! seeds a [`Calculation`], operators update it in place, and
//! [`Calculation::result`] consumes it. There is no un-seeded calculation, so
//! operators cannot run before `init`:
//!
//! ```compile_fail
//! use tally_core::calculator::MoneyCalculator;
//! use tally_shared::types::currencies::USD;
//!
//! let calculator = MoneyCalculator::default();
//! calculator.add(&USD.from_minor_units(100));
//! ```
//!
//! and a result cannot be taken twice:
//!
//! ```compile_fail
//! use tally_core::calculator::MoneyCalculator;
//! use tally_shared::types::currencies::USD;
//!
//! let calculation = MoneyCalculator::default().init(&USD.from_minor_units(100));
//! let first = calculation.result();
//! let second = calculation.result();
//! ```
//!
//! A `Calculation` is an owned value; confine each one to a single
//! computation.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use tally_shared::{Currency, Money, MoneyConfig, MoneyResult, RoundingMode};

use super::engine::{self, Rounding};

/// Factory for calculations that all share one rounding rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoneyCalculator {
    rounding: RoundingMode,
}

impl MoneyCalculator {
    /// Creates a calculator using `rounding` for every operation.
    #[must_use]
    pub const fn new(rounding: RoundingMode) -> Self {
        Self { rounding }
    }

    /// Creates a calculator using the configured default rounding rule.
    #[must_use]
    pub const fn from_config(config: &MoneyConfig) -> Self {
        Self::new(config.default_rounding)
    }

    /// The rounding rule applied by this calculator.
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Starts a calculation from `seed`, quantized under this calculator's rule.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tally_core::calculator::MoneyCalculator;
    /// use tally_shared::RoundingMode;
    /// use tally_shared::types::currencies::{CNY, USD};
    ///
    /// let calculator = MoneyCalculator::new(RoundingMode::HalfUp);
    /// let mut calculation = calculator.init(&USD.from_minor_units(101));
    /// calculation
    ///     .add(&USD.from_minor_units(99))?
    ///     .fx_by_multiply(dec!(6.4567), &CNY)?;
    /// assert_eq!(calculation.result().to_string(), "CNY 12.91");
    /// # Ok::<(), tally_shared::MoneyError>(())
    /// ```
    pub fn init(&self, seed: &Money) -> Calculation {
        let current = engine::quantize(seed, self.policy());
        tracing::debug!(seed = %current, rounding = ?self.rounding, "calculation seeded");
        Calculation {
            rounding: self.rounding,
            current,
        }
    }

    const fn policy(self) -> Rounding {
        Rounding::Fixed(self.rounding)
    }
}

/// A seeded, in-progress calculation.
///
/// Every operator either replaces the current value or, on error, leaves it
/// exactly as it was.
#[derive(Debug)]
#[must_use = "a calculation is only useful once its result is taken"]
pub struct Calculation {
    rounding: RoundingMode,
    current: Money,
}

impl Calculation {
    const fn policy(&self) -> Rounding {
        Rounding::Fixed(self.rounding)
    }

    fn apply(&mut self, next: MoneyResult<Money>) -> MoneyResult<&mut Self> {
        self.current = next?;
        Ok(self)
    }

    /// Adds `money`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` when `money` is in another currency.
    pub fn add(&mut self, money: &Money) -> MoneyResult<&mut Self> {
        let next = engine::add(&self.current, money, self.policy());
        self.apply(next)
    }

    /// Subtracts `money`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` when `money` is in another currency.
    pub fn subtract(&mut self, money: &Money) -> MoneyResult<&mut Self> {
        let next = engine::subtract(&self.current, money, self.policy());
        self.apply(next)
    }

    /// Multiplies by `rate`.
    pub fn multiply(&mut self, rate: Decimal) -> MoneyResult<&mut Self> {
        let next = engine::multiply(&self.current, rate, self.policy());
        self.apply(next)
    }

    /// Divides by `rate`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `rate` is zero.
    pub fn divide(&mut self, rate: Decimal) -> MoneyResult<&mut Self> {
        let next = engine::divide(&self.current, rate, self.policy());
        self.apply(next)
    }

    /// Converts into `target` as `current * rate`.
    ///
    /// The rate is ignored when `target` is already the current currency.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `rate` is zero and a conversion is needed.
    pub fn fx_by_multiply(&mut self, rate: Decimal, target: &Currency) -> MoneyResult<&mut Self> {
        let next = engine::fx_by_multiply(&self.current, rate, target, self.policy());
        self.apply(next)
    }

    /// Converts into `target` as `current / rate`.
    ///
    /// The rate is ignored when `target` is already the current currency.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `rate` is zero and a conversion is needed.
    pub fn fx_by_divide(&mut self, rate: Decimal, target: &Currency) -> MoneyResult<&mut Self> {
        let next = engine::fx_by_divide(&self.current, rate, target, self.policy());
        self.apply(next)
    }

    /// Compares the current value with `money`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` when `money` is in another currency.
    pub fn compare(&self, money: &Money) -> MoneyResult<Ordering> {
        engine::compare(&self.current, money, self.policy())
    }

    /// The current value, already quantized.
    pub const fn current(&self) -> &Money {
        &self.current
    }

    /// Ends the calculation and returns its value.
    #[must_use]
    pub fn result(self) -> Money {
        self.current
    }
}
