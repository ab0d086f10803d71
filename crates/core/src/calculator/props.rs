//! Property-based tests for money arithmetic.
//!
//! - Minor unit round trip
//! - Additive exactness
//! - Currency mismatch rejection
//! - FX same-currency short-circuit
//! - Calculator agrees with the stateless functions
//! - Allocation sum invariant

use std::cmp::Ordering;

use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::types::currencies::{CNY, JPY, USD};
use tally_shared::{Currency, MoneyError, RoundingMode};

use super::allocation::{allocate_by_ratios, allocate_equal};
use super::arithmetic;
use super::stateful::MoneyCalculator;

/// Strategy to generate minor unit amounts (-10,000,000.00 to 10,000,000.00).
fn minor_units() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

/// Strategy to generate positive rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate any rate including zero and negatives.
fn any_rate() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to pick a currency scale.
fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(USD),
        Just(JPY),
        (0u32..=6).prop_map(|scale| Currency::new("XTS", None, scale, None).unwrap()),
    ]
}

/// Strategy to pick a rounding rule.
fn rounding_mode() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::Up),
        Just(RoundingMode::Down),
        Just(RoundingMode::Ceiling),
        Just(RoundingMode::Floor),
        Just(RoundingMode::HalfUp),
        Just(RoundingMode::HalfDown),
        Just(RoundingMode::HalfEven),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* currency and integer n, from_minor_units(n) round-trips.
    #[test]
    fn prop_minor_unit_round_trip(currency in currency(), n in any::<i64>()) {
        let money = currency.from_minor_units(n);
        prop_assert_eq!(money.minor_unit_value().unwrap(), n);
        prop_assert!(money.is_rounded());
    }

    /// *For any* quantized operands, add/subtract are exact in minor units.
    #[test]
    fn prop_add_subtract_exact(a in minor_units(), b in minor_units()) {
        let m1 = USD.from_minor_units(a);
        let m2 = USD.from_minor_units(b);

        let sum = arithmetic::add(&m1, &m2).unwrap();
        prop_assert_eq!(sum.minor_unit_value().unwrap(), a + b);

        let difference = arithmetic::subtract(&m1, &m2).unwrap();
        prop_assert_eq!(difference.minor_unit_value().unwrap(), a - b);
    }

    /// *For any* amounts, mixing currencies is always rejected.
    #[test]
    fn prop_currency_mismatch_rejected(a in minor_units(), b in minor_units()) {
        let usd = USD.from_minor_units(a);
        let cny = CNY.from_minor_units(b);
        let is_mismatch = |err: MoneyError| matches!(err, MoneyError::CurrencyMismatch { .. });

        prop_assert!(is_mismatch(arithmetic::add(&usd, &cny).unwrap_err()));
        prop_assert!(is_mismatch(arithmetic::subtract(&usd, &cny).unwrap_err()));
        prop_assert!(is_mismatch(arithmetic::compare(&usd, &cny).unwrap_err()));
    }

    /// *For any* rate, converting into the current currency changes nothing.
    #[test]
    fn prop_fx_same_currency_short_circuit(a in minor_units(), rate in any_rate()) {
        let money = CNY.from_minor_units(a);
        prop_assert_eq!(&arithmetic::fx_by_multiply(&money, rate, &CNY).unwrap(), &money);
        prop_assert_eq!(&arithmetic::fx_by_divide(&money, rate, &CNY).unwrap(), &money);

        let mut calculation = MoneyCalculator::default().init(&money);
        calculation.fx_by_multiply(rate, &CNY).unwrap();
        calculation.fx_by_divide(rate, &CNY).unwrap();
        prop_assert_eq!(calculation.result(), money);
    }

    /// *For any* conversion, the result carries the target scale.
    #[test]
    fn prop_fx_result_at_target_scale(a in minor_units(), rate in positive_rate()) {
        let converted = arithmetic::fx_by_multiply(&USD.from_minor_units(a), rate, &JPY).unwrap();
        prop_assert!(converted.is_rounded());
        prop_assert_eq!(converted.amount().scale(), 0);
    }

    /// *For any* amounts, compare agrees with minor unit ordering.
    #[test]
    fn prop_compare_matches_minor_units(a in minor_units(), b in minor_units()) {
        let ordering = arithmetic::compare(&CNY.from_minor_units(a), &CNY.from_minor_units(b)).unwrap();
        prop_assert_eq!(ordering, a.cmp(&b));
        if a == b {
            prop_assert_eq!(ordering, Ordering::Equal);
        }
    }

    /// *For any* rounding rule, the calculator matches the stateless functions
    /// run on a currency with that default rule.
    #[test]
    fn prop_calculator_matches_stateless(
        mode in rounding_mode(),
        a in minor_units(),
        b in minor_units(),
        rate in positive_rate(),
    ) {
        let usd = USD.with_rounding(mode);
        let m1 = usd.from_minor_units(a);
        let m2 = usd.from_minor_units(b);

        let expected = arithmetic::add(&m1, &m2)
            .and_then(|m| arithmetic::multiply(&m, rate))
            .and_then(|m| arithmetic::divide(&m, rate))
            .unwrap();

        let mut calculation = MoneyCalculator::new(mode).init(&m1);
        calculation
            .add(&m2)
            .unwrap()
            .multiply(rate)
            .unwrap()
            .divide(rate)
            .unwrap();
        prop_assert_eq!(calculation.result(), expected);
    }

    /// *For any* total and count, equal allocation sums to the total.
    #[test]
    fn prop_allocate_equal_sum_invariant(a in minor_units(), count in 1usize..50) {
        let money = USD.from_minor_units(a);
        let parts = allocate_equal(&money, count).unwrap();
        prop_assert_eq!(parts.len(), count);
        let sum: i64 = parts.iter().map(|p| p.minor_unit_value().unwrap()).sum();
        prop_assert_eq!(sum, a);
    }

    /// *For any* total and ratios, ratio allocation sums to the total.
    #[test]
    fn prop_allocate_by_ratios_sum_invariant(
        a in minor_units(),
        ratios in prop::collection::vec(1u32..1000, 1..10),
    ) {
        let money = USD.from_minor_units(a);
        let ratios: Vec<Decimal> = ratios.into_iter().map(Decimal::from).collect();
        let parts = allocate_by_ratios(&money, &ratios).unwrap();
        prop_assert_eq!(parts.len(), ratios.len());
        let sum: i64 = parts.iter().map(|p| p.minor_unit_value().unwrap()).sum();
        prop_assert_eq!(sum, a);
    }
}
