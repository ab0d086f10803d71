//! Splitting money using the Largest Remainder Method.
//!
//! The total is quantized with its currency's rounding rule, then split in
//! whole minor units so the parts always add back up to the total exactly
//! (no cents lost or created).
//!
//! The Largest Remainder Method works by:
//! 1. Calculate exact shares in minor units
//! 2. Round each share toward zero
//! 3. Hand the leftover units to the shares with the largest fractional parts

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use tally_shared::{Currency, Money, MoneyError, MoneyResult};

/// Quantized total as (minor units, scale).
fn total_minor_units(money: &Money) -> MoneyResult<(i128, u32)> {
    let currency = money.currency();
    let scale = currency.scale();
    let quantized = money.quantize(currency.rounding());
    if quantized.amount().scale() != scale {
        return Err(MoneyError::overflow(format!(
            "{money} can't be split in minor units"
        )));
    }
    Ok((quantized.amount().mantissa(), scale))
}

fn from_minor_units(minor: i128, scale: u32, currency: &Currency) -> MoneyResult<Money> {
    let amount = Decimal::try_from_i128_with_scale(minor, scale)
        .map_err(|_| MoneyError::overflow(format!("{minor} minor units")))?;
    Ok(Money::new(amount, currency.clone()))
}

/// Splits `money` into `count` parts that differ by at most one minor unit.
///
/// Earlier parts receive the leftover units.
///
/// # Example
///
/// ```
/// use tally_core::calculator::allocation;
/// use tally_shared::types::currencies::USD;
///
/// // 100.00 / 3 = [33.34, 33.33, 33.33]
/// let parts = allocation::allocate_equal(&USD.from_minor_units(10000), 3).unwrap();
/// let shown: Vec<String> = parts.iter().map(ToString::to_string).collect();
/// assert_eq!(shown, ["USD 33.34", "USD 33.33", "USD 33.33"]);
/// ```
///
/// # Errors
///
/// Returns `InvalidArgument` when `count` is zero.
pub fn allocate_equal(money: &Money, count: usize) -> MoneyResult<Vec<Money>> {
    if count == 0 {
        return Err(MoneyError::invalid("allocation count can't be zero"));
    }
    let (total, scale) = total_minor_units(money)?;
    let count_i = i128::try_from(count)
        .map_err(|_| MoneyError::invalid(format!("allocation count {count} is too large")))?;

    let base = total / count_i;
    // Same sign as the total
    let remainder = total % count_i;
    let step = remainder.signum();
    let extra = remainder.unsigned_abs();

    (0..count)
        .map(|i| {
            let bonus = if (i as u128) < extra { step } else { 0 };
            from_minor_units(base + bonus, scale, money.currency())
        })
        .collect()
}

/// Splits `money` proportionally to `ratios`.
///
/// Ratios need not sum to any particular value (`[1, 1, 2]` and
/// `[25, 25, 50]` split the same way). Ties in fractional parts go to the
/// earlier part.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::calculator::allocation;
/// use tally_shared::types::currencies::USD;
///
/// let parts =
///     allocation::allocate_by_ratios(&USD.from_minor_units(10000), &[dec!(50), dec!(30), dec!(20)])
///         .unwrap();
/// assert_eq!(parts[0].to_string(), "USD 50.00");
/// assert_eq!(parts[1].to_string(), "USD 30.00");
/// assert_eq!(parts[2].to_string(), "USD 20.00");
/// ```
///
/// # Errors
///
/// Returns `InvalidArgument` for empty ratios, a negative ratio, or ratios
/// summing to zero.
pub fn allocate_by_ratios(money: &Money, ratios: &[Decimal]) -> MoneyResult<Vec<Money>> {
    if ratios.is_empty() {
        return Err(MoneyError::invalid("ratios can't be empty"));
    }
    if ratios.iter().any(Decimal::is_sign_negative) {
        return Err(MoneyError::invalid("ratios can't be negative"));
    }
    let ratio_sum = ratios
        .iter()
        .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(*r))
        .ok_or_else(|| MoneyError::overflow("sum of ratios"))?;
    if ratio_sum.is_zero() {
        return Err(MoneyError::invalid("ratios can't sum to zero"));
    }

    let (total, scale) = total_minor_units(money)?;
    let sign = total.signum();
    let magnitude = Decimal::try_from_i128_with_scale(total.abs(), 0)
        .map_err(|_| MoneyError::overflow(format!("{money}")))?;

    let mut floors = Vec::with_capacity(ratios.len());
    let mut fractions = Vec::with_capacity(ratios.len());
    for ratio in ratios {
        let share = magnitude
            .checked_mul(*ratio)
            .and_then(|v| v.checked_div(ratio_sum))
            .ok_or_else(|| MoneyError::overflow(format!("share of {money}")))?;
        let floor = share.trunc();
        floors.push(
            floor
                .to_i128()
                .ok_or_else(|| MoneyError::overflow(format!("share of {money}")))?,
        );
        fractions.push(share - floor);
    }

    let leftover = total.abs() - floors.iter().sum::<i128>();
    distribute_leftover(&mut floors, &fractions, ratios, leftover);

    floors
        .into_iter()
        .map(|units| from_minor_units(units * sign, scale, money.currency()))
        .collect()
}

/// Moves `leftover` units into `floors`, one unit per part in turn.
///
/// Usually positive; negative only if a share was rounded up past an integer.
/// Credits go to the largest fractions first, debits to the smallest. Parts
/// with a zero ratio are never touched.
fn distribute_leftover(
    floors: &mut [i128],
    fractions: &[Decimal],
    ratios: &[Decimal],
    leftover: i128,
) {
    let mut order: Vec<usize> = (0..ratios.len()).filter(|&i| !ratios[i].is_zero()).collect();
    if leftover >= 0 {
        order.sort_by(|&a, &b| fractions[b].cmp(&fractions[a]));
    } else {
        order.sort_by(|&a, &b| fractions[a].cmp(&fractions[b]));
    }
    let step = leftover.signum();
    let units = usize::try_from(leftover.unsigned_abs()).unwrap_or(0);
    for &index in order.iter().cycle().take(units) {
        floors[index] += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tally_shared::types::currencies::{JPY, USD};

    fn sum(parts: &[Money]) -> Decimal {
        parts.iter().map(Money::amount).sum()
    }

    #[test]
    fn test_allocate_equal_remainder_goes_first() {
        let parts = allocate_equal(&USD.from_minor_units(10001), 4).unwrap();
        let minor: Vec<i64> = parts.iter().map(|p| p.minor_unit_value().unwrap()).collect();
        assert_eq!(minor, vec![2501, 2500, 2500, 2500]);
    }

    #[test]
    fn test_allocate_equal_negative() {
        let parts = allocate_equal(&USD.from_minor_units(-100), 3).unwrap();
        let minor: Vec<i64> = parts.iter().map(|p| p.minor_unit_value().unwrap()).collect();
        assert_eq!(minor, vec![-34, -33, -33]);
        assert_eq!(sum(&parts), dec!(-1.00));
    }

    #[test]
    fn test_allocate_equal_quantizes_total() {
        // 10.005 -> 10.00 under USD's half-even rule
        let parts = allocate_equal(&USD.from_decimal(dec!(10.005)), 2).unwrap();
        assert_eq!(sum(&parts), dec!(10.00));
        assert!(parts.iter().all(Money::is_rounded));
    }

    #[test]
    fn test_allocate_equal_zero_count() {
        assert!(matches!(
            allocate_equal(&USD.from_minor_units(100), 0),
            Err(MoneyError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_allocate_by_ratios_largest_remainder() {
        // 100 JPY by 1:1:1 -> 33.33.. each, one leftover yen to the first
        let parts =
            allocate_by_ratios(&JPY.from_minor_units(100), &[dec!(1), dec!(1), dec!(1)]).unwrap();
        let minor: Vec<i64> = parts.iter().map(|p| p.minor_unit_value().unwrap()).collect();
        assert_eq!(minor, vec![34, 33, 33]);
    }

    #[test]
    fn test_allocate_by_ratios_prefers_largest_fraction() {
        // 10.00 by 1:2 -> 333.33 / 666.66 minor units, leftover goes to the .66
        let parts = allocate_by_ratios(&USD.from_minor_units(1000), &[dec!(1), dec!(2)]).unwrap();
        let minor: Vec<i64> = parts.iter().map(|p| p.minor_unit_value().unwrap()).collect();
        assert_eq!(minor, vec![333, 667]);
    }

    #[test]
    fn test_allocate_by_ratios_negative_total() {
        let parts =
            allocate_by_ratios(&USD.from_minor_units(-1000), &[dec!(1), dec!(2)]).unwrap();
        let minor: Vec<i64> = parts.iter().map(|p| p.minor_unit_value().unwrap()).collect();
        assert_eq!(minor, vec![-333, -667]);
    }

    #[test]
    fn test_allocate_by_ratios_zero_ratio_part() {
        let parts = allocate_by_ratios(&USD.from_minor_units(500), &[dec!(0), dec!(1)]).unwrap();
        assert!(parts[0].is_zero());
        assert_eq!(parts[1], USD.from_minor_units(500));
    }

    #[test]
    fn test_negative_leftover_skips_zero_ratio_parts() {
        let mut floors = [0, 34, 33];
        let fractions = [dec!(0), dec!(0), dec!(0.5)];
        let ratios = [dec!(0), dec!(1), dec!(1)];
        distribute_leftover(&mut floors, &fractions, &ratios, -1);
        assert_eq!(floors, [0, 33, 33]);
    }

    #[test]
    fn test_positive_leftover_skips_zero_ratio_parts() {
        let mut floors = [0, 33, 33];
        let fractions = [dec!(0.9), dec!(0.5), dec!(0.5)];
        let ratios = [dec!(0), dec!(1), dec!(1)];
        distribute_leftover(&mut floors, &fractions, &ratios, 1);
        assert_eq!(floors, [0, 34, 33]);
    }

    #[test]
    fn test_allocate_by_ratios_invalid() {
        let m = USD.from_minor_units(100);
        assert!(allocate_by_ratios(&m, &[]).is_err());
        assert!(allocate_by_ratios(&m, &[dec!(1), dec!(-1)]).is_err());
        assert!(allocate_by_ratios(&m, &[dec!(0), dec!(0)]).is_err());
    }
}
