//! Rounding rules used to quantize amounts to a currency's scale.
//!
//! Default is `HalfEven` (banker's rounding): ties go to the even
//! neighbour, so repeated rounding over many entries does not drift.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Tie-breaking and direction rule applied when quantizing an amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Toward zero (truncate).
    Down,
    /// Toward positive infinity.
    Ceiling,
    /// Toward negative infinity.
    Floor,
    /// Nearest neighbour, ties away from zero.
    HalfUp,
    /// Nearest neighbour, ties toward zero.
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour (banker's rounding).
    #[default]
    HalfEven,
}

impl RoundingMode {
    /// Returns the matching `rust_decimal` strategy.
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::Up => RoundingStrategy::AwayFromZero,
            Self::Down => RoundingStrategy::ToZero,
            Self::Ceiling => RoundingStrategy::ToPositiveInfinity,
            Self::Floor => RoundingStrategy::ToNegativeInfinity,
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfDown => RoundingStrategy::MidpointTowardZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }

    /// Rounds `value` to exactly `scale` decimal places.
    ///
    /// The result always carries `scale` fractional digits, so `1` quantized
    /// to scale 2 renders as `1.00`.
    #[must_use]
    pub fn quantize(self, value: Decimal, scale: u32) -> Decimal {
        let mut quantized = value.round_dp_with_strategy(scale, self.strategy());
        quantized.rescale(scale);
        quantized
    }
}
