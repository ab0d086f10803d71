//! Money value types.

pub mod currencies;
pub mod currency;
pub mod money;
pub mod rounding;

pub use currency::{Currency, MAX_SCALE};
pub use money::Money;
pub use rounding::RoundingMode;
