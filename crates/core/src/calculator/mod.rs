//! Money arithmetic: stateless functions, the chained calculator, and allocation.

pub mod allocation;
pub mod arithmetic;
mod engine;
pub mod stateful;

#[cfg(test)]
mod props;

pub use allocation::{allocate_by_ratios, allocate_equal};
pub use stateful::{Calculation, MoneyCalculator};
