//! Money arithmetic for Tally.
//!
//! This crate contains pure arithmetic with ZERO I/O dependencies.
//! Value types live in `tally-shared`; this crate decides where rounding
//! happens and rejects cross-currency operations.
//!
//! # Modules
//!
//! - `calculator` - Stateless arithmetic, the chained `MoneyCalculator`, and allocation

pub mod calculator;

pub use calculator::{Calculation, MoneyCalculator};
