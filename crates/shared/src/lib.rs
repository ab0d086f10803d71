//! Shared types, errors, and configuration for Tally.
//!
//! This crate provides the value types every other crate builds on:
//! - Currency descriptors and the built-in currency table
//! - Money with exact decimal amounts
//! - Rounding rules
//! - Money error types
//! - Configuration of the default rounding rule

pub mod config;
pub mod error;
pub mod types;

pub use config::MoneyConfig;
pub use error::{MoneyError, MoneyResult};
pub use types::{Currency, Money, RoundingMode};
