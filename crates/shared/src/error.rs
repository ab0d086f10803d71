//! Money error types.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by currency construction and money arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// An argument failed validation (empty code, zero rate, NaN input, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Two amounts of different currencies were combined or compared.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch {
        /// Currency of the left-hand operand.
        expected: String,
        /// Currency of the right-hand operand.
        got: String,
    },

    /// The result cannot be represented.
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// No built-in currency is registered under this code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

impl MoneyError {
    /// Shorthand for [`MoneyError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Shorthand for [`MoneyError::Overflow`].
    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::Overflow(msg.into())
    }

    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::Overflow(_) => "OVERFLOW",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
        }
    }
}
