//! Usage boundary error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when an upstream payload is rejected at the engine boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// Amount is NaN or infinite.
    #[error("Amount {field} is not a finite number")]
    NonFiniteAmount {
        /// Payload field name.
        field: &'static str,
    },

    /// Amount is finite but too large to represent.
    #[error("Amount {field} is out of range")]
    OutOfRange {
        /// Payload field name.
        field: &'static str,
    },

    /// Amount is negative.
    #[error("Amount {field} cannot be negative, got {value}")]
    NegativeAmount {
        /// Payload field name.
        field: &'static str,
        /// Offending value.
        value: Decimal,
    },

    /// Month outside 1-12.
    #[error("Invalid budget period {month}/{year}")]
    InvalidPeriod {
        /// Year.
        year: i32,
        /// Month.
        month: u32,
    },
}

impl From<UsageError> for finsight_shared::AppError {
    fn from(err: UsageError) -> Self {
        Self::Validation(err.to_string())
    }
}
