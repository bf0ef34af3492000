//! Threshold validation errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when a threshold set is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThresholdError {
    /// A threshold must be strictly positive.
    #[error("Threshold {name} must be greater than zero, got {value}")]
    NotPositive {
        /// Threshold name.
        name: &'static str,
        /// Offending value.
        value: Decimal,
    },

    /// The at-risk threshold must sit below the critical alert threshold.
    #[error("At-risk threshold {at_risk}% must be below critical alert threshold {critical}%")]
    AtRiskNotBelowCritical {
        /// At-risk threshold.
        at_risk: Decimal,
        /// Critical alert threshold.
        critical: Decimal,
    },

    /// The at-risk threshold must sit below the over-limit threshold.
    #[error("At-risk threshold {at_risk}% must be below over-limit threshold {over_limit}%")]
    AtRiskNotBelowOverLimit {
        /// At-risk threshold.
        at_risk: Decimal,
        /// Over-limit threshold.
        over_limit: Decimal,
    },
}

impl From<ThresholdError> for finsight_shared::AppError {
    fn from(err: ThresholdError) -> Self {
        Self::Configuration(err.to_string())
    }
}
