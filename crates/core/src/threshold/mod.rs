//! Usage thresholds shared by the status and alert classifiers.

pub mod error;
pub mod types;

pub use error::ThresholdError;
pub use types::{
    DEFAULT_AT_RISK_PERCENT, DEFAULT_CRITICAL_ALERT_PERCENT, DEFAULT_OVER_LIMIT_PERCENT,
    UsageThresholds,
};
