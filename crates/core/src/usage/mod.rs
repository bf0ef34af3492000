//! Budget usage calculation and status classification.

pub mod boundary;
pub mod calculator;
pub mod error;
pub mod status;
pub mod types;

#[cfg(test)]
mod props;

pub use boundary::{RawBudgetRecord, finite_decimal};
pub use calculator::UsageCalculator;
pub use error::UsageError;
pub use status::StatusClassifier;
pub use types::{BudgetPeriod, BudgetRecord, BudgetStatus, BudgetUsage};
