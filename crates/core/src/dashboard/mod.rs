//! Dashboard budget performance.
//!
//! Rolls a month of budget usages up into totals, status counts and the
//! handful of exceeded-budget alerts shown on the overview card.

pub mod performance;
pub mod types;

pub use types::{BudgetPerformance, URGENT_ALERT_LIMIT};
