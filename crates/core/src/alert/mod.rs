//! Budget alert classification and aggregation.
//!
//! Alerts are derived from [`crate::usage::BudgetUsage`] on every call and
//! never cached. Escalation to critical and selection for notification both
//! go through [`reaches_critical`].

pub mod aggregator;
pub mod classifier;
pub mod types;

#[cfg(test)]
mod props;

pub use aggregator::AlertAggregator;
pub use classifier::{AlertClassifier, reaches_critical};
pub use types::{
    Alert, AlertLevel, AlertMessageKey, AlertSummary, ClassifiedUsage, SeverityGroups, UsageSource,
};
