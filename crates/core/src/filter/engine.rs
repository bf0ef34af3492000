//! Usage filtering.

use super::types::ResolvedUsageFilter;
use crate::usage::BudgetUsage;

/// Applies resolved filters to usage lists.
pub struct UsageFilterEngine;

impl UsageFilterEngine {
    /// Returns the usages matching `filter`, in input order.
    #[must_use]
    pub fn apply(usages: &[BudgetUsage], filter: &ResolvedUsageFilter) -> Vec<BudgetUsage> {
        usages
            .iter()
            .filter(|usage| filter.matches(usage))
            .cloned()
            .collect()
    }
}
