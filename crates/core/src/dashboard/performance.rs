//! Aggregate budget performance.

use rust_decimal::Decimal;

use super::types::{BudgetPerformance, URGENT_ALERT_LIMIT};
use crate::alert::{AlertClassifier, AlertMessageKey};
use crate::threshold::UsageThresholds;
use crate::usage::{BudgetStatus, BudgetUsage, StatusClassifier, UsageCalculator};

impl BudgetPerformance {
    /// Aggregates a set of usages into dashboard totals.
    ///
    /// Statuses are re-derived from each usage percentage.
    #[must_use]
    pub fn from_usages(usages: &[BudgetUsage], thresholds: &UsageThresholds) -> Self {
        let mut total_budget = Decimal::ZERO;
        let mut total_spent = Decimal::ZERO;
        let (mut on_track, mut at_risk, mut over_limit) = (0, 0, 0);

        for usage in usages {
            total_budget = total_budget.saturating_add(usage.budget_amount);
            total_spent = total_spent.saturating_add(usage.actual_spent);

            match StatusClassifier::classify(usage.usage_percentage, thresholds) {
                BudgetStatus::OnTrack => on_track += 1,
                BudgetStatus::AtRisk => at_risk += 1,
                BudgetStatus::OverLimit => over_limit += 1,
            }
        }

        let urgent_alerts = AlertClassifier::classify_all(usages, thresholds)
            .into_iter()
            .filter(|alert| alert.message_key == AlertMessageKey::Exceeded)
            .take(URGENT_ALERT_LIMIT)
            .collect();

        Self {
            total_budget,
            total_spent,
            total_remaining: total_budget.saturating_sub(total_spent),
            overall_usage_percentage: UsageCalculator::usage_percentage(total_budget, total_spent),
            on_track,
            at_risk,
            over_limit,
            urgent_alerts,
        }
    }
}
