//! Property-based tests for alert classification and urgency.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::aggregator::AlertAggregator;
use super::classifier::AlertClassifier;
use super::types::AlertLevel;
use crate::threshold::UsageThresholds;
use crate::usage::{BudgetPeriod, BudgetStatus, BudgetUsage, StatusClassifier};

/// Strategy for percentages from 0.00 to 500.00.
fn percentage() -> impl Strategy<Value = Decimal> {
    (0i64..50_000).prop_map(|v| Decimal::new(v, 2))
}

fn usage_at(percentage: Decimal) -> BudgetUsage {
    let thresholds = UsageThresholds::default();
    BudgetUsage {
        category_name: "Groceries".to_string(),
        category_color: None,
        period: BudgetPeriod::new(2024, 6),
        budget_amount: Decimal::ONE_HUNDRED,
        actual_spent: percentage,
        usage_percentage: Some(percentage),
        remaining_amount: Decimal::ONE_HUNDRED - percentage,
        status: StatusClassifier::classify(Some(percentage), &thresholds),
        status_message: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// An alert exists exactly when the status is not on track.
    #[test]
    fn prop_alert_iff_not_on_track(p in percentage()) {
        let thresholds = UsageThresholds::default();
        let usage = usage_at(p);
        let alert = AlertClassifier::classify(&usage, &thresholds);
        prop_assert_eq!(alert.is_some(), usage.status != BudgetStatus::OnTrack);
    }

    /// Over-limit usage always produces a critical alert.
    #[test]
    fn prop_over_limit_is_critical(p in percentage()) {
        let thresholds = UsageThresholds::default();
        let usage = usage_at(p);
        if usage.status == BudgetStatus::OverLimit {
            let alert = AlertClassifier::classify(&usage, &thresholds);
            prop_assert_eq!(alert.map(|a| a.level), Some(AlertLevel::Critical));
        }
    }

    /// Urgency and critical escalation agree for every derived alert.
    #[test]
    fn prop_urgent_iff_critical(p in percentage()) {
        let thresholds = UsageThresholds::default();
        if let Some(alert) = AlertClassifier::classify(&usage_at(p), &thresholds) {
            prop_assert_eq!(
                AlertAggregator::is_urgent(&alert, &thresholds),
                alert.level == AlertLevel::Critical
            );
        }
    }

    /// Grouping never loses or duplicates an alert.
    #[test]
    fn prop_grouping_is_a_partition(ps in prop::collection::vec(percentage(), 0..20)) {
        let thresholds = UsageThresholds::default();
        let usages: Vec<_> = ps.into_iter().map(usage_at).collect();
        let alerts = AlertClassifier::classify_all(&usages, &thresholds);
        let groups = AlertAggregator::group_by_severity(&alerts);

        prop_assert_eq!(groups.critical.len() + groups.warning.len(), alerts.len());
        prop_assert!(groups.critical.iter().all(|a| a.level == AlertLevel::Critical));
        prop_assert!(groups.warning.iter().all(|a| a.level == AlertLevel::Warning));
    }
}
