//! Property-based tests for usage calculation and status classification.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calculator::UsageCalculator;
use super::status::StatusClassifier;
use super::types::BudgetStatus;
use crate::threshold::UsageThresholds;

/// Strategy for amounts from 0.00 to 10,000,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for strictly positive amounts.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for percentages from 0.000 to 1000.000.
fn percentage() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000).prop_map(|v| Decimal::new(v, 3))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// With a budget set, the percentage is exactly spent / budget * 100.
    #[test]
    fn prop_usage_percentage_is_exact_ratio(
        budget in positive_amount(),
        spent in amount(),
    ) {
        let percentage = UsageCalculator::usage_percentage(budget, spent);
        prop_assert_eq!(percentage, Some(spent / budget * Decimal::ONE_HUNDRED));
    }

    /// Without a budget there is never a percentage, and all spend is overage.
    #[test]
    fn prop_zero_budget_never_has_percentage(spent in amount()) {
        prop_assert_eq!(UsageCalculator::usage_percentage(Decimal::ZERO, spent), None);
        prop_assert_eq!(UsageCalculator::remaining_amount(Decimal::ZERO, spent), -spent);
    }

    /// Remaining is budget minus spent.
    #[test]
    fn prop_remaining_amount(
        budget in positive_amount(),
        spent in amount(),
    ) {
        prop_assert_eq!(UsageCalculator::remaining_amount(budget, spent), budget - spent);
    }

    /// Status is monotonic: more usage never means a less severe status.
    #[test]
    fn prop_status_is_monotonic(a in percentage(), b in percentage()) {
        let thresholds = UsageThresholds::default();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        let low_status = StatusClassifier::classify(Some(low), &thresholds);
        let high_status = StatusClassifier::classify(Some(high), &thresholds);
        prop_assert!(low_status <= high_status);
    }

    /// Classification is a pure function of the percentage.
    #[test]
    fn prop_status_is_deterministic(p in percentage()) {
        let thresholds = UsageThresholds::default();
        prop_assert_eq!(
            StatusClassifier::classify(Some(p), &thresholds),
            StatusClassifier::classify(Some(p), &thresholds)
        );
    }

    /// Over-limit exactly when usage reaches the over-limit threshold.
    #[test]
    fn prop_over_limit_iff_at_or_above_threshold(p in percentage()) {
        let thresholds = UsageThresholds::default();
        let status = StatusClassifier::classify(Some(p), &thresholds);
        prop_assert_eq!(
            status == BudgetStatus::OverLimit,
            p >= thresholds.over_limit_percent()
        );
    }
}
