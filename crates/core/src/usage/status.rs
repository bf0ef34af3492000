//! Usage percentage to budget status mapping.

use rust_decimal::Decimal;

use super::types::BudgetStatus;
use crate::threshold::UsageThresholds;

/// Maps usage percentages onto [`BudgetStatus`].
pub struct StatusClassifier;

impl StatusClassifier {
    /// Classifies a usage percentage.
    ///
    /// Uses the true ratio, so 500% is still over-limit. A missing percentage
    /// (no budget set, or a non-finite upstream figure) is on-track.
    #[must_use]
    pub fn classify(
        usage_percentage: Option<Decimal>,
        thresholds: &UsageThresholds,
    ) -> BudgetStatus {
        match usage_percentage {
            Some(p) if p >= thresholds.over_limit_percent() => BudgetStatus::OverLimit,
            Some(p) if p >= thresholds.at_risk_percent() => BudgetStatus::AtRisk,
            _ => BudgetStatus::OnTrack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), BudgetStatus::OnTrack)]
    #[case(dec!(74.999), BudgetStatus::OnTrack)]
    #[case(dec!(75.0), BudgetStatus::AtRisk)]
    #[case(dec!(90), BudgetStatus::AtRisk)]
    #[case(dec!(99.999), BudgetStatus::AtRisk)]
    #[case(dec!(100.0), BudgetStatus::OverLimit)]
    #[case(dec!(500), BudgetStatus::OverLimit)]
    fn test_default_boundaries(#[case] usage: Decimal, #[case] expected: BudgetStatus) {
        let status = StatusClassifier::classify(Some(usage), &UsageThresholds::default());
        assert_eq!(status, expected);
    }

    #[test]
    fn test_no_budget_is_on_track() {
        let status = StatusClassifier::classify(None, &UsageThresholds::default());
        assert_eq!(status, BudgetStatus::OnTrack);
    }

    #[test]
    fn test_negative_usage_is_on_track() {
        let status = StatusClassifier::classify(Some(dec!(-20)), &UsageThresholds::default());
        assert_eq!(status, BudgetStatus::OnTrack);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = UsageThresholds::new(dec!(80), dec!(110), dec!(95)).unwrap();

        assert_eq!(
            StatusClassifier::classify(Some(dec!(79)), &thresholds),
            BudgetStatus::OnTrack
        );
        assert_eq!(
            StatusClassifier::classify(Some(dec!(105)), &thresholds),
            BudgetStatus::AtRisk
        );
        assert_eq!(
            StatusClassifier::classify(Some(dec!(110)), &thresholds),
            BudgetStatus::OverLimit
        );
    }
}
