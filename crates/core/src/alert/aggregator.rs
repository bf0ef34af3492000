//! Alert grouping and selection for compact display and notifications.

use super::classifier::{AlertClassifier, reaches_critical};
use super::types::{Alert, AlertMessageKey, AlertSummary, SeverityGroups};
use crate::threshold::UsageThresholds;
use crate::usage::BudgetUsage;

/// Operations over collections of alerts. Inputs are never mutated.
pub struct AlertAggregator;

impl AlertAggregator {
    /// Returns the first critical alert, else the first alert, else `None`.
    #[must_use]
    pub fn most_critical(alerts: &[Alert]) -> Option<&Alert> {
        alerts
            .iter()
            .find(|alert| alert.is_critical())
            .or_else(|| alerts.first())
    }

    /// Partitions alerts into critical and warning buckets.
    #[must_use]
    pub fn group_by_severity(alerts: &[Alert]) -> SeverityGroups {
        let (critical, warning) = alerts
            .iter()
            .cloned()
            .partition(|alert| alert.is_critical());

        SeverityGroups { critical, warning }
    }

    /// Returns true if an alert needs immediate attention.
    #[must_use]
    pub fn is_urgent(alert: &Alert, thresholds: &UsageThresholds) -> bool {
        alert.is_critical() || reaches_critical(alert.usage_percentage, thresholds)
    }

    /// Selects the alerts that should trigger a transient notification.
    #[must_use]
    pub fn select_urgent(alerts: &[Alert], thresholds: &UsageThresholds) -> Vec<Alert> {
        alerts
            .iter()
            .filter(|alert| Self::is_urgent(alert, thresholds))
            .cloned()
            .collect()
    }

    /// Returns true if any alert needs immediate attention.
    #[must_use]
    pub fn needs_immediate_attention(alerts: &[Alert], thresholds: &UsageThresholds) -> bool {
        alerts.iter().any(|alert| Self::is_urgent(alert, thresholds))
    }

    /// Classifies a set of usages and counts the resulting alerts.
    #[must_use]
    pub fn summarize(usages: &[BudgetUsage], thresholds: &UsageThresholds) -> AlertSummary {
        let alerts = AlertClassifier::classify_all(usages, thresholds);

        let critical_count = alerts.iter().filter(|alert| alert.is_critical()).count();
        let warning_count = alerts.len() - critical_count;
        let exceeded_count = alerts
            .iter()
            .filter(|alert| alert.message_key == AlertMessageKey::Exceeded)
            .count();

        tracing::debug!(
            total_budgets = usages.len(),
            warning_count,
            critical_count,
            exceeded_count,
            "summarized budget alerts"
        );

        AlertSummary {
            total_budgets: usages.len(),
            warning_count,
            critical_count,
            exceeded_count,
            alerts,
        }
    }
}
