//! Budget usage to alert classification.

use rust_decimal::{Decimal, RoundingStrategy};

use super::types::{Alert, AlertLevel, AlertMessageKey, ClassifiedUsage, UsageSource};
use crate::threshold::UsageThresholds;
use crate::usage::{
    BudgetPeriod, BudgetStatus, BudgetUsage, StatusClassifier, UsageCalculator, finite_decimal,
};

/// Returns true when usage has reached the critical alert threshold.
///
/// Shared by the classifier's escalation rule and the aggregator's urgency
/// rule; the two must never use different thresholds.
#[must_use]
pub fn reaches_critical(usage_percentage: Decimal, thresholds: &UsageThresholds) -> bool {
    usage_percentage >= thresholds.critical_alert_percent()
}

/// Maps budget usage onto alerts.
pub struct AlertClassifier;

impl AlertClassifier {
    /// Returns the alert level for a usage percentage, `None` when on track.
    ///
    /// Critical covers over-limit budgets and anything at or above the
    /// critical alert threshold, even while the status is still at-risk.
    #[must_use]
    pub fn level(
        usage_percentage: Option<Decimal>,
        thresholds: &UsageThresholds,
    ) -> Option<AlertLevel> {
        let percentage = usage_percentage?;

        match StatusClassifier::classify(Some(percentage), thresholds) {
            BudgetStatus::OnTrack => None,
            BudgetStatus::OverLimit => Some(AlertLevel::Critical),
            BudgetStatus::AtRisk if reaches_critical(percentage, thresholds) => {
                Some(AlertLevel::Critical)
            }
            BudgetStatus::AtRisk => Some(AlertLevel::Warning),
        }
    }

    /// Selects the message template for an alert.
    #[must_use]
    pub fn message_key(
        level: AlertLevel,
        usage_percentage: Decimal,
        thresholds: &UsageThresholds,
    ) -> AlertMessageKey {
        if usage_percentage >= thresholds.over_limit_percent() {
            AlertMessageKey::Exceeded
        } else {
            match level {
                AlertLevel::Critical => AlertMessageKey::Danger,
                AlertLevel::Warning => AlertMessageKey::Caution,
            }
        }
    }

    /// Renders an alert message. The percentage is rounded half-up to a whole
    /// number for display only.
    #[must_use]
    pub fn render_message(
        key: AlertMessageKey,
        category_name: &str,
        usage_percentage: Decimal,
    ) -> String {
        let shown =
            usage_percentage.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        match key {
            AlertMessageKey::Exceeded => {
                format!("{category_name} is over budget at {shown}% of the limit")
            }
            AlertMessageKey::Danger => {
                format!("{category_name} has used {shown}% of its budget and is close to the limit")
            }
            AlertMessageKey::Caution => format!("{category_name} has used {shown}% of its budget"),
        }
    }

    /// Classifies one usage. `None` when the budget is on track.
    ///
    /// The status carried by `usage` is not trusted; it is re-derived from
    /// the percentage.
    #[must_use]
    pub fn classify(usage: &BudgetUsage, thresholds: &UsageThresholds) -> Option<Alert> {
        let percentage = usage.usage_percentage?;
        let level = Self::level(Some(percentage), thresholds)?;
        let message_key = Self::message_key(level, percentage, thresholds);

        Some(Alert {
            category_name: usage.category_name.clone(),
            category_color: usage.category_color.clone(),
            level,
            message_key,
            usage_percentage: percentage,
            message: Self::render_message(message_key, &usage.category_name, percentage),
            budget_amount: usage.budget_amount,
            actual_spent: usage.actual_spent,
            period: usage.period,
        })
    }

    /// Classifies every usage, keeping input order and dropping on-track ones.
    #[must_use]
    pub fn classify_all(usages: &[BudgetUsage], thresholds: &UsageThresholds) -> Vec<Alert> {
        usages
            .iter()
            .filter_map(|usage| Self::classify(usage, thresholds))
            .collect()
    }

    /// Classifies a usage from either source, always re-deriving the level.
    #[must_use]
    pub fn classify_source(source: &UsageSource, thresholds: &UsageThresholds) -> Option<Alert> {
        match source {
            UsageSource::Raw(usage) => Self::classify(usage, thresholds),
            UsageSource::Classified(upstream) => {
                let usage = Self::rederive(upstream, thresholds);
                let alert = Self::classify(&usage, thresholds);

                let derived = alert.as_ref().map(|a| a.level.as_str());
                if upstream.alert_level.is_some() && upstream.alert_level.as_deref() != derived {
                    tracing::debug!(
                        category = %upstream.category_name,
                        upstream_level = ?upstream.alert_level,
                        derived_level = ?derived,
                        "ignored upstream alert level"
                    );
                }

                alert
            }
        }
    }

    /// Classifies a mixed feed, keeping input order.
    #[must_use]
    pub fn classify_sources(sources: &[UsageSource], thresholds: &UsageThresholds) -> Vec<Alert> {
        sources
            .iter()
            .filter_map(|source| Self::classify_source(source, thresholds))
            .collect()
    }

    /// Rebuilds a usage from an upstream payload.
    ///
    /// Amounts win over the upstream percentage when both amounts are present;
    /// otherwise the upstream percentage is used if it is finite.
    fn rederive(upstream: &ClassifiedUsage, thresholds: &UsageThresholds) -> BudgetUsage {
        let budget_amount = upstream.budget_amount.unwrap_or(Decimal::ZERO);
        let actual_spent = upstream.actual_spent.unwrap_or(Decimal::ZERO);

        let usage_percentage = match (upstream.budget_amount, upstream.actual_spent) {
            (Some(budget), Some(spent)) => UsageCalculator::usage_percentage(budget, spent),
            _ => upstream.usage_percentage.and_then(finite_decimal),
        };

        BudgetUsage {
            category_name: upstream.category_name.clone(),
            category_color: upstream.category_color.clone(),
            period: BudgetPeriod::new(upstream.period_year, upstream.period_month),
            budget_amount,
            actual_spent,
            usage_percentage,
            remaining_amount: UsageCalculator::remaining_amount(budget_amount, actual_spent),
            status: StatusClassifier::classify(usage_percentage, thresholds),
            status_message: None,
        }
    }
}
