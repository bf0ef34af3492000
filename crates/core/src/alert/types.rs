//! Budget alert data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::usage::{BudgetPeriod, BudgetUsage};

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertLevel {
    /// Budget is at risk.
    Warning,
    /// Budget is over, or about to go over, its limit.
    Critical,
}

impl AlertLevel {
    /// Returns the wire name of the level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Which message template an alert is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertMessageKey {
    /// Usage reached the over-limit threshold.
    Exceeded,
    /// Critical, but still under the limit.
    Danger,
    /// Warning level.
    Caution,
}

/// A derived budget alert. Recomputed on every refresh, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Category display name.
    pub category_name: String,
    /// Category color.
    pub category_color: Option<String>,
    /// Severity.
    pub level: AlertLevel,
    /// Message template key.
    pub message_key: AlertMessageKey,
    /// Usage percentage that triggered the alert.
    pub usage_percentage: Decimal,
    /// Rendered message.
    pub message: String,
    /// Budgeted amount.
    pub budget_amount: Decimal,
    /// Amount spent.
    pub actual_spent: Decimal,
    /// Budget period.
    pub period: BudgetPeriod,
}

impl Alert {
    /// Returns true for critical alerts.
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.level == AlertLevel::Critical
    }
}

/// Usage as delivered by an alert feed that already classified it upstream.
///
/// The upstream `status` and `alert_level` are kept for diagnostics only;
/// the engine always re-derives them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedUsage {
    /// Category display name.
    pub category_name: String,
    /// Category color.
    #[serde(default)]
    pub category_color: Option<String>,
    /// Budgeted amount, when the feed carries it.
    #[serde(default)]
    pub budget_amount: Option<Decimal>,
    /// Amount spent, when the feed carries it.
    #[serde(default)]
    pub actual_spent: Option<Decimal>,
    /// Usage percentage computed upstream.
    #[serde(default)]
    pub usage_percentage: Option<f64>,
    /// Status claimed upstream.
    #[serde(default)]
    pub status: Option<String>,
    /// Alert level claimed upstream.
    #[serde(default)]
    pub alert_level: Option<String>,
    /// Month of the budget.
    #[serde(alias = "budgetMonth")]
    pub period_month: u32,
    /// Year of the budget.
    #[serde(alias = "budgetYear")]
    pub period_year: i32,
}

/// Where a usage figure came from.
#[derive(Debug, Clone)]
pub enum UsageSource {
    /// Computed locally from a budget record.
    Raw(BudgetUsage),
    /// Received pre-classified from upstream.
    Classified(ClassifiedUsage),
}

impl From<BudgetUsage> for UsageSource {
    fn from(usage: BudgetUsage) -> Self {
        Self::Raw(usage)
    }
}

impl From<ClassifiedUsage> for UsageSource {
    fn from(usage: ClassifiedUsage) -> Self {
        Self::Classified(usage)
    }
}

/// Alerts partitioned by severity, input order preserved in each bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeverityGroups {
    /// Critical alerts.
    pub critical: Vec<Alert>,
    /// Warning alerts.
    pub warning: Vec<Alert>,
}

/// Alert overview for a set of budgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertSummary {
    /// Number of budgets inspected.
    pub total_budgets: usize,
    /// Number of warning alerts.
    pub warning_count: usize,
    /// Number of critical alerts.
    pub critical_count: usize,
    /// Number of alerts whose usage reached the over-limit threshold.
    pub exceeded_count: usize,
    /// Alerts in input order.
    pub alerts: Vec<Alert>,
}
