//! Dashboard budget performance types.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::alert::Alert;

/// Number of exceeded-budget alerts shown on the dashboard.
pub const URGENT_ALERT_LIMIT: usize = 3;

/// Budget totals and status counts for a dashboard card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetPerformance {
    /// Sum of budgeted amounts.
    pub total_budget: Decimal,
    /// Sum of spent amounts.
    pub total_spent: Decimal,
    /// Total budget minus total spent.
    pub total_remaining: Decimal,
    /// Total spent / total budget * 100. `None` when nothing is budgeted.
    pub overall_usage_percentage: Option<Decimal>,
    /// Budgets on track.
    pub on_track: usize,
    /// Budgets at risk.
    pub at_risk: usize,
    /// Budgets over their limit.
    pub over_limit: usize,
    /// First few alerts for exceeded budgets, in input order.
    pub urgent_alerts: Vec<Alert>,
}

impl BudgetPerformance {
    /// Total number of budgets counted.
    #[must_use]
    pub const fn budget_count(&self) -> usize {
        self.on_track + self.at_risk + self.over_limit
    }
}
