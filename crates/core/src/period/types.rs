//! Period summary and comparison types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income, expense and savings totals for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    /// Display label, e.g. "Jan 2024".
    pub label: String,
    /// Total income. Never negative.
    pub income: Decimal,
    /// Total expense. Never negative.
    pub expense: Decimal,
    /// Income minus expense. May be negative.
    pub savings: Decimal,
    /// Ordinal used by callers to check adjacency.
    pub period_index: i64,
}

impl PeriodSummary {
    /// Builds a summary, deriving savings from income and expense.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        income: Decimal,
        expense: Decimal,
        period_index: i64,
    ) -> Self {
        Self {
            label: label.into(),
            income,
            expense,
            savings: income - expense,
            period_index,
        }
    }

    /// Savings as a percentage of income. `None` when there is no income.
    #[must_use]
    pub fn savings_rate(&self) -> Option<Decimal> {
        if self.income <= Decimal::ZERO {
            return None;
        }

        self.savings
            .checked_div(self.income)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
    }
}

/// Change between two periods, computed independently for income and expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodComparison {
    /// Label of the current period.
    pub current_label: String,
    /// Label of the previous period.
    pub previous_label: String,
    /// Current income minus previous income.
    pub income_change: Decimal,
    /// Income growth in percent. Zero when previous income is zero.
    pub income_growth_percent: Decimal,
    /// Current expense minus previous expense.
    pub expense_change: Decimal,
    /// Expense growth in percent. Zero when previous expense is zero.
    pub expense_growth_percent: Decimal,
}

impl PeriodComparison {
    /// Returns true if income went up.
    #[must_use]
    pub fn income_increased(&self) -> bool {
        self.income_change > Decimal::ZERO
    }

    /// Returns true if expense went up.
    #[must_use]
    pub fn expense_increased(&self) -> bool {
        self.expense_change > Decimal::ZERO
    }
}
