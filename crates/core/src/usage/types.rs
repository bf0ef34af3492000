//! Budget usage data types.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finsight_shared::types::CategoryId;

/// Calendar month a budget applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BudgetPeriod {
    /// Calendar year.
    pub year: i32,
    /// Month of the year (1-12).
    pub month: u32,
}

impl BudgetPeriod {
    /// Creates a period without validating the month.
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Returns the period containing the given date.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the first day of the period, or `None` if the month is invalid.
    #[must_use]
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Returns true if the month is within 1-12 and the year is representable.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.first_day().is_some()
    }
}

impl std::fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

/// One budget line for a category and month, as fetched upstream.
///
/// A snapshot: the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRecord {
    /// Category identifier.
    pub category_id: CategoryId,
    /// Category display name.
    pub category_name: String,
    /// Category color, passed through for rendering.
    pub category_color: Option<String>,
    /// Budgeted amount. Zero means no budget is set.
    pub budget_amount: Decimal,
    /// Amount spent in the period.
    pub actual_spent: Decimal,
    /// Budget period.
    pub period: BudgetPeriod,
    /// Free-text status supplied upstream, passed through untouched.
    pub status_message: Option<String>,
}

/// Three-level budget status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetStatus {
    /// Usage below the at-risk threshold, or no budget set.
    OnTrack,
    /// Usage between the at-risk and over-limit thresholds.
    AtRisk,
    /// Usage at or above the over-limit threshold.
    OverLimit,
}

impl BudgetStatus {
    /// Returns the wire name of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OnTrack => "ON_TRACK",
            Self::AtRisk => "AT_RISK",
            Self::OverLimit => "OVER_LIMIT",
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived usage of one budget record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetUsage {
    /// Category display name.
    pub category_name: String,
    /// Category color.
    pub category_color: Option<String>,
    /// Budget period.
    pub period: BudgetPeriod,
    /// Budgeted amount.
    pub budget_amount: Decimal,
    /// Amount spent.
    pub actual_spent: Decimal,
    /// Spent / budgeted * 100, unrounded. `None` when no budget is set.
    pub usage_percentage: Option<Decimal>,
    /// Budgeted minus spent. Negative means overage.
    pub remaining_amount: Decimal,
    /// Classified status.
    pub status: BudgetStatus,
    /// Free-text status supplied upstream.
    pub status_message: Option<String>,
}

impl BudgetUsage {
    /// Returns true if a budget amount is set for this usage.
    #[must_use]
    pub const fn has_budget(&self) -> bool {
        self.usage_percentage.is_some()
    }

    /// Returns true if the budget is over its limit.
    #[must_use]
    pub fn is_over_budget(&self) -> bool {
        self.status == BudgetStatus::OverLimit
    }

    /// Returns the overage amount, zero when within budget.
    #[must_use]
    pub fn overage(&self) -> Decimal {
        if self.remaining_amount.is_sign_negative() {
            -self.remaining_amount
        } else {
            Decimal::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_period_containing_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(BudgetPeriod::containing(date), BudgetPeriod::new(2024, 2));
    }

    #[rstest]
    #[case(2024, 1, true)]
    #[case(2024, 12, true)]
    #[case(2024, 0, false)]
    #[case(2024, 13, false)]
    fn test_period_validity(#[case] year: i32, #[case] month: u32, #[case] valid: bool) {
        assert_eq!(BudgetPeriod::new(year, month).is_valid(), valid);
    }

    #[test]
    fn test_period_display() {
        assert_eq!(BudgetPeriod::new(2024, 3).to_string(), "03/2024");
    }
}
