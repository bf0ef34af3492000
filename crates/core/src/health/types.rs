//! Financial health score types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::PeriodSummary;
use crate::usage::BudgetUsage;

/// Budget figures for one category, as seen by the adherence component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBudget {
    /// Budgeted amount. Entries without a positive budget are ignored.
    pub budget_amount: Decimal,
    /// Usage percentage, if known.
    pub budget_usage_percent: Option<Decimal>,
}

impl CategoryBudget {
    /// Returns true if a positive budget is set.
    #[must_use]
    pub fn has_budget(&self) -> bool {
        self.budget_amount > Decimal::ZERO
    }

    /// Returns true if spending stayed at or below the budget.
    ///
    /// An entry with no usage figure is not within budget.
    #[must_use]
    pub fn is_within_budget(&self) -> bool {
        self.budget_usage_percent
            .is_some_and(|usage| usage <= Decimal::ONE_HUNDRED)
    }
}

impl From<&BudgetUsage> for CategoryBudget {
    fn from(usage: &BudgetUsage) -> Self {
        Self {
            budget_amount: usage.budget_amount,
            budget_usage_percent: usage.usage_percentage,
        }
    }
}

/// Input of the health score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScoreInput {
    /// Savings rate in percent. May be negative.
    pub savings_rate: Decimal,
    /// Net savings amount. May be negative.
    pub net_savings: Decimal,
    /// Per-category budget figures.
    #[serde(default)]
    pub category_budgets: Vec<CategoryBudget>,
}

impl HealthScoreInput {
    /// Builds the input from a period summary.
    ///
    /// The savings rate is zero when the period has no income.
    #[must_use]
    pub fn from_period(
        period: &PeriodSummary,
        budgets: impl IntoIterator<Item = CategoryBudget>,
    ) -> Self {
        Self {
            savings_rate: period.savings_rate().unwrap_or(Decimal::ZERO),
            net_savings: period.savings,
            category_budgets: budgets.into_iter().collect(),
        }
    }
}

/// Health score, an integer in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthScore(u8);

impl HealthScore {
    /// Highest possible score.
    pub const MAX: u8 = 100;

    /// Creates a score, clamping to [`Self::MAX`].
    #[must_use]
    pub const fn new(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Returns the score.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for HealthScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Points awarded by each score component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthBreakdown {
    /// Savings rate component, at most 40.
    pub savings_rate_points: u8,
    /// Net savings sign component, at most 30.
    pub net_savings_points: u8,
    /// Budget adherence component, at most 30.
    pub adherence_points: u8,
}

impl HealthBreakdown {
    /// Sums the components and clamps the result.
    #[must_use]
    pub const fn total(&self) -> HealthScore {
        HealthScore::new(
            self.savings_rate_points
                .saturating_add(self.net_savings_points)
                .saturating_add(self.adherence_points),
        )
    }
}

/// Qualitative band of a health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthRating {
    /// Below 40.
    NeedsImprovement,
    /// 40 to 59.
    Fair,
    /// 60 to 79.
    Good,
    /// 80 and above.
    Excellent,
}

impl HealthRating {
    /// Maps a score onto its band.
    #[must_use]
    pub const fn from_score(score: HealthScore) -> Self {
        match score.value() {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::NeedsImprovement,
        }
    }
}

/// Urgency of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    /// Informational.
    Low,
    /// Worth acting on.
    Medium,
    /// Act soon.
    High,
    /// Act now.
    Critical,
}

/// What a recommendation is about. Presentation owns the wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKey {
    /// Savings rate is below 10%.
    IncreaseSavings,
    /// Spending is at or above income.
    StopOverspending,
    /// Most budgets are being exceeded.
    TightenBudgets,
    /// Savings rate is 20% or more.
    KeepItUp,
}

/// A single recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Topic.
    pub key: RecommendationKey,
    /// Urgency.
    pub priority: RecommendationPriority,
}

/// Full health evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    /// Total score.
    pub score: HealthScore,
    /// Per-component points.
    pub breakdown: HealthBreakdown,
    /// Score band.
    pub rating: HealthRating,
    /// Recommendations in a fixed order.
    pub recommendations: Vec<Recommendation>,
}
