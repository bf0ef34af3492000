//! Financial health score calculation.
//!
//! The score is the sum of three independent components:
//!
//! | Component          | Max | Rule                                         |
//! |--------------------|-----|----------------------------------------------|
//! | Savings rate       | 40  | step function on the rate                    |
//! | Net savings sign   | 30  | 30 if positive, 15 if zero, 0 if negative    |
//! | Budget adherence   | 30  | share of budgets within limit, 15 if none    |
//!
//! The sum is clamped to 100.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::{
    CategoryBudget, HealthBreakdown, HealthRating, HealthReport, HealthScore, HealthScoreInput,
    Recommendation, RecommendationKey, RecommendationPriority,
};

/// Points for the adherence component when no budgets are set.
pub const NEUTRAL_ADHERENCE_POINTS: u8 = 15;

const MAX_ADHERENCE_POINTS: usize = 30;

/// Computes health scores. Holds no state between calls.
pub struct HealthScoreEngine;

impl HealthScoreEngine {
    /// Savings rate component. Discrete steps, no interpolation.
    #[must_use]
    pub fn savings_rate_points(savings_rate: Decimal) -> u8 {
        if savings_rate >= dec!(30) {
            40
        } else if savings_rate >= dec!(20) {
            30
        } else if savings_rate >= dec!(10) {
            20
        } else if savings_rate > Decimal::ZERO {
            10
        } else {
            0
        }
    }

    /// Net savings sign component.
    #[must_use]
    pub fn net_savings_points(net_savings: Decimal) -> u8 {
        if net_savings.is_zero() {
            15
        } else if net_savings.is_sign_positive() {
            30
        } else {
            0
        }
    }

    /// Budget adherence component.
    ///
    /// Only entries with a positive budget count. The ratio of entries within
    /// budget is scaled to 30 and rounded half-up once.
    #[must_use]
    pub fn adherence_points(budgets: &[CategoryBudget]) -> u8 {
        let (total, within) = budgets
            .iter()
            .filter(|budget| budget.has_budget())
            .fold((0usize, 0usize), |(total, within), budget| {
                (total + 1, within + usize::from(budget.is_within_budget()))
            });

        if total == 0 {
            return NEUTRAL_ADHERENCE_POINTS;
        }

        // round(within * 30 / total), half-up, in integers.
        let scaled = within * MAX_ADHERENCE_POINTS;
        let points = (2 * scaled + total) / (2 * total);

        u8::try_from(points).unwrap_or(u8::MAX)
    }

    /// Computes the per-component breakdown.
    #[must_use]
    pub fn breakdown(input: &HealthScoreInput) -> HealthBreakdown {
        HealthBreakdown {
            savings_rate_points: Self::savings_rate_points(input.savings_rate),
            net_savings_points: Self::net_savings_points(input.net_savings),
            adherence_points: Self::adherence_points(&input.category_budgets),
        }
    }

    /// Computes the score.
    #[must_use]
    pub fn score(input: &HealthScoreInput) -> HealthScore {
        Self::breakdown(input).total()
    }

    /// Computes the score with its breakdown, rating and recommendations.
    #[must_use]
    pub fn evaluate(input: &HealthScoreInput) -> HealthReport {
        let breakdown = Self::breakdown(input);
        let score = breakdown.total();
        let rating = HealthRating::from_score(score);
        let recommendations = Self::recommendations(input, &breakdown);

        tracing::debug!(
            score = score.value(),
            savings_rate_points = breakdown.savings_rate_points,
            net_savings_points = breakdown.net_savings_points,
            adherence_points = breakdown.adherence_points,
            ?rating,
            recommendations = recommendations.len(),
            "evaluated financial health"
        );

        HealthReport {
            score,
            breakdown,
            rating,
            recommendations,
        }
    }

    /// Derives recommendations from the input and its breakdown.
    #[must_use]
    pub fn recommendations(
        input: &HealthScoreInput,
        breakdown: &HealthBreakdown,
    ) -> Vec<Recommendation> {
        let has_budgets = input.category_budgets.iter().any(CategoryBudget::has_budget);

        let rules = [
            (
                input.savings_rate < dec!(10),
                RecommendationKey::IncreaseSavings,
                RecommendationPriority::High,
            ),
            (
                input.net_savings <= Decimal::ZERO,
                RecommendationKey::StopOverspending,
                RecommendationPriority::Critical,
            ),
            (
                has_budgets && breakdown.adherence_points < NEUTRAL_ADHERENCE_POINTS,
                RecommendationKey::TightenBudgets,
                RecommendationPriority::Medium,
            ),
            (
                input.savings_rate >= dec!(20),
                RecommendationKey::KeepItUp,
                RecommendationPriority::Low,
            ),
        ];

        rules
            .into_iter()
            .filter(|(applies, _, _)| *applies)
            .map(|(_, key, priority)| Recommendation { key, priority })
            .collect()
    }
}
