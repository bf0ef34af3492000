//! Property-based tests for the health score.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::engine::HealthScoreEngine;
use super::types::{CategoryBudget, HealthScoreInput};

fn signed_decimal() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000).prop_map(|v| Decimal::new(v, 2))
}

fn category_budget() -> impl Strategy<Value = CategoryBudget> {
    (
        (-100i64..100_000).prop_map(|v| Decimal::new(v, 2)),
        prop::option::of((0i64..50_000).prop_map(|v| Decimal::new(v, 2))),
    )
        .prop_map(|(budget_amount, budget_usage_percent)| CategoryBudget {
            budget_amount,
            budget_usage_percent,
        })
}

fn health_input() -> impl Strategy<Value = HealthScoreInput> {
    (
        signed_decimal(),
        signed_decimal(),
        prop::collection::vec(category_budget(), 0..12),
    )
        .prop_map(|(savings_rate, net_savings, category_budgets)| HealthScoreInput {
            savings_rate,
            net_savings,
            category_budgets,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The score never leaves 0..=100.
    #[test]
    fn prop_score_is_bounded(input in health_input()) {
        prop_assert!(HealthScoreEngine::score(&input).value() <= 100);
    }

    /// Each component respects its own maximum.
    #[test]
    fn prop_components_are_bounded(input in health_input()) {
        let breakdown = HealthScoreEngine::breakdown(&input);
        prop_assert!(breakdown.savings_rate_points <= 40);
        prop_assert!(breakdown.net_savings_points <= 30);
        prop_assert!(breakdown.adherence_points <= 30);
    }

    /// Re-scoring the same input gives the same report.
    #[test]
    fn prop_evaluate_is_deterministic(input in health_input()) {
        prop_assert_eq!(HealthScoreEngine::evaluate(&input), HealthScoreEngine::evaluate(&input));
    }

    /// A higher savings rate never lowers the score.
    #[test]
    fn prop_savings_rate_is_monotonic(
        input in health_input(),
        bump in (0i64..10_000).prop_map(|v| Decimal::new(v, 2)),
    ) {
        let mut better = input.clone();
        better.savings_rate += bump;
        prop_assert!(HealthScoreEngine::score(&better) >= HealthScoreEngine::score(&input));
    }
}
