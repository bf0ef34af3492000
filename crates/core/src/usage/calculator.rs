//! Usage percentage and remaining amount for a single budget record.

use finsight_shared::types::PageResponse;
use rust_decimal::Decimal;

use super::status::StatusClassifier;
use super::types::{BudgetRecord, BudgetUsage};
use crate::threshold::UsageThresholds;

/// Derives [`BudgetUsage`] from [`BudgetRecord`].
pub struct UsageCalculator;

impl UsageCalculator {
    /// Calculates the usage percentage.
    ///
    /// Returns `None` when no budget is set (`budget_amount <= 0`). The result
    /// is not rounded; rounding is left to presentation. Saturates at
    /// `Decimal::MAX` instead of overflowing.
    #[must_use]
    pub fn usage_percentage(budget_amount: Decimal, actual_spent: Decimal) -> Option<Decimal> {
        if budget_amount <= Decimal::ZERO {
            return None;
        }

        let percentage = actual_spent
            .checked_div(budget_amount)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::MAX);

        Some(percentage)
    }

    /// Calculates the remaining amount. Without a budget, all spend is overage.
    #[must_use]
    pub fn remaining_amount(budget_amount: Decimal, actual_spent: Decimal) -> Decimal {
        if budget_amount <= Decimal::ZERO {
            -actual_spent
        } else {
            budget_amount - actual_spent
        }
    }

    /// Derives the usage of one record.
    #[must_use]
    pub fn calculate(record: &BudgetRecord, thresholds: &UsageThresholds) -> BudgetUsage {
        let usage_percentage = Self::usage_percentage(record.budget_amount, record.actual_spent);

        BudgetUsage {
            category_name: record.category_name.clone(),
            category_color: record.category_color.clone(),
            period: record.period,
            budget_amount: record.budget_amount,
            actual_spent: record.actual_spent,
            usage_percentage,
            remaining_amount: Self::remaining_amount(record.budget_amount, record.actual_spent),
            status: StatusClassifier::classify(usage_percentage, thresholds),
            status_message: record.status_message.clone(),
        }
    }

    /// Derives the usage of every record, preserving order.
    #[must_use]
    pub fn calculate_all(
        records: &[BudgetRecord],
        thresholds: &UsageThresholds,
    ) -> Vec<BudgetUsage> {
        records
            .iter()
            .map(|record| Self::calculate(record, thresholds))
            .collect()
    }

    /// Derives the usage of one upstream page, keeping its page metadata.
    #[must_use]
    pub fn calculate_page(
        page: PageResponse<BudgetRecord>,
        thresholds: &UsageThresholds,
    ) -> PageResponse<BudgetUsage> {
        page.map(|record| Self::calculate(&record, thresholds))
    }
}
