//! Normalization of raw upstream budget payloads.
//!
//! Upstream APIs deliver amounts as JSON numbers. They are converted to
//! `Decimal` here, before anything is classified, so the engine itself never
//! sees a NaN or an infinity.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use finsight_shared::types::CategoryId;

use super::error::UsageError;
use super::types::{BudgetPeriod, BudgetRecord};

/// Converts a raw figure to `Decimal`. `None` for NaN and infinities.
#[must_use]
pub fn finite_decimal(value: f64) -> Option<Decimal> {
    if value.is_finite() {
        Decimal::from_f64(value)
    } else {
        None
    }
}

/// Budget record as delivered by the upstream budget listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBudgetRecord {
    /// Category identifier.
    pub category_id: CategoryId,
    /// Category display name.
    pub category_name: String,
    /// Category color.
    #[serde(default)]
    pub category_color: Option<String>,
    /// Budgeted amount; absent means no budget is set.
    #[serde(default)]
    pub budget_amount: Option<f64>,
    /// Amount spent; absent means nothing spent.
    #[serde(default)]
    pub actual_spent: Option<f64>,
    /// Month of the budget (1-12).
    #[serde(alias = "budgetMonth")]
    pub period_month: u32,
    /// Year of the budget.
    #[serde(alias = "budgetYear")]
    pub period_year: i32,
    /// Free-text status supplied upstream.
    #[serde(default)]
    pub status_message: Option<String>,
}

impl RawBudgetRecord {
    /// Converts the payload, rejecting anything that is not a usable number.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::NonFiniteAmount` for NaN or infinite amounts,
    /// `UsageError::OutOfRange` for finite amounts too large for `Decimal`,
    /// `UsageError::NegativeAmount` for negative amounts, and
    /// `UsageError::InvalidPeriod` for a month outside 1-12.
    pub fn try_into_record(self) -> Result<BudgetRecord, UsageError> {
        let budget_amount = strict_amount("budgetAmount", self.budget_amount)?;
        let actual_spent = strict_amount("actualSpent", self.actual_spent)?;

        let period = BudgetPeriod::new(self.period_year, self.period_month);
        if !period.is_valid() {
            return Err(UsageError::InvalidPeriod {
                year: self.period_year,
                month: self.period_month,
            });
        }

        Ok(BudgetRecord {
            category_id: self.category_id,
            category_name: self.category_name,
            category_color: self.category_color,
            budget_amount,
            actual_spent,
            period,
            status_message: self.status_message,
        })
    }

    /// Converts the payload, coercing unusable amounts instead of failing.
    ///
    /// A NaN, infinite or negative budget becomes "no budget set"; a NaN,
    /// infinite or negative spend becomes zero. A positive amount too large
    /// for `Decimal` is clamped to `Decimal::MAX`. The period is kept as given.
    #[must_use]
    pub fn normalize(self) -> BudgetRecord {
        let budget_amount = lenient_amount("budgetAmount", &self.category_name, self.budget_amount);
        let actual_spent = lenient_amount("actualSpent", &self.category_name, self.actual_spent);

        BudgetRecord {
            category_id: self.category_id,
            category_name: self.category_name,
            category_color: self.category_color,
            budget_amount,
            actual_spent,
            period: BudgetPeriod::new(self.period_year, self.period_month),
            status_message: self.status_message,
        }
    }
}

fn strict_amount(field: &'static str, raw: Option<f64>) -> Result<Decimal, UsageError> {
    let Some(raw) = raw else {
        return Ok(Decimal::ZERO);
    };

    if !raw.is_finite() {
        return Err(UsageError::NonFiniteAmount { field });
    }
    let value = Decimal::from_f64(raw).ok_or(UsageError::OutOfRange { field })?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(UsageError::NegativeAmount { field, value });
    }

    Ok(value)
}

fn lenient_amount(field: &'static str, category: &str, raw: Option<f64>) -> Decimal {
    let Some(raw) = raw else {
        return Decimal::ZERO;
    };

    match finite_decimal(raw) {
        Some(value) if !value.is_sign_negative() || value.is_zero() => value,
        // Finite but beyond Decimal's range: keep a positive amount as large as possible.
        None if raw.is_finite() && raw.is_sign_positive() => {
            tracing::debug!(field, category, "clamped out-of-range amount");
            Decimal::MAX
        }
        _ => {
            tracing::debug!(field, category, "coerced unusable amount to zero");
            Decimal::ZERO
        }
    }
}
