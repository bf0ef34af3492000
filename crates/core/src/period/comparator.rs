//! Period-over-period comparison.

use rust_decimal::Decimal;

use super::types::{PeriodComparison, PeriodSummary};

/// Compares two period summaries.
pub struct PeriodComparator;

impl PeriodComparator {
    /// Calculates growth of `change` relative to `previous`, in percent.
    ///
    /// Growth from zero is reported as zero; callers that need to tell
    /// "grew from nothing" apart must look at the change itself.
    #[must_use]
    pub fn growth_percent(change: Decimal, previous: Decimal) -> Decimal {
        if previous.is_zero() {
            return Decimal::ZERO;
        }

        change
            .checked_div(previous)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or_else(|| {
                if change.is_sign_negative() == previous.is_sign_negative() {
                    Decimal::MAX
                } else {
                    Decimal::MIN
                }
            })
    }

    /// Compares `current` against `previous`.
    ///
    /// The two periods are assumed to be adjacent; no gap check is made.
    #[must_use]
    pub fn compare(current: &PeriodSummary, previous: &PeriodSummary) -> PeriodComparison {
        let income_change = current.income - previous.income;
        let expense_change = current.expense - previous.expense;

        PeriodComparison {
            current_label: current.label.clone(),
            previous_label: previous.label.clone(),
            income_change,
            income_growth_percent: Self::growth_percent(income_change, previous.income),
            expense_change,
            expense_growth_percent: Self::growth_percent(expense_change, previous.expense),
        }
    }

    /// Compares the last two entries of a chronologically ordered series.
    ///
    /// Returns `None` when fewer than two periods are available.
    #[must_use]
    pub fn month_over_month(series: &[PeriodSummary]) -> Option<PeriodComparison> {
        match series {
            [.., previous, current] => {
                if current.period_index.checked_sub(previous.period_index) != Some(1) {
                    tracing::debug!(
                        current = current.period_index,
                        previous = previous.period_index,
                        "comparing non-adjacent periods"
                    );
                }
                Some(Self::compare(current, previous))
            }
            _ => None,
        }
    }
}
