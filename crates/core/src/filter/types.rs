//! Usage filter types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use finsight_shared::types::CategoryId;

use super::lookup::CategoryLookup;
use crate::usage::{BudgetPeriod, BudgetUsage};

/// Filter over budget usages. Absent fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageFilter {
    /// Category to keep.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Year to keep.
    #[serde(default)]
    pub year: Option<i32>,
    /// Month to keep, 1-12.
    #[serde(default)]
    pub month: Option<u32>,
}

impl UsageFilter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filter for the month containing `today`.
    #[must_use]
    pub fn current_month(today: NaiveDate) -> Self {
        let period = BudgetPeriod::containing(today);
        Self::new().with_year(period.year).with_month(period.month)
    }

    /// Restricts to one category.
    #[must_use]
    pub const fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Restricts to one year.
    #[must_use]
    pub const fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Restricts to one month.
    #[must_use]
    pub const fn with_month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    /// Returns true if the filter matches everything.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.category_id.is_none() && self.year.is_none() && self.month.is_none()
    }

    /// Resolves the category id to a name.
    #[must_use]
    pub fn resolve(&self, lookup: &dyn CategoryLookup) -> ResolvedUsageFilter {
        let category = match self.category_id {
            None => CategoryMatch::Any,
            Some(id) => match lookup.category_name(id) {
                Some(name) => CategoryMatch::Named(name.to_string()),
                None => {
                    tracing::debug!(category_id = %id, "filter category not found");
                    CategoryMatch::Unknown(id)
                }
            },
        };

        ResolvedUsageFilter {
            category,
            year: self.year,
            month: self.month,
        }
    }
}

/// How the category part of a filter matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryMatch {
    /// No category restriction.
    Any,
    /// Keep usages with this category name.
    Named(String),
    /// The id did not resolve; nothing matches.
    Unknown(CategoryId),
}

/// A usage filter whose category has been resolved to a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUsageFilter {
    /// Category restriction.
    pub category: CategoryMatch,
    /// Year to keep.
    pub year: Option<i32>,
    /// Month to keep.
    pub month: Option<u32>,
}

impl ResolvedUsageFilter {
    /// Returns true if the usage passes every present restriction.
    #[must_use]
    pub fn matches(&self, usage: &BudgetUsage) -> bool {
        let category_ok = match &self.category {
            CategoryMatch::Any => true,
            CategoryMatch::Named(name) => usage.category_name == *name,
            CategoryMatch::Unknown(_) => false,
        };

        category_ok
            && self.year.is_none_or(|year| usage.period.year == year)
            && self.month.is_none_or(|month| usage.period.month == month)
    }
}
