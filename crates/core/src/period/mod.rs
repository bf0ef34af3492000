//! Period summaries and period-over-period comparison.

pub mod comparator;
pub mod types;

pub use comparator::PeriodComparator;
pub use types::{PeriodComparison, PeriodSummary};
