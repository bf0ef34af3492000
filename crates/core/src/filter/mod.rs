//! Filtering budget usages by category and period.

pub mod engine;
pub mod lookup;
pub mod types;

pub use engine::UsageFilterEngine;
pub use lookup::CategoryLookup;
pub use types::{CategoryMatch, ResolvedUsageFilter, UsageFilter};
