//! Financial health scoring.

pub mod engine;
pub mod types;

#[cfg(test)]
mod props;

pub use engine::{HealthScoreEngine, NEUTRAL_ADHERENCE_POINTS};
pub use types::{
    CategoryBudget, HealthBreakdown, HealthRating, HealthReport, HealthScore, HealthScoreInput,
    Recommendation, RecommendationKey, RecommendationPriority,
};
