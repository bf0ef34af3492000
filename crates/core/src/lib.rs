//! Core budget logic for Finsight.
//!
//! This crate contains pure computation with ZERO network or storage dependencies.
//! Callers fetch budget records and period summaries elsewhere and hand the
//! snapshots in; every operation here is synchronous and keeps no state.
//!
//! # Modules
//!
//! - `threshold` - Validated usage thresholds
//! - `usage` - Usage percentage and status classification
//! - `alert` - Alert derivation, grouping and urgency
//! - `period` - Period-over-period income and expense comparison
//! - `health` - Financial health score (0-100)
//! - `filter` - Category and period filtering of usages
//! - `dashboard` - Aggregate budget performance

pub mod alert;
pub mod dashboard;
pub mod filter;
pub mod health;
pub mod period;
pub mod threshold;
pub mod usage;
