//! Shared types, errors, and configuration for Finsight.
//!
//! This crate provides common types used across the workspace:
//! - Typed IDs for categories
//! - Page envelope for listings paged upstream
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;


pub use config::{AppConfig, ThresholdConfig};
pub use error::{AppError, AppResult};
