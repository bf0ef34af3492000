//! Common types used across the workspace.

pub mod id;
pub mod pagination;

pub use id::*;
pub use pagination::{PageMeta, PageResponse};

#[cfg(test)]
mod id_tests;
