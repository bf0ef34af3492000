//! Category id to name resolution.

use std::collections::{BTreeMap, HashMap};

use finsight_shared::types::CategoryId;

/// Resolves category ids to display names.
///
/// Category identity is owned by the caller; usages only carry names.
pub trait CategoryLookup {
    /// Returns the name of a category, `None` if unknown.
    fn category_name(&self, id: CategoryId) -> Option<&str>;
}

impl CategoryLookup for HashMap<CategoryId, String> {
    fn category_name(&self, id: CategoryId) -> Option<&str> {
        self.get(&id).map(String::as_str)
    }
}

impl CategoryLookup for BTreeMap<CategoryId, String> {
    fn category_name(&self, id: CategoryId) -> Option<&str> {
        self.get(&id).map(String::as_str)
    }
}
