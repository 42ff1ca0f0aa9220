//! Query engine: diet-type / free-text filtering and pagination.
//!
//! Every function here is a pure function of a collection snapshot and a
//! [`FilterSpec`]. Records come back in the snapshot's natural order, which
//! for every store backend is insertion order.

use crate::models::{FilterSpec, NutritionProfile, Recipe};

/// Record fields the query engine filters on.
pub trait Filterable {
    /// Field compared (exactly, case-insensitively) against the diet-type filter.
    fn diet_key(&self) -> &str;

    /// Field searched (substring, case-insensitively) by the text query.
    fn search_text(&self) -> &str;
}

impl Filterable for NutritionProfile {
    fn diet_key(&self) -> &str {
        &self.diet_name
    }

    fn search_text(&self) -> &str {
        &self.diet_name
    }
}

impl Filterable for Recipe {
    fn diet_key(&self) -> &str {
        &self.diet_type
    }

    fn search_text(&self) -> &str {
        &self.name
    }
}

/// One page of matches plus the total number of matches.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<T> {
    pub items: Vec<T>,
    /// Count of all records satisfying the filter, independent of pagination.
    pub total: usize,
}

/// Whether a record satisfies both the diet-type and text predicates.
pub fn matches<T: Filterable>(record: &T, filter: &FilterSpec) -> bool {
    filter.diet_type.accepts(record.diet_key()) && filter.accepts_text(record.search_text())
}

/// All matching records, ignoring the pagination window.
pub fn filter_records<T: Filterable + Clone>(records: &[T], filter: &FilterSpec) -> Vec<T> {
    records
        .iter()
        .filter(|record| matches(*record, filter))
        .cloned()
        .collect()
}

/// Slice `[ (page-1)*page_size, (page-1)*page_size + page_size )` out of `matches`.
///
/// Out-of-range pages yield an empty vector.
pub fn paginate<T: Clone>(matches: &[T], filter: &FilterSpec) -> Vec<T> {
    let start = filter.offset();
    if start >= matches.len() {
        return Vec::new();
    }
    let end = start.saturating_add(filter.page_size).min(matches.len());
    matches[start..end].to_vec()
}

/// Filter `records` and return the requested page together with the match count.
pub fn query<T: Filterable + Clone>(records: &[T], filter: &FilterSpec) -> QueryResult<T> {
    let matched = filter_records(records, filter);
    let total = matched.len();
    let items = paginate(&matched, filter);
    QueryResult { items, total }
}
