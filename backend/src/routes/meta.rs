use serde::{Deserialize, Serialize};

use crate::models::FilterSpec;

/// Pagination and filter echo attached to every list-style response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    pub page: usize,
    pub page_size: usize,
    /// Number of records matching the filter, independent of pagination.
    pub total: usize,
    pub diet_type: String,
    pub q: String,
}

impl ResponseMeta {
    pub fn from_filter(filter: &FilterSpec, total: usize) -> Self {
        Self {
            page: filter.page,
            page_size: filter.page_size,
            total,
            diet_type: filter.diet_type.to_string(),
            q: filter.text_query.clone(),
        }
    }
}
