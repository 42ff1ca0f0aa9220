//! Data Transfer Objects for the HTTP API.
//!
//! Response bodies for the `/api/*` endpoints live in [`crate::routes`] and
//! are re-exported here; this module adds the request-side shapes and the
//! small bodies only the HTTP layer produces.

use serde::{Deserialize, Serialize};

pub use crate::api::{ClusterList, InsightsResponse, RecipeListResponse, ResponseMeta};
use crate::models::FilterSpec;

/// Query string shared by `/api/insights` and `/api/recipes`.
///
/// Every value is captured as a raw string so malformed numbers can be
/// coerced instead of rejected with a 400.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterQuery {
    #[serde(default)]
    pub diet_type: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub page_size: Option<String>,
}

impl FilterQuery {
    /// Resolve into a strongly-typed filter.
    pub fn to_filter(&self) -> FilterSpec {
        FilterSpec::from_raw(
            self.diet_type.as_deref(),
            self.q.as_deref(),
            self.page.as_deref(),
            self.page_size.as_deref(),
        )
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Record store status
    pub database: String,
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub ok: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DietTypeFilter;

    #[test]
    fn test_filter_query_deserializes_camel_case() {
        let query: FilterQuery =
            serde_json::from_str(r#"{"dietType":"Keto","q":" Ch ","page":"2","pageSize":"5"}"#)
                .unwrap();
        let filter = query.to_filter();
        assert_eq!(filter.diet_type, DietTypeFilter::Exact("keto".to_string()));
        assert_eq!(filter.text_query, "ch");
        assert_eq!(filter.page, 2);
        assert_eq!(filter.page_size, 5);
    }

    #[test]
    fn test_empty_query_uses_defaults() {
        let filter = FilterQuery::default().to_filter();
        assert_eq!(filter, FilterSpec::default());
    }
}
