//! `/api/insights` orchestration: snapshot, filter, aggregate.

use log::debug;

use super::aggregate::{summarize, to_chart_bundle};
use super::query::filter_records;
use crate::db::repository::{FullRepository, RepositoryResult};
use crate::db::services as store;
use crate::models::{FilterSpec, NutritionProfile};
use crate::routes::insights::InsightsResponse;
use crate::routes::meta::ResponseMeta;

/// Build the insights payload for one request.
///
/// Charts and summary cover every profile matching the diet/text filter;
/// the pagination window is only echoed in `meta`.
pub async fn get_insights<R: FullRepository + ?Sized>(
    repo: &R,
    filter: &FilterSpec,
) -> RepositoryResult<InsightsResponse> {
    let profiles = store::list_nutrition_profiles(repo).await?;
    Ok(build_insights(&profiles, filter))
}

/// Pure part of [`get_insights`], usable on any snapshot.
pub fn build_insights(
    profiles: &[NutritionProfile],
    filter: &FilterSpec,
) -> InsightsResponse {
    let matched = filter_records(profiles, filter);
    debug!(
        "insights: {} of {} profiles match diet={} q={:?}",
        matched.len(),
        profiles.len(),
        filter.diet_type,
        filter.text_query
    );

    InsightsResponse {
        charts: to_chart_bundle(&matched),
        summary: summarize(&matched),
        meta: ResponseMeta::from_filter(filter, matched.len()),
    }
}
