//! `/api/recipes` orchestration.

use log::debug;

use super::query::query;
use crate::db::repository::{FullRepository, RepositoryResult};
use crate::db::services as store;
use crate::models::FilterSpec;
use crate::routes::meta::ResponseMeta;
use crate::routes::recipes::RecipeListResponse;

/// One page of recipes matching `filter`.
pub async fn get_recipes<R: FullRepository + ?Sized>(
    repo: &R,
    filter: &FilterSpec,
) -> RepositoryResult<RecipeListResponse> {
    let recipes = store::list_recipes(repo).await?;
    let result = query(&recipes, filter);
    debug!(
        "recipes: page {} of size {} -> {} items, {} total",
        filter.page,
        filter.page_size,
        result.items.len(),
        result.total
    );

    Ok(RecipeListResponse {
        recipes: result.items,
        meta: ResponseMeta::from_filter(filter, result.total),
    })
}
