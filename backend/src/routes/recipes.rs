use serde::{Deserialize, Serialize};

use super::meta::ResponseMeta;
use crate::models::Recipe;

pub const GET_RECIPES: &str = "/api/recipes";

/// One page of recipes plus the filter echo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeListResponse {
    pub recipes: Vec<Recipe>,
    pub meta: ResponseMeta,
}
