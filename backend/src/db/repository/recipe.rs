//! Recipe collection.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::Recipe;

/// Repository trait for the recipe collection.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Snapshot of every recipe, in insertion order.
    async fn list_recipes(&self) -> RepositoryResult<Vec<Recipe>>;

    /// Delete every recipe and insert `recipes` in their given order.
    ///
    /// Returns the number of recipes inserted.
    async fn replace_recipes(&self, recipes: &[Recipe]) -> RepositoryResult<usize>;
}
