//! In-memory local repository implementation.
//!
//! Both collections live in `Vec`s behind a shared lock, so insertion order
//! is the natural order. Reads hand out clones: a snapshot can never be used
//! to mutate the store.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::db::repository::*;
use crate::db::seed::{demo_nutrition_profiles, demo_recipes};
use crate::models::{NutritionProfile, Recipe};

/// In-memory local repository.
///
/// # Example
/// ```
/// use nutri_insights::db::repositories::LocalRepository;
/// use nutri_insights::db::repository::RecipeRepository;
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// rt.block_on(async {
///     let repo = LocalRepository::with_demo_data();
///     let recipes = repo.list_recipes().await.unwrap();
///     assert_eq!(recipes.len(), 8);
/// });
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    nutrition_profiles: Vec<NutritionProfile>,
    recipes: Vec<Recipe>,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            nutrition_profiles: Vec::new(),
            recipes: Vec::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Create a local repository pre-populated with the demo dataset.
    pub fn with_demo_data() -> Self {
        Self::with_records(demo_nutrition_profiles(), demo_recipes())
    }

    /// Create a local repository holding exactly the given records.
    pub fn with_records(nutrition_profiles: Vec<NutritionProfile>, recipes: Vec<Recipe>) -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                nutrition_profiles,
                recipes,
                is_healthy: true,
            })),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        data.nutrition_profiles.clear();
        data.recipes.clear();
    }

    /// Number of stored nutrition profiles.
    pub fn nutrition_profile_count(&self) -> usize {
        self.data.read().nutrition_profiles.len()
    }

    /// Number of stored recipes.
    pub fn recipe_count(&self) -> usize {
        self.data.read().recipes.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection_with_context(
                "Database is not healthy",
                ErrorContext::new(operation),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NutritionRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn list_nutrition_profiles(&self) -> RepositoryResult<Vec<NutritionProfile>> {
        self.check_health("list_nutrition_profiles")?;
        Ok(self.data.read().nutrition_profiles.clone())
    }

    async fn replace_nutrition_profiles(
        &self,
        profiles: &[NutritionProfile],
    ) -> RepositoryResult<usize> {
        self.check_health("replace_nutrition_profiles")?;
        let mut data = self.data.write();
        data.nutrition_profiles = profiles.to_vec();
        Ok(data.nutrition_profiles.len())
    }
}

#[async_trait]
impl RecipeRepository for LocalRepository {
    async fn list_recipes(&self) -> RepositoryResult<Vec<Recipe>> {
        self.check_health("list_recipes")?;
        Ok(self.data.read().recipes.clone())
    }

    async fn replace_recipes(&self, recipes: &[Recipe]) -> RepositoryResult<usize> {
        self.check_health("replace_recipes")?;
        let mut data = self.data.write();
        data.recipes = recipes.to_vec();
        Ok(data.recipes.len())
    }
}
