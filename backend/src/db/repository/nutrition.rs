//! Nutrition profile collection.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::NutritionProfile;

/// Repository trait for the nutrition-profile collection.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait NutritionRepository: Send + Sync {
    /// Check if the backing store is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if the store is healthy
    /// - `Ok(false)` if it is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if the check itself failed
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Snapshot of every profile, in insertion order.
    async fn list_nutrition_profiles(&self) -> RepositoryResult<Vec<NutritionProfile>>;

    /// Delete every profile and insert `profiles` in their given order.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of profiles inserted
    /// * `Err(RepositoryError)` - If the operation fails; the previous
    ///   contents are kept when the backend supports transactions
    async fn replace_nutrition_profiles(
        &self,
        profiles: &[NutritionProfile],
    ) -> RepositoryResult<usize>;
}
