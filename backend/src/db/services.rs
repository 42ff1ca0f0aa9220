//! High-level store service layer.
//!
//! Backend-agnostic operations that work with any [`FullRepository`]. The
//! HTTP layer and the binaries call these rather than the traits directly so
//! logging stays consistent regardless of the storage backend.

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::repository::{FullRepository, RepositoryResult};
use super::seed::{demo_nutrition_profiles, demo_recipes};
use crate::models::{NutritionProfile, Recipe};

// ==================== Health & Connection ====================

/// Check if the store is reachable.
///
/// This is a simple pass-through to the repository's health check.
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Snapshots ====================

/// Snapshot of every nutrition profile, in insertion order.
pub async fn list_nutrition_profiles<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<NutritionProfile>> {
    let profiles = repo
        .list_nutrition_profiles()
        .await
        .map_err(|e| e.with_entity("nutrition_profiles"))?;
    debug!("Loaded {} nutrition profiles", profiles.len());
    Ok(profiles)
}

/// Snapshot of every recipe, in insertion order.
pub async fn list_recipes<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Recipe>> {
    let recipes = repo
        .list_recipes()
        .await
        .map_err(|e| e.with_entity("recipes"))?;
    debug!("Loaded {} recipes", recipes.len());
    Ok(recipes)
}

// ==================== Seeding ====================

/// Counts reported after a seed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedSummary {
    pub nutrition_profiles: usize,
    pub recipes: usize,
    pub seeded_at: DateTime<Utc>,
}

/// Replace both collections with the given records.
///
/// Destructive: whatever the store held before is deleted. Each collection
/// is replaced atomically on its own, profiles first. The two replacements
/// do not share a transaction: if replacing recipes fails, the new profiles
/// stay in place next to the old recipes and the error names `recipes`.
/// Running the seed again converges both collections.
pub async fn seed<R: FullRepository + ?Sized>(
    repo: &R,
    profiles: &[NutritionProfile],
    recipes: &[Recipe],
) -> RepositoryResult<SeedSummary> {
    let nutrition_profiles = repo
        .replace_nutrition_profiles(profiles)
        .await
        .map_err(|e| e.with_entity("nutrition_profiles"))?;
    let recipes = repo
        .replace_recipes(recipes)
        .await
        .map_err(|e| e.with_entity("recipes"))?;

    info!(
        "Seeded {} nutrition profiles and {} recipes",
        nutrition_profiles, recipes
    );

    Ok(SeedSummary {
        nutrition_profiles,
        recipes,
        seeded_at: Utc::now(),
    })
}

/// Replace both collections with the fixed demo dataset.
pub async fn seed_demo_data<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<SeedSummary> {
    seed(repo, &demo_nutrition_profiles(), &demo_recipes()).await
}
