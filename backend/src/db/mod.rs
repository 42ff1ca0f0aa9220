//! Record store for the nutrition dataset.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers (crate::http)                            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                            │
//! │  - listing and seeding                                  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/)                        │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────────┐
//!     │                                  │
//! ┌───▼──────────────┐        ┌──────────▼──────────┐
//! │ LocalRepository  │        │ PostgresRepository  │
//! │ (in-memory demo) │        │ (Diesel + r2d2)     │
//! └──────────────────┘        └─────────────────────┘
//! ```
//!
//! The store is created once at startup through [`RepositoryFactory`] and
//! handed to the HTTP layer as `Arc<dyn FullRepository>`; there is no
//! process-wide singleton.
//!
//! ```ignore
//! use nutri_insights::db::{services, RepositoryFactory};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = RepositoryFactory::from_env().await?;
//!     let profiles = services::list_nutrition_profiles(repo.as_ref()).await?;
//!     println!("{} diet types", profiles.len());
//!     Ok(())
//! }
//! ```

#[cfg(not(any(feature = "postgres-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod seed;
pub mod services;

// Postgres config is colocated with the repository implementation.
#[cfg(feature = "postgres-repo")]
pub use repositories::postgres::PostgresConfig;
#[cfg(not(feature = "postgres-repo"))]
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    _private: (),
}

pub use services::{health_check, list_nutrition_profiles, list_recipes, seed, SeedSummary};

pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
#[cfg(feature = "postgres-repo")]
pub use repositories::PostgresRepository;
pub use repository::{
    ErrorContext, FullRepository, NutritionRepository, RecipeRepository, RepositoryError,
    RepositoryResult,
};
