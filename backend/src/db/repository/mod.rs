//! Record store trait definitions.
//!
//! The store is split into one focused trait per collection so backends and
//! test doubles can be written against just what they need.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for store operations
//! - [`nutrition`]: Diet nutrition profiles
//! - [`recipe`]: Recipes
//!
//! # Ordering contract
//!
//! Every `list_*` method returns records in insertion order (the order they
//! were passed to the matching `replace_*` call). Backends must not reorder.
//!
//! # Convenience Trait Bound
//!
//! Handlers and services take [`FullRepository`], usually as
//! `Arc<dyn FullRepository>`:
//!
//! ```ignore
//! async fn count_all<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<usize> {
//!     Ok(repo.list_nutrition_profiles().await?.len() + repo.list_recipes().await?.len())
//! }
//! ```

pub mod error;
pub mod nutrition;
pub mod recipe;

// Re-export error types
pub use error::{ErrorContext, RepositoryError, RepositoryResult};

// Re-export all traits
pub use nutrition::NutritionRepository;
pub use recipe::RecipeRepository;

/// Composite trait bound for a complete record store.
///
/// Automatically implemented for any type implementing both collection traits.
pub trait FullRepository: NutritionRepository + RecipeRepository {}

impl<T> FullRepository for T where T: NutritionRepository + RecipeRepository {}
