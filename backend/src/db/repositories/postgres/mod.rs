//! Postgres repository implementation using Diesel.
//!
//! ## Features
//!
//! - Connection pooling with r2d2
//! - Automatic migration execution at construction
//!
//! Each operation runs exactly once on a blocking task. A failed query is
//! returned to the caller as-is; there is no retry or backoff.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `DATABASE_URL` or `PG_DATABASE_URL`: Connection string (required)
//! - `PG_POOL_MAX`: Maximum pool size (default: 10)
//! - `PG_POOL_MIN`: Minimum pool size (default: 1)
//! - `PG_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)
//! - `PG_IDLE_TIMEOUT_SEC`: Idle connection timeout in seconds (default: 600)

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::{debug, info};
use std::time::Duration;
use tokio::task;

use crate::db::repository::{
    ErrorContext, NutritionRepository, RecipeRepository, RepositoryError, RepositoryResult,
};
use crate::models::{NutritionProfile, Recipe};

mod models;
mod schema;

use models::*;
use schema::*;

type PgPool = Pool<ConnectionManager<PgConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("src/db/repositories/postgres/migrations");

/// Configuration for connecting to Postgres.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresConfig {
    /// Database connection URL
    pub database_url: String,
    /// Maximum number of connections in the pool
    pub max_pool_size: u32,
    /// Minimum number of idle connections kept open
    pub min_pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_sec: u64,
    /// Idle connection timeout in seconds
    pub idle_timeout_sec: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_pool_size: 10,
            min_pool_size: 1,
            connection_timeout_sec: 30,
            idle_timeout_sec: 600,
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

impl PostgresConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    /// Returns an error when neither `DATABASE_URL` nor `PG_DATABASE_URL` is set.
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("PG_DATABASE_URL"))
            .map_err(|_| "DATABASE_URL or PG_DATABASE_URL must be set".to_string())?;

        let defaults = Self::default();
        Ok(Self {
            database_url,
            max_pool_size: env_or("PG_POOL_MAX", defaults.max_pool_size),
            min_pool_size: env_or("PG_POOL_MIN", defaults.min_pool_size),
            connection_timeout_sec: env_or("PG_CONN_TIMEOUT_SEC", defaults.connection_timeout_sec),
            idle_timeout_sec: env_or("PG_IDLE_TIMEOUT_SEC", defaults.idle_timeout_sec),
        })
    }

    /// Create a new configuration with a database URL.
    pub fn with_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Default::default()
        }
    }
}

/// Diesel-backed record store for Postgres.
///
/// Records are listed by their surrogate `row_id`, which is assigned in
/// insertion order, so listing order matches the in-memory store.
#[derive(Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Create a new repository and run pending migrations.
    ///
    /// Fails when the database cannot be reached within the configured
    /// connection timeout, or when a migration fails.
    pub fn new(config: PostgresConfig) -> RepositoryResult<Self> {
        if config.database_url.is_empty() {
            return Err(RepositoryError::configuration(
                "Postgres repository requires a database URL",
            ));
        }

        let manager = ConnectionManager::<PgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .min_idle(Some(config.min_pool_size))
            .connection_timeout(Duration::from_secs(config.connection_timeout_sec))
            .idle_timeout(Some(Duration::from_secs(config.idle_timeout_sec)))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new("create_pool")
                        .with_details(format!("max_size={}", config.max_pool_size)),
                )
            })?;

        {
            let mut conn = pool.get().map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new("get_connection_for_migrations"),
                )
            })?;
            Self::run_migrations(&mut conn)?;
        }

        info!(
            "Postgres repository ready (max_pool_size={})",
            config.max_pool_size
        );

        Ok(Self { pool })
    }

    fn run_migrations(conn: &mut PgConnection) -> RepositoryResult<()> {
        let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Migration failed: {}", e),
                ErrorContext::new("run_migrations"),
            )
        })?;
        debug!("Applied {} pending migrations", applied.len());
        Ok(())
    }

    /// Run `f` once on a pooled connection inside a blocking task.
    async fn with_conn<T, F>(&self, operation: &'static str, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();

        task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new(operation),
                )
            })?;

            f(&mut conn).map_err(|e| e.with_operation(operation))
        })
        .await
        .map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Task join error: {}", e),
                ErrorContext::new("spawn_blocking"),
            )
        })?
    }
}

#[async_trait]
impl NutritionRepository for PostgresRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.with_conn("health_check", |conn| {
            sql_query("SELECT 1")
                .execute(conn)
                .map(|_| true)
                .map_err(RepositoryError::from)
        })
        .await
    }

    async fn list_nutrition_profiles(&self) -> RepositoryResult<Vec<NutritionProfile>> {
        self.with_conn("list_nutrition_profiles", |conn| {
            let rows = nutrition_profiles::table
                .select(NutritionProfileRow::as_select())
                .order(nutrition_profiles::row_id.asc())
                .load::<NutritionProfileRow>(conn)?;
            Ok(rows.into_iter().map(NutritionProfile::from).collect())
        })
        .await
    }

    async fn replace_nutrition_profiles(
        &self,
        profiles: &[NutritionProfile],
    ) -> RepositoryResult<usize> {
        let rows: Vec<NewNutritionProfileRow> = profiles.iter().map(Into::into).collect();
        self.with_conn("replace_nutrition_profiles", move |conn| {
            conn.transaction::<_, RepositoryError, _>(|tx| {
                diesel::delete(nutrition_profiles::table).execute(tx)?;
                if rows.is_empty() {
                    return Ok(0);
                }
                let inserted = diesel::insert_into(nutrition_profiles::table)
                    .values(&rows)
                    .execute(tx)?;
                Ok(inserted)
            })
        })
        .await
    }
}

#[async_trait]
impl RecipeRepository for PostgresRepository {
    async fn list_recipes(&self) -> RepositoryResult<Vec<Recipe>> {
        self.with_conn("list_recipes", |conn| {
            let rows = recipes::table
                .select(RecipeRow::as_select())
                .order(recipes::row_id.asc())
                .load::<RecipeRow>(conn)?;
            Ok(rows.into_iter().map(Recipe::from).collect())
        })
        .await
    }

    async fn replace_recipes(&self, items: &[Recipe]) -> RepositoryResult<usize> {
        let rows: Vec<NewRecipeRow> = items.iter().map(Into::into).collect();
        self.with_conn("replace_recipes", move |conn| {
            conn.transaction::<_, RepositoryError, _>(|tx| {
                diesel::delete(recipes::table).execute(tx)?;
                if rows.is_empty() {
                    return Ok(0);
                }
                let inserted = diesel::insert_into(recipes::table)
                    .values(&rows)
                    .execute(tx)?;
                Ok(inserted)
            })
        })
        .await
    }
}
