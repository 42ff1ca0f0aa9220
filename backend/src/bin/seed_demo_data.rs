//! Replace the record store's contents with the demo dataset.
//!
//! Destructive: both collections are cleared first. Picks the backend the
//! same way the server does (`NUTRI_REPOSITORY_CONFIG`, `repository.toml`,
//! then environment variables).

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nutri_insights::db::{services, RepositoryFactory};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let repository = RepositoryFactory::from_startup_config()
        .await
        .context("Failed to initialize record store")?;

    let summary = services::seed_demo_data(repository.as_ref())
        .await
        .context("Seeding failed")?;

    info!(
        "Seeded {} nutrition profiles and {} recipes at {}",
        summary.nutrition_profiles, summary.recipes, summary.seeded_at
    );
    Ok(())
}
