use academics_migration::{Migrator, MigratorTrait};
use anyhow::Context;
use sea_orm::{Database, DatabaseConnection};
use tracing::info;

pub async fn init_pool_and_migrate(database_url: &str) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(database_url)
        .await
        .with_context(|| format!("failed to connect to {database_url}"))?;

    Migrator::up(&db, None)
        .await
        .context("failed to apply migrations")?;
    info!("database migrations applied");

    Ok(db)
}
