use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::config::AppConfig;
use crate::splits::SplitCatalog;

pub type DbPool = SqlitePool;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
  #[error("Failed to connect: {0}")]
  Connect(#[from] sqlx::Error),

  #[error("Failed to run migrations: {0}")]
  Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Application state shared with the UI bridge
pub struct AppState {
  pub db: DbPool,
  pub config: AppConfig,
  pub catalog: &'static SplitCatalog,
}

/// Initialize the database connection pool and run migrations
pub async fn initialize_db(config: &AppConfig) -> Result<DbPool, DbError> {
  tracing::info!(url = %config.database_url, "Initializing database");

  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&config.database_url)
    .await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  tracing::info!("Database initialized successfully");

  Ok(pool)
}
