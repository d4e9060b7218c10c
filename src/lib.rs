pub mod commands;
pub mod config;
pub mod db;
pub mod effort;
pub mod effort_log;
pub mod logging;
pub mod models;
pub mod plates;
pub mod splits;
pub mod strength;
pub mod weight_cut;

#[cfg(test)]
mod test_utils;

use config::{AppConfig, ConfigError};
use db::{AppState, DbError};
use splits::{CatalogError, SplitCatalog};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error(transparent)]
  Database(#[from] DbError),

  #[error(transparent)]
  Catalog(#[from] CatalogError),
}

/// Build the shared state the app shell holds for the lifetime of the process
pub async fn bootstrap() -> Result<Arc<AppState>, StartupError> {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let config = AppConfig::from_env()?;
  logging::init(&config.log_level);

  let catalog = SplitCatalog::embedded()?;
  let db = db::initialize_db(&config).await?;

  tracing::info!(unit = config.unit.as_str(), "lift tools ready");

  Ok(Arc::new(AppState { db, config, catalog }))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_bootstrap_rejects_bad_config() {
    let result = temp_env::async_with_vars([("LIFT_TOOLS_UNIT", Some("stone"))], bootstrap()).await;
    assert!(matches!(result, Err(StartupError::Config(_))));
  }
}
