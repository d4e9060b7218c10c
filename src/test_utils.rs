//! Test utilities and helpers
//!
//! - In-memory database setup/teardown
//! - Effort entry factories
//! - A ready `AppState` for command tests

use crate::config::AppConfig;
use crate::db::AppState;
use crate::models::NewEffortEntry;
use crate::splits::SplitCatalog;
use chrono::Utc;
use sqlx::SqlitePool;

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) so every query sees the same in-memory database
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

pub async fn setup_test_state() -> AppState {
  AppState {
    db: setup_test_db().await,
    config: AppConfig {
      database_url: "sqlite::memory:".to_string(),
      ..AppConfig::default()
    },
    catalog: SplitCatalog::embedded().expect("Embedded catalog should load"),
  }
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// A valid entry: 4x6 at 100kg, logged now
pub fn make_new_entry(exercise: &str, rpe: f64) -> NewEffortEntry {
  NewEffortEntry {
    logged_at: Utc::now(),
    exercise: exercise.to_string(),
    sets: 4,
    reps: 6,
    weight: 100.0,
    rpe,
    notes: None,
  }
}
