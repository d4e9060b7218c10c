use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct EffortEntry {
  pub id: i64,
  pub logged_at: DateTime<Utc>,
  pub exercise: String,
  pub sets: i64,
  pub reps: i64,
  pub weight: f64,
  pub rpe: f64,
  pub notes: Option<String>,
  pub created_at: Option<DateTime<Utc>>,
}

/// For inserting new entries (without id, created_at)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEffortEntry {
  pub logged_at: DateTime<Utc>,
  pub exercise: String,
  pub sets: i64,
  pub reps: i64,
  pub weight: f64,
  pub rpe: f64,
  pub notes: Option<String>,
}
