//! RPE tracker commands

use chrono::Utc;

use crate::db::AppState;
use crate::effort_log::{add_entry, delete_entry, list_entries};
use crate::models::{EffortEntry, NewEffortEntry};

use super::parse_number;

/// Raw RPE tracker form. Numeric fields are text; the RPE comes from a picker.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct EffortForm {
  pub exercise: String,
  pub sets: String,
  pub reps: String,
  pub weight: String,
  pub rpe: f64,
  pub notes: Option<String>,
}

impl EffortForm {
  fn into_entry(self) -> Result<NewEffortEntry, String> {
    let missing = || "Fill in all required fields".to_string();

    Ok(NewEffortEntry {
      logged_at: Utc::now(),
      exercise: self.exercise,
      sets: self.sets.trim().parse().map_err(|_| missing())?,
      reps: self.reps.trim().parse().map_err(|_| missing())?,
      weight: parse_number(&self.weight).ok_or_else(missing)?,
      rpe: self.rpe,
      notes: self.notes,
    })
  }
}

pub async fn log_effort(state: &AppState, form: EffortForm) -> Result<EffortEntry, String> {
  let entry = form.into_entry()?;
  add_entry(&state.db, entry)
    .await
    .map_err(|e| format!("Failed to save entry: {}", e))
}

pub async fn get_effort_log(state: &AppState) -> Result<Vec<EffortEntry>, String> {
  list_entries(&state.db)
    .await
    .map_err(|e| format!("Failed to fetch entries: {}", e))
}

pub async fn remove_effort(state: &AppState, id: i64) -> Result<(), String> {
  delete_entry(&state.db, id)
    .await
    .map_err(|e| format!("Failed to delete entry: {}", e))
}
