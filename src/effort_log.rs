//! Persisted RPE log
//!
//! Backs the RPE tracker screen: each entry is one exercise with its sets,
//! reps, load and how hard the last set felt.

use sqlx::SqlitePool;

use crate::models::{EffortEntry, NewEffortEntry};

const RPE_FLOOR: f64 = 1.0;
const RPE_CEILING: f64 = 10.0;

// ---------------------------------------------------------------------------
/// Error Handling
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum EffortLogError {
    #[error("Invalid entry: {0}")]
    Invalid(String),

    #[error("Effort entry {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl serde::Serialize for EffortLogError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

// ---------------------------------------------------------------------------
/// Validation
// ---------------------------------------------------------------------------

impl NewEffortEntry {
    /// Every field the form marks as required must be present and positive
    pub fn validate(&self) -> Result<(), EffortLogError> {
        if self.exercise.trim().is_empty() {
            return Err(EffortLogError::Invalid("exercise is required".into()));
        }
        if self.sets <= 0 {
            return Err(EffortLogError::Invalid("sets must be positive".into()));
        }
        if self.reps <= 0 {
            return Err(EffortLogError::Invalid("reps must be positive".into()));
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(EffortLogError::Invalid("weight must be positive".into()));
        }
        if !(RPE_FLOOR..=RPE_CEILING).contains(&self.rpe) {
            return Err(EffortLogError::Invalid(format!(
                "rpe must be between {} and {}",
                RPE_FLOOR, RPE_CEILING
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
/// Database Operations
// ---------------------------------------------------------------------------

pub async fn add_entry(pool: &SqlitePool, entry: NewEffortEntry) -> Result<EffortEntry, EffortLogError> {
    entry.validate()?;

    let notes = entry
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string);

    let result = sqlx::query(
        r#"
        INSERT INTO effort_log (logged_at, exercise, sets, reps, weight, rpe, notes)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
    )
    .bind(entry.logged_at)
    .bind(entry.exercise.trim())
    .bind(entry.sets)
    .bind(entry.reps)
    .bind(entry.weight)
    .bind(entry.rpe)
    .bind(notes)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    tracing::info!(id, exercise = %entry.exercise.trim(), rpe = entry.rpe, "effort entry logged");

    load_entry(pool, id).await
}

pub async fn load_entry(pool: &SqlitePool, id: i64) -> Result<EffortEntry, EffortLogError> {
    sqlx::query_as::<_, EffortEntry>("SELECT * FROM effort_log WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(EffortLogError::NotFound(id))
}

/// All entries, newest first
pub async fn list_entries(pool: &SqlitePool) -> Result<Vec<EffortEntry>, EffortLogError> {
    let entries = sqlx::query_as::<_, EffortEntry>(
        "SELECT * FROM effort_log ORDER BY logged_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

pub async fn delete_entry(pool: &SqlitePool, id: i64) -> Result<(), EffortLogError> {
    let result = sqlx::query("DELETE FROM effort_log WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(EffortLogError::NotFound(id));
    }

    tracing::info!(id, "effort entry deleted");
    Ok(())
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_new_entry, setup_test_db, teardown_test_db};
    use chrono::{Duration, Utc};

    #[test]
    fn test_validate_requires_fields() {
        let mut entry = make_new_entry("Bench Press", 8.0);
        assert!(entry.validate().is_ok());

        entry.exercise = "  ".to_string();
        assert!(matches!(entry.validate(), Err(EffortLogError::Invalid(_))));

        let mut entry = make_new_entry("Squat", 8.0);
        entry.sets = 0;
        assert!(entry.validate().is_err());

        let mut entry = make_new_entry("Squat", 8.0);
        entry.weight = -10.0;
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_validate_rpe_range() {
        assert!(make_new_entry("Deadlift", 10.0).validate().is_ok());
        assert!(make_new_entry("Deadlift", 1.0).validate().is_ok());
        assert!(make_new_entry("Deadlift", 10.5).validate().is_err());
        assert!(make_new_entry("Deadlift", 0.0).validate().is_err());
    }

    #[tokio::test]
    async fn test_add_and_list_newest_first() {
        // Arrange
        let pool = setup_test_db().await;

        let mut older = make_new_entry("Squat", 9.0);
        older.logged_at = Utc::now() - Duration::days(2);
        let newer = make_new_entry("Bench Press", 8.5);

        // Act
        let first = add_entry(&pool, older).await.expect("Should add older entry");
        let second = add_entry(&pool, newer).await.expect("Should add newer entry");
        let entries = list_entries(&pool).await.expect("Should list entries");

        // Assert
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, second.id);
        assert_eq!(entries[1].id, first.id);
        assert_eq!(entries[0].exercise, "Bench Press");
        assert_eq!(entries[0].rpe, 8.5);

        teardown_test_db(pool).await;
    }

    #[tokio::test]
    async fn test_blank_notes_are_dropped() {
        let pool = setup_test_db().await;

        let mut entry = make_new_entry("Overhead Press", 7.0);
        entry.notes = Some("   ".to_string());
        let saved = add_entry(&pool, entry).await.expect("Should add entry");
        assert_eq!(saved.notes, None);

        let mut entry = make_new_entry("Overhead Press", 7.5);
        entry.notes = Some(" last set was a grind ".to_string());
        let saved = add_entry(&pool, entry).await.expect("Should add entry");
        assert_eq!(saved.notes.as_deref(), Some("last set was a grind"));

        teardown_test_db(pool).await;
    }

    #[tokio::test]
    async fn test_invalid_entry_not_persisted() {
        let pool = setup_test_db().await;

        let result = add_entry(&pool, make_new_entry("", 8.0)).await;
        assert!(matches!(result, Err(EffortLogError::Invalid(_))));
        assert!(list_entries(&pool).await.unwrap().is_empty());

        teardown_test_db(pool).await;
    }

    #[tokio::test]
    async fn test_delete_entry() {
        let pool = setup_test_db().await;
        let saved = add_entry(&pool, make_new_entry("Pull-ups", 8.0))
            .await
            .expect("Should add entry");

        delete_entry(&pool, saved.id).await.expect("Should delete");
        assert!(list_entries(&pool).await.unwrap().is_empty());

        // Second delete has nothing to remove
        let result = delete_entry(&pool, saved.id).await;
        assert!(matches!(result, Err(EffortLogError::NotFound(id)) if id == saved.id));

        teardown_test_db(pool).await;
    }
}
