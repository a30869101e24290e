//! Repository for the `recordings` table.

use riyaz_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::recording::{CreateRecording, Recording};

/// Column list for `recordings` queries.
const COLUMNS: &str = "id, user_id, file_name, duration_secs, pitch_data, created_at";

/// Provides query operations for uploaded recordings.
pub struct RecordingRepo;

impl RecordingRepo {
    /// Insert a new recording with its full pitch sequence.
    pub async fn insert(pool: &PgPool, input: &CreateRecording) -> Result<Recording, sqlx::Error> {
        let query = format!(
            "INSERT INTO recordings (user_id, file_name, duration_secs, pitch_data) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Recording>(&query)
            .bind(input.user_id)
            .bind(&input.file_name)
            .bind(input.duration_secs)
            .bind(Json(&input.pitch_data))
            .fetch_one(pool)
            .await
    }

    /// Get a recording by id.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Option<Recording>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recordings WHERE id = $1");
        sqlx::query_as::<_, Recording>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All recordings owned by a user, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Recording>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM recordings WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Recording>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a recording. Returns `false` when no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recordings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
