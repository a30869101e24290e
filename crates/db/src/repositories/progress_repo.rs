//! Repository for the `progress_records` table (append-only).

use riyaz_core::stores::NewProgressRecord;
use riyaz_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::progress_record::ProgressRecordRow;

/// Column list for `progress_records` queries.
const COLUMNS: &str = "\
    id, user_id, user_pitch_data, reference_pitch_data, \
    reference_kind, reference_id, total_entries, total_matches, \
    accuracy, created_at";

/// Provides append and read operations for the scoring audit trail.
/// Rows are never updated or deleted.
pub struct ProgressRepo;

impl ProgressRepo {
    /// Append one scoring attempt.
    pub async fn insert(
        pool: &PgPool,
        record: &NewProgressRecord,
    ) -> Result<ProgressRecordRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO progress_records \
                 (user_id, user_pitch_data, reference_pitch_data, \
                  reference_kind, reference_id, total_entries, total_matches, accuracy) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProgressRecordRow>(&query)
            .bind(record.user_id)
            .bind(Json(&record.user_pitch_data))
            .bind(Json(&record.reference_pitch_data))
            .bind(record.reference_kind.as_str())
            .bind(record.reference_id)
            .bind(record.total_entries)
            .bind(record.total_matches)
            .bind(&record.accuracy)
            .fetch_one(pool)
            .await
    }

    /// A user's full attempt history, newest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ProgressRecordRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM progress_records WHERE user_id = $1 ORDER BY id DESC"
        );
        sqlx::query_as::<_, ProgressRecordRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
