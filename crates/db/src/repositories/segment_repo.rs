//! Repository for the `segments` table.

use riyaz_core::pitch;
use riyaz_core::types::DbId;
use sqlx::PgPool;

use crate::models::segment::{CreateSegment, Segment, SegmentDetails, UpdateSegment};
use crate::repositories::RecordingRepo;

/// Column list for `segments` queries.
const COLUMNS: &str = "id, recording_id, user_id, name, start_time, end_time, created_at";

/// Provides query operations for recording segments.
pub struct SegmentRepo;

impl SegmentRepo {
    /// Insert a new segment.
    pub async fn insert(pool: &PgPool, input: &CreateSegment) -> Result<Segment, sqlx::Error> {
        let query = format!(
            "INSERT INTO segments (recording_id, user_id, name, start_time, end_time) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Segment>(&query)
            .bind(input.recording_id)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(input.start_time)
            .bind(input.end_time)
            .fetch_one(pool)
            .await
    }

    /// Get a segment by id.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Option<Segment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM segments WHERE id = $1");
        sqlx::query_as::<_, Segment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Patch a segment's name or window; absent fields keep their value.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSegment,
    ) -> Result<Option<Segment>, sqlx::Error> {
        let query = format!(
            "UPDATE segments SET \
                 name = COALESCE($2, name), \
                 start_time = COALESCE($3, start_time), \
                 end_time = COALESCE($4, end_time) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Segment>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.start_time)
            .bind(input.end_time)
            .fetch_optional(pool)
            .await
    }

    /// All of a user's segments over one recording.
    pub async fn list_for_recording(
        pool: &PgPool,
        user_id: DbId,
        recording_id: DbId,
    ) -> Result<Vec<Segment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM segments \
             WHERE user_id = $1 AND recording_id = $2 \
             ORDER BY start_time ASC, id ASC"
        );
        sqlx::query_as::<_, Segment>(&query)
            .bind(user_id)
            .bind(recording_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a segment. Returns `false` when no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM segments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// A segment together with its effective pitch sequence: the owning
    /// recording's samples filtered to the segment window. `None` when the
    /// segment (or, despite the FK, its recording) is missing.
    pub async fn get_details(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SegmentDetails>, sqlx::Error> {
        let Some(segment) = Self::get(pool, id).await? else {
            return Ok(None);
        };
        let Some(recording) = RecordingRepo::get(pool, segment.recording_id).await? else {
            return Ok(None);
        };
        let pitch_data =
            pitch::filter_window(&recording.pitch_data.0, segment.start_time, segment.end_time);
        Ok(Some(SegmentDetails {
            segment,
            pitch_data,
        }))
    }
}
