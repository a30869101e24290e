//! Progress record entity models (append-only).

use std::str::FromStr;

use riyaz_core::error::CoreError;
use riyaz_core::pitch::PitchSample;
use riyaz_core::stores::{ProgressRecord, ReferenceKind};
use riyaz_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// Database row for one scoring attempt. `reference_kind` is stored as
/// text and checked by a table constraint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProgressRecordRow {
    pub id: DbId,
    pub user_id: DbId,
    pub user_pitch_data: Json<Vec<PitchSample>>,
    pub reference_pitch_data: Json<Vec<PitchSample>>,
    pub reference_kind: String,
    pub reference_id: DbId,
    pub total_entries: i32,
    pub total_matches: i32,
    pub accuracy: String,
    pub created_at: Timestamp,
}

impl TryFrom<ProgressRecordRow> for ProgressRecord {
    type Error = CoreError;

    fn try_from(row: ProgressRecordRow) -> Result<Self, Self::Error> {
        Ok(ProgressRecord {
            id: row.id,
            user_id: row.user_id,
            user_pitch_data: row.user_pitch_data.0,
            reference_pitch_data: row.reference_pitch_data.0,
            reference_kind: ReferenceKind::from_str(&row.reference_kind)?,
            reference_id: row.reference_id,
            total_entries: row.total_entries,
            total_matches: row.total_matches,
            accuracy: row.accuracy,
            created_at: row.created_at,
        })
    }
}
