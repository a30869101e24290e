//! Recording entity models.

use riyaz_core::pitch::PitchSample;
use riyaz_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A full song performance with its extracted pitch sequence.
/// Immutable after upload.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Recording {
    pub id: DbId,
    pub user_id: DbId,
    pub file_name: String,
    /// Duration of the performance in seconds.
    pub duration_secs: f64,
    pub pitch_data: Json<Vec<PitchSample>>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new recording. The pitch sequence is already typed;
/// raw client blobs go through `riyaz_core::pitch::parse_pitch_data` first.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecording {
    pub user_id: DbId,
    pub file_name: String,
    pub duration_secs: f64,
    pub pitch_data: Vec<PitchSample>,
}
