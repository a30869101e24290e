//! Segment entity models.

use riyaz_core::pitch::PitchSample;
use riyaz_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named sub-range of a recording's timeline.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Segment {
    pub id: DbId,
    pub recording_id: DbId,
    pub user_id: DbId,
    pub name: String,
    /// Window start in seconds, inclusive.
    pub start_time: f64,
    /// Window end in seconds, inclusive.
    pub end_time: f64,
    pub created_at: Timestamp,
}

/// DTO for inserting a new segment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSegment {
    pub recording_id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub start_time: f64,
    pub end_time: f64,
}

/// DTO for patching a segment's name or window.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSegment {
    pub name: Option<String>,
    pub start_time: Option<f64>,
    pub end_time: Option<f64>,
}

/// A segment together with its effective pitch sequence: the recording's
/// samples filtered to the segment window.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentDetails {
    #[serde(flatten)]
    pub segment: Segment,
    pub pitch_data: Vec<PitchSample>,
}
