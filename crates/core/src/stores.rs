//! Store contracts the scoring engine runs against.
//!
//! The engine owns no durable state; everything persistent lives behind
//! these traits. `riyaz-db` implements them over PostgreSQL, tests use
//! in-memory ones. All methods map backend failures to
//! [`CoreError::Persistence`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::achievement::Badge;
use crate::error::CoreError;
use crate::pitch::PitchSample;
use crate::streak::{StreakState, StreakUpdate};
use crate::types::{DbId, Timestamp};

/// What a scoring attempt was scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    Recording,
    Segment,
}

impl ReferenceKind {
    /// Stable string form used in persistence.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recording => "recording",
            Self::Segment => "segment",
        }
    }
}

impl std::str::FromStr for ReferenceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recording" => Ok(Self::Recording),
            "segment" => Ok(Self::Segment),
            other => Err(CoreError::Validation(format!(
                "unknown reference kind: {other}"
            ))),
        }
    }
}

/// A segment's window over its recording's timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentWindow {
    pub recording_id: DbId,
    pub start_time: f64,
    pub end_time: f64,
}

/// One persisted scoring attempt. Append-only audit trail; rows are never
/// mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressRecord {
    pub id: DbId,
    pub user_id: DbId,
    /// The submitted sequence, exactly as scored.
    pub user_pitch_data: Vec<PitchSample>,
    /// Snapshot of the reference at scoring time; later edits to the
    /// recording do not rewrite history.
    pub reference_pitch_data: Vec<PitchSample>,
    pub reference_kind: ReferenceKind,
    pub reference_id: DbId,
    pub total_entries: i32,
    pub total_matches: i32,
    /// Two-decimal percentage string, e.g. `"87.50%"`.
    pub accuracy: String,
    pub created_at: Timestamp,
}

/// Fields for appending a new progress record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProgressRecord {
    pub user_id: DbId,
    pub user_pitch_data: Vec<PitchSample>,
    pub reference_pitch_data: Vec<PitchSample>,
    pub reference_kind: ReferenceKind,
    pub reference_id: DbId,
    pub total_entries: i32,
    pub total_matches: i32,
    pub accuracy: String,
}

/// A granted achievement badge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: String,
    pub achieved_at: Timestamp,
}

/// Read access to reference pitch sequences (recordings and segments).
#[async_trait]
pub trait PitchSeriesStore {
    /// Full pitch sequence of a recording, or `None` if it does not exist.
    async fn recording_pitches(
        &self,
        recording_id: DbId,
    ) -> Result<Option<Vec<PitchSample>>, CoreError>;

    /// A segment's window, or `None` if it does not exist.
    async fn segment(&self, segment_id: DbId) -> Result<Option<SegmentWindow>, CoreError>;
}

/// Append-only log of scoring attempts.
#[async_trait]
pub trait ProgressStore {
    async fn append(&self, record: NewProgressRecord) -> Result<ProgressRecord, CoreError>;

    /// All attempts for a user, newest first.
    async fn list_by_user(&self, user_id: DbId) -> Result<Vec<ProgressRecord>, CoreError>;
}

/// Per-user streak state.
#[async_trait]
pub trait StreakStore {
    async fn get(&self, user_id: DbId) -> Result<Option<StreakState>, CoreError>;

    /// Atomically apply [`crate::streak::advance`] for one scoring event.
    ///
    /// Implementations must serialize concurrent calls per user so two
    /// same-day requests cannot both increment; the same-day rule turns
    /// the loser into a no-op instead.
    async fn advance(&self, user_id: DbId, today: NaiveDate) -> Result<StreakUpdate, CoreError>;
}

/// Unlocked achievement badges, at most one row per (user, title).
#[async_trait]
pub trait AchievementStore {
    /// Persist an unlock. Returns `false` when the user already holds the
    /// badge; duplicate races must collapse to a single row.
    async fn unlock(
        &self,
        user_id: DbId,
        badge: Badge,
        description: &str,
    ) -> Result<bool, CoreError>;

    async fn exists(&self, user_id: DbId, title: &str) -> Result<bool, CoreError>;

    /// All badges a user holds, newest first.
    async fn list_by_user(&self, user_id: DbId) -> Result<Vec<Achievement>, CoreError>;
}

#[async_trait]
impl<T: PitchSeriesStore + Send + Sync + ?Sized> PitchSeriesStore for Arc<T> {
    async fn recording_pitches(
        &self,
        recording_id: DbId,
    ) -> Result<Option<Vec<PitchSample>>, CoreError> {
        (**self).recording_pitches(recording_id).await
    }

    async fn segment(&self, segment_id: DbId) -> Result<Option<SegmentWindow>, CoreError> {
        (**self).segment(segment_id).await
    }
}

#[async_trait]
impl<T: ProgressStore + Send + Sync + ?Sized> ProgressStore for Arc<T> {
    async fn append(&self, record: NewProgressRecord) -> Result<ProgressRecord, CoreError> {
        (**self).append(record).await
    }

    async fn list_by_user(&self, user_id: DbId) -> Result<Vec<ProgressRecord>, CoreError> {
        (**self).list_by_user(user_id).await
    }
}

#[async_trait]
impl<T: StreakStore + Send + Sync + ?Sized> StreakStore for Arc<T> {
    async fn get(&self, user_id: DbId) -> Result<Option<StreakState>, CoreError> {
        (**self).get(user_id).await
    }

    async fn advance(&self, user_id: DbId, today: NaiveDate) -> Result<StreakUpdate, CoreError> {
        (**self).advance(user_id, today).await
    }
}

#[async_trait]
impl<T: AchievementStore + Send + Sync + ?Sized> AchievementStore for Arc<T> {
    async fn unlock(
        &self,
        user_id: DbId,
        badge: Badge,
        description: &str,
    ) -> Result<bool, CoreError> {
        (**self).unlock(user_id, badge, description).await
    }

    async fn exists(&self, user_id: DbId, title: &str) -> Result<bool, CoreError> {
        (**self).exists(user_id, title).await
    }

    async fn list_by_user(&self, user_id: DbId) -> Result<Vec<Achievement>, CoreError> {
        (**self).list_by_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn reference_kind_round_trips() {
        assert_eq!(
            ReferenceKind::from_str(ReferenceKind::Recording.as_str()).unwrap(),
            ReferenceKind::Recording
        );
        assert_eq!(
            ReferenceKind::from_str(ReferenceKind::Segment.as_str()).unwrap(),
            ReferenceKind::Segment
        );
    }

    #[test]
    fn unknown_reference_kind_is_rejected() {
        assert_matches!(
            ReferenceKind::from_str("playlist"),
            Err(CoreError::Validation(_))
        );
    }
}
