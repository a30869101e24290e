//! PostgreSQL implementation of the core store contracts.

use async_trait::async_trait;
use chrono::NaiveDate;

use riyaz_core::achievement::Badge;
use riyaz_core::error::CoreError;
use riyaz_core::pitch::PitchSample;
use riyaz_core::stores::{
    Achievement, AchievementStore, NewProgressRecord, PitchSeriesStore, ProgressRecord,
    ProgressStore, SegmentWindow, StreakStore,
};
use riyaz_core::streak::{StreakState, StreakUpdate};
use riyaz_core::types::DbId;

use crate::repositories::{AchievementRepo, ProgressRepo, RecordingRepo, SegmentRepo, StreakRepo};
use crate::DbPool;

/// All four store contracts over one connection pool. Cheap to clone;
/// hand one to `riyaz_core::scoring::ScoringEngine` per concern.
#[derive(Clone)]
pub struct PgStores {
    pool: DbPool,
}

impl PgStores {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn persistence(err: sqlx::Error) -> CoreError {
    CoreError::Persistence(err.to_string())
}

#[async_trait]
impl PitchSeriesStore for PgStores {
    async fn recording_pitches(
        &self,
        recording_id: DbId,
    ) -> Result<Option<Vec<PitchSample>>, CoreError> {
        let recording = RecordingRepo::get(&self.pool, recording_id)
            .await
            .map_err(persistence)?;
        Ok(recording.map(|r| r.pitch_data.0))
    }

    async fn segment(&self, segment_id: DbId) -> Result<Option<SegmentWindow>, CoreError> {
        let segment = SegmentRepo::get(&self.pool, segment_id)
            .await
            .map_err(persistence)?;
        Ok(segment.map(|s| SegmentWindow {
            recording_id: s.recording_id,
            start_time: s.start_time,
            end_time: s.end_time,
        }))
    }
}

#[async_trait]
impl ProgressStore for PgStores {
    async fn append(&self, record: NewProgressRecord) -> Result<ProgressRecord, CoreError> {
        let row = ProgressRepo::insert(&self.pool, &record)
            .await
            .map_err(persistence)?;
        row.try_into()
    }

    async fn list_by_user(&self, user_id: DbId) -> Result<Vec<ProgressRecord>, CoreError> {
        let rows = ProgressRepo::list_by_user(&self.pool, user_id)
            .await
            .map_err(persistence)?;
        rows.into_iter().map(TryInto::try_into).collect()
    }
}

#[async_trait]
impl StreakStore for PgStores {
    async fn get(&self, user_id: DbId) -> Result<Option<StreakState>, CoreError> {
        let row = StreakRepo::get(&self.pool, user_id)
            .await
            .map_err(persistence)?;
        Ok(row.map(StreakState::from))
    }

    async fn advance(&self, user_id: DbId, today: NaiveDate) -> Result<StreakUpdate, CoreError> {
        StreakRepo::advance(&self.pool, user_id, today)
            .await
            .map_err(persistence)
    }
}

#[async_trait]
impl AchievementStore for PgStores {
    async fn unlock(
        &self,
        user_id: DbId,
        badge: Badge,
        description: &str,
    ) -> Result<bool, CoreError> {
        AchievementRepo::unlock(&self.pool, user_id, badge.title(), description)
            .await
            .map_err(persistence)
    }

    async fn exists(&self, user_id: DbId, title: &str) -> Result<bool, CoreError> {
        AchievementRepo::exists(&self.pool, user_id, title)
            .await
            .map_err(persistence)
    }

    async fn list_by_user(&self, user_id: DbId) -> Result<Vec<Achievement>, CoreError> {
        let rows = AchievementRepo::list_by_user(&self.pool, user_id)
            .await
            .map_err(persistence)?;
        Ok(rows.into_iter().map(Achievement::from).collect())
    }
}
