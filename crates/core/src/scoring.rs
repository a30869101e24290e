//! The scoring pipeline: one entry point combining the accuracy scorer,
//! streak tracker, achievement evaluator, and suggestion generator.
//!
//! Steps run sequentially: resolve the reference, score, persist the
//! progress record, advance the streak, evaluate achievements, generate
//! suggestions. A failure surfaces for that request without rolling back
//! earlier persisted effects; achievement persistence failures degrade to
//! a log line instead of failing the response.

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::accuracy;
use crate::achievement;
use crate::error::CoreError;
use crate::pitch::{self, PitchSample};
use crate::stores::{
    AchievementStore, NewProgressRecord, PitchSeriesStore, ProgressRecord, ProgressStore,
    ReferenceKind, StreakStore,
};
use crate::suggestion;
use crate::types::DbId;

/// The reference a submission is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTarget {
    /// A whole recording's pitch sequence.
    Recording(DbId),
    /// A segment: its recording's sequence filtered to the segment window.
    Segment(DbId),
}

/// Aggregate response of one scoring request.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ScoreOutcome {
    pub record: ProgressRecord,
    pub suggestions: Vec<String>,
}

/// Orchestrates one scoring request end to end over the store contracts.
pub struct ScoringEngine<P, R, S, A> {
    pitch_series: P,
    progress: R,
    streaks: S,
    achievements: A,
}

impl<P, R, S, A> ScoringEngine<P, R, S, A>
where
    P: PitchSeriesStore,
    R: ProgressStore,
    S: StreakStore,
    A: AchievementStore,
{
    pub fn new(pitch_series: P, progress: R, streaks: S, achievements: A) -> Self {
        Self {
            pitch_series,
            progress,
            streaks,
            achievements,
        }
    }

    /// Score a submission against `target`, crediting the host's current
    /// calendar day.
    pub async fn submit_comparison(
        &self,
        target: ScoreTarget,
        user_id: DbId,
        user_pitch: Vec<PitchSample>,
    ) -> Result<ScoreOutcome, CoreError> {
        self.submit_comparison_on(target, user_id, user_pitch, Local::now().date_naive())
            .await
    }

    /// Date-explicit variant of [`Self::submit_comparison`]; the streak
    /// rules key off `today`.
    pub async fn submit_comparison_on(
        &self,
        target: ScoreTarget,
        user_id: DbId,
        user_pitch: Vec<PitchSample>,
        today: NaiveDate,
    ) -> Result<ScoreOutcome, CoreError> {
        pitch::validate_samples(&user_pitch)?;
        let (reference_kind, reference_id, reference_pitch) =
            self.resolve_reference(target).await?;

        let report = accuracy::score(&reference_pitch, &user_pitch)?;

        let record = self
            .progress
            .append(NewProgressRecord {
                user_id,
                user_pitch_data: user_pitch,
                reference_pitch_data: reference_pitch,
                reference_kind,
                reference_id,
                total_entries: report.total_entries,
                total_matches: report.total_matches,
                accuracy: report.formatted(),
            })
            .await?;

        let streak = self.streaks.advance(user_id, today).await?;
        info!(
            user_id,
            current = streak.state.current_streak,
            change = ?streak.change,
            "streak advanced"
        );

        // Unlock failures degrade: log and keep the response intact.
        for badge in achievement::evaluate(report.accuracy, &streak) {
            let description = badge.description(streak.state.current_streak);
            match self.achievements.unlock(user_id, badge, &description).await {
                Ok(true) => info!(user_id, badge = badge.title(), "achievement unlocked"),
                Ok(false) => {}
                Err(err) => warn!(
                    user_id,
                    badge = badge.title(),
                    error = %err,
                    "achievement unlock failed"
                ),
            }
        }

        let suggestions = suggestion::generate(
            report.accuracy,
            &streak,
            &record.user_pitch_data,
            &record.reference_pitch_data,
        );

        Ok(ScoreOutcome {
            record,
            suggestions,
        })
    }

    async fn resolve_reference(
        &self,
        target: ScoreTarget,
    ) -> Result<(ReferenceKind, DbId, Vec<PitchSample>), CoreError> {
        match target {
            ScoreTarget::Recording(id) => {
                let pitches = self
                    .pitch_series
                    .recording_pitches(id)
                    .await?
                    .ok_or(CoreError::NotFound {
                        entity: "recording",
                        id,
                    })?;
                Ok((ReferenceKind::Recording, id, pitches))
            }
            ScoreTarget::Segment(id) => {
                let window = self
                    .pitch_series
                    .segment(id)
                    .await?
                    .ok_or(CoreError::NotFound {
                        entity: "segment",
                        id,
                    })?;
                let pitches = self
                    .pitch_series
                    .recording_pitches(window.recording_id)
                    .await?
                    .ok_or(CoreError::NotFound {
                        entity: "recording",
                        id: window.recording_id,
                    })?;
                let filtered =
                    pitch::filter_window(&pitches, window.start_time, window.end_time);
                Ok((ReferenceKind::Segment, id, filtered))
            }
        }
    }
}
