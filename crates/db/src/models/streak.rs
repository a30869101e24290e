//! Streak entity model (one row per user).

use chrono::NaiveDate;
use riyaz_core::streak::StreakState;
use riyaz_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Database row backing a user's [`StreakState`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StreakRow {
    pub user_id: DbId,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub last_practice_date: NaiveDate,
    pub updated_at: Timestamp,
}

impl From<StreakRow> for StreakState {
    fn from(row: StreakRow) -> Self {
        StreakState {
            current_streak: row.current_streak,
            longest_streak: row.longest_streak,
            last_practice_date: row.last_practice_date,
        }
    }
}
