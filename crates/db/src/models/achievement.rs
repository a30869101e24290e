//! Achievement entity model (append-only, unique per user and title).

use riyaz_core::stores::Achievement;
use riyaz_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Database row for one unlocked badge.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AchievementRow {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: String,
    pub achieved_at: Timestamp,
}

impl From<AchievementRow> for Achievement {
    fn from(row: AchievementRow) -> Self {
        Achievement {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            description: row.description,
            achieved_at: row.achieved_at,
        }
    }
}
