//! Repository for the `streaks` table (one row per user).

use chrono::NaiveDate;
use riyaz_core::streak::{self, StreakState, StreakUpdate};
use riyaz_core::types::DbId;
use sqlx::PgPool;

use crate::models::streak::StreakRow;

/// Column list for `streaks` queries.
const COLUMNS: &str = "user_id, current_streak, longest_streak, last_practice_date, updated_at";

/// Provides read and advance operations for per-user streak state.
pub struct StreakRepo;

impl StreakRepo {
    /// Get a user's streak row.
    pub async fn get(pool: &PgPool, user_id: DbId) -> Result<Option<StreakRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM streaks WHERE user_id = $1");
        sqlx::query_as::<_, StreakRow>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Advance the streak for a scoring event on `today`.
    ///
    /// Runs inside a transaction holding the user's row lock
    /// (`SELECT .. FOR UPDATE`) so concurrent same-day events serialize;
    /// the loser re-reads the updated row and the same-day rule makes it a
    /// no-op rather than a double increment. Two concurrent first-ever
    /// events have no row to lock; `ON CONFLICT` collapses them to
    /// identical writes.
    pub async fn advance(
        pool: &PgPool,
        user_id: DbId,
        today: NaiveDate,
    ) -> Result<StreakUpdate, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM streaks WHERE user_id = $1 FOR UPDATE");
        let existing = sqlx::query_as::<_, StreakRow>(&query)
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;

        let update = streak::advance(existing.map(StreakState::from), today);

        sqlx::query(
            "INSERT INTO streaks (user_id, current_streak, longest_streak, last_practice_date) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (user_id) DO UPDATE SET \
                 current_streak = EXCLUDED.current_streak, \
                 longest_streak = EXCLUDED.longest_streak, \
                 last_practice_date = EXCLUDED.last_practice_date, \
                 updated_at = NOW()",
        )
        .bind(user_id)
        .bind(update.state.current_streak)
        .bind(update.state.longest_streak)
        .bind(update.state.last_practice_date)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(update)
    }
}
