//! Repository for the `achievements` table (append-only).

use riyaz_core::types::DbId;
use sqlx::PgPool;

use crate::models::achievement::AchievementRow;

/// Column list for `achievements` queries.
const COLUMNS: &str = "id, user_id, title, description, achieved_at";

/// Provides unlock and read operations for achievement badges.
pub struct AchievementRepo;

impl AchievementRepo {
    /// Idempotent unlock, keyed on `uq_achievements_user_title`.
    /// Returns `true` when a new row was inserted; a duplicate race loses
    /// to the constraint and reports `false`.
    pub async fn unlock(
        pool: &PgPool,
        user_id: DbId,
        title: &str,
        description: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO achievements (user_id, title, description) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, title) DO NOTHING",
        )
        .bind(user_id)
        .bind(title)
        .bind(description)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether the user already holds a badge with this title.
    pub async fn exists(pool: &PgPool, user_id: DbId, title: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM achievements WHERE user_id = $1 AND title = $2)",
        )
        .bind(user_id)
        .bind(title)
        .fetch_one(pool)
        .await
    }

    /// All badges a user holds, newest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<AchievementRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM achievements \
             WHERE user_id = $1 \
             ORDER BY achieved_at DESC, id DESC"
        );
        sqlx::query_as::<_, AchievementRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
