//! Repository for the `activity_groups` table.

use sqlx::PgPool;
use todolist_core::types::DbId;

use crate::models::activity_group::{ActivityGroup, CreateActivityGroup, UpdateActivityGroup};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, email, created_at, updated_at";

/// Provides CRUD operations for activity groups.
pub struct ActivityGroupRepo;

impl ActivityGroupRepo {
    /// Insert a new activity group, returning the created row.
    ///
    /// Both timestamps come from the same `NOW()`, so they are equal.
    pub async fn create(
        pool: &PgPool,
        input: &CreateActivityGroup,
    ) -> Result<ActivityGroup, sqlx::Error> {
        let query = format!(
            "INSERT INTO activity_groups (title, email)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActivityGroup>(&query)
            .bind(&input.title)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find an activity group by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ActivityGroup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activity_groups WHERE id = $1");
        sqlx::query_as::<_, ActivityGroup>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all activity groups in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ActivityGroup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activity_groups ORDER BY id");
        sqlx::query_as::<_, ActivityGroup>(&query)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update in a single statement and refresh `updated_at`.
    ///
    /// Only non-`None` fields in `input` are written. Returns `None` if no
    /// row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateActivityGroup,
    ) -> Result<Option<ActivityGroup>, sqlx::Error> {
        let query = format!(
            "UPDATE activity_groups SET
                title = COALESCE($2, title),
                email = COALESCE($3, email),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActivityGroup>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.email)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an activity group. Returns `true` if a row was removed.
    ///
    /// Todo items referencing the group are left in place.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM activity_groups WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
