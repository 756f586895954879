//! Repository for the `todo_items` table.

use sqlx::PgPool;
use todolist_core::types::DbId;

use crate::models::todo_item::{CreateTodoItem, TodoItem, UpdateTodoItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, activity_group_id, title, is_active, priority, created_at, updated_at";

/// Provides CRUD operations for todo items.
pub struct TodoItemRepo;

impl TodoItemRepo {
    /// Insert a new todo item, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTodoItem) -> Result<TodoItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO todo_items (activity_group_id, title, is_active, priority)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TodoItem>(&query)
            .bind(input.activity_group_id)
            .bind(&input.title)
            .bind(input.is_active)
            .bind(&input.priority)
            .fetch_one(pool)
            .await
    }

    /// Find a todo item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TodoItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todo_items WHERE id = $1");
        sqlx::query_as::<_, TodoItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all todo items in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<TodoItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todo_items ORDER BY id");
        sqlx::query_as::<_, TodoItem>(&query).fetch_all(pool).await
    }

    /// List todo items whose `activity_group_id` is *not* `excluded_group_id`.
    pub async fn list_excluding_group(
        pool: &PgPool,
        excluded_group_id: DbId,
    ) -> Result<Vec<TodoItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM todo_items WHERE activity_group_id <> $1 ORDER BY id"
        );
        sqlx::query_as::<_, TodoItem>(&query)
            .bind(excluded_group_id)
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
        input: &UpdateTodoItem,
    ) -> Result<Option<TodoItem>, sqlx::Error> {
        let query = format!(
            "UPDATE todo_items SET
                activity_group_id = COALESCE($2, activity_group_id),
                title = COALESCE($3, title),
                is_active = COALESCE($4, is_active),
                priority = COALESCE($5, priority),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TodoItem>(&query)
            .bind(id)
            .bind(input.activity_group_id)
            .bind(&input.title)
            .bind(input.is_active)
            .bind(&input.priority)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a todo item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todo_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
