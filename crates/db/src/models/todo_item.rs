//! Todo item entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use todolist_core::fields::FieldSet;
use todolist_core::resource::TodoItemField;
use todolist_core::types::{DbId, Timestamp};
use todolist_core::validation::ValidationError;

/// A row from the `todo_items` table.
///
/// `activity_group_id` is not enforced as a foreign key; it may reference a
/// group that no longer exists.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct TodoItem {
    pub id: DbId,
    pub activity_group_id: DbId,
    pub title: String,
    pub is_active: bool,
    pub priority: String,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
    #[serde(rename = "updatedAt")]
    pub updated_at: Timestamp,
}

/// DTO for creating a new todo item.
#[derive(Debug, Clone)]
pub struct CreateTodoItem {
    pub activity_group_id: DbId,
    pub title: String,
    pub is_active: bool,
    pub priority: String,
}

impl TryFrom<FieldSet<TodoItemField>> for CreateTodoItem {
    type Error = ValidationError;

    fn try_from(mut set: FieldSet<TodoItemField>) -> Result<Self, Self::Error> {
        Ok(Self {
            activity_group_id: set.require_id(TodoItemField::ActivityGroupId)?,
            title: set.require_text(TodoItemField::Title)?,
            is_active: set.require_flag(TodoItemField::IsActive)?,
            priority: set.require_text(TodoItemField::Priority)?,
        })
    }
}

/// DTO for a partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateTodoItem {
    pub activity_group_id: Option<DbId>,
    pub title: Option<String>,
    pub is_active: Option<bool>,
    pub priority: Option<String>,
}

impl From<FieldSet<TodoItemField>> for UpdateTodoItem {
    fn from(mut set: FieldSet<TodoItemField>) -> Self {
        Self {
            activity_group_id: set.take_id(TodoItemField::ActivityGroupId),
            title: set.take_text(TodoItemField::Title),
            is_active: set.take_flag(TodoItemField::IsActive),
            priority: set.take_text(TodoItemField::Priority),
        }
    }
}
