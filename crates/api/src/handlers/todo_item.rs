//! Handlers for the `/todo-items` resource.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use todolist_core::fields::FieldSet;
use todolist_core::resource::{ResourceField, TodoItemField};
use todolist_db::models::todo_item::{CreateTodoItem, TodoItem, UpdateTodoItem};
use todolist_db::repositories::TodoItemRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonObject, RecordId, TodoListQuery};
use crate::response::{Empty, Envelope};
use crate::state::AppState;

const ENTITY: &str = TodoItemField::RESOURCE;

/// GET /todo-items
///
/// With `?activity_group_id=N`, items belonging to group `N` are left out
/// of the result.
pub async fn list(
    State(state): State<AppState>,
    query: TodoListQuery,
) -> AppResult<Json<Envelope<Vec<TodoItem>>>> {
    let items = match query.excluded_group {
        Some(excluded) => TodoItemRepo::list_excluding_group(&state.pool, excluded).await?,
        None => TodoItemRepo::list(&state.pool).await?,
    };
    Ok(Json(Envelope::success(items)))
}

/// GET /todo-items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<Envelope<TodoItem>>> {
    let item = TodoItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(Envelope::success(item)))
}

/// POST /todo-items
///
/// Every field is required. The referenced activity group is not checked
/// for existence.
pub async fn create(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> AppResult<(StatusCode, Json<Envelope<TodoItem>>)> {
    let input = CreateTodoItem::try_from(FieldSet::<TodoItemField>::complete(&body)?)?;
    let item = TodoItemRepo::create(&state.pool, &input).await?;

    tracing::info!(
        todo_item_id = item.id,
        activity_group_id = item.activity_group_id,
        "Todo item created",
    );

    Ok((StatusCode::CREATED, Json(Envelope::success(item))))
}

/// PATCH /todo-items/{id}
///
/// Validates every supplied field before writing any of them. An empty
/// object returns the stored record untouched.
pub async fn update(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    body: Bytes,
) -> AppResult<Json<Envelope<TodoItem>>> {
    let existing = TodoItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    let JsonObject(body) = JsonObject::from_bytes(&body)?;
    let changes = FieldSet::<TodoItemField>::partial(&body)?;
    if changes.is_empty() {
        return Ok(Json(Envelope::success(existing)));
    }

    let fields: Vec<_> = changes.fields().map(TodoItemField::name).collect();
    let item = TodoItemRepo::update(&state.pool, id, &UpdateTodoItem::from(changes))
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(todo_item_id = id, ?fields, "Todo item updated");

    Ok(Json(Envelope::success(item)))
}

/// DELETE /todo-items/{id}
pub async fn delete(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<Envelope<Empty>>> {
    TodoItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    if !TodoItemRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(todo_item_id = id, "Todo item deleted");

    Ok(Json(Envelope::success(Empty::default())))
}
