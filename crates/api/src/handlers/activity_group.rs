//! Handlers for the `/activity-groups` resource.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use todolist_core::fields::FieldSet;
use todolist_core::resource::{ActivityGroupField, ResourceField};
use todolist_db::models::activity_group::{
    ActivityGroup, CreateActivityGroup, UpdateActivityGroup,
};
use todolist_db::repositories::ActivityGroupRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonObject, RecordId};
use crate::response::{Empty, Envelope};
use crate::state::AppState;

const ENTITY: &str = ActivityGroupField::RESOURCE;

/// GET /activity-groups
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<Envelope<Vec<ActivityGroup>>>> {
    let groups = ActivityGroupRepo::list(&state.pool).await?;
    Ok(Json(Envelope::success(groups)))
}

/// GET /activity-groups/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<Envelope<ActivityGroup>>> {
    let group = ActivityGroupRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(Envelope::success(group)))
}

/// POST /activity-groups
///
/// Every field is required. Unrecognised keys in the body are ignored.
pub async fn create(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> AppResult<(StatusCode, Json<Envelope<ActivityGroup>>)> {
    let input = CreateActivityGroup::try_from(FieldSet::<ActivityGroupField>::complete(&body)?)?;
    let group = ActivityGroupRepo::create(&state.pool, &input).await?;

    tracing::info!(activity_group_id = group.id, "Activity group created");

    Ok((StatusCode::CREATED, Json(Envelope::success(group))))
}

/// PATCH /activity-groups/{id}
///
/// Validates every supplied field before writing any of them. An empty
/// object returns the stored record untouched.
pub async fn update(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    body: Bytes,
) -> AppResult<Json<Envelope<ActivityGroup>>> {
    let existing = ActivityGroupRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    let JsonObject(body) = JsonObject::from_bytes(&body)?;
    let changes = FieldSet::<ActivityGroupField>::partial(&body)?;
    if changes.is_empty() {
        return Ok(Json(Envelope::success(existing)));
    }

    let fields: Vec<_> = changes.fields().map(ActivityGroupField::name).collect();
    let group = ActivityGroupRepo::update(&state.pool, id, &UpdateActivityGroup::from(changes))
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(activity_group_id = id, ?fields, "Activity group updated");

    Ok(Json(Envelope::success(group)))
}

/// DELETE /activity-groups/{id}
pub async fn delete(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<Envelope<Empty>>> {
    ActivityGroupRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    if !ActivityGroupRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(activity_group_id = id, "Activity group deleted");

    Ok(Json(Envelope::success(Empty::default())))
}
