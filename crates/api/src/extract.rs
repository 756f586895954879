//! Request extractors that report failures through the response envelope.
//!
//! Axum's stock `Path<i64>`, `Query<T>` and `Json<T>` extractors reject with
//! plain-text bodies. These wrappers map the same failures to
//! [`AppError::BadRequest`].

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use serde_json::{Map, Value};
use todolist_core::types::DbId;

use crate::error::AppError;
use crate::query::TodoListParams;

/// Record id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for RecordId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest("Invalid id".into()))?;

        raw.parse::<DbId>()
            .map(RecordId)
            .map_err(|_| AppError::BadRequest("Invalid id".into()))
    }
}

/// Request body decoded as a JSON object.
///
/// The `Content-Type` header is not checked. Anything that is not a JSON
/// object is rejected as an invalid request body.
#[derive(Debug, Clone)]
pub struct JsonObject(pub Map<String, Value>);

impl JsonObject {
    /// Decode raw body bytes. Used directly by handlers that must look the
    /// record up before the body is inspected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice::<Map<String, Value>>(bytes)
            .map(JsonObject)
            .map_err(|_| AppError::BadRequest("Invalid request body".into()))
    }
}

impl<S: Send + Sync> FromRequest<S> for JsonObject {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::BadRequest("Invalid request body".into()))?;

        Self::from_bytes(&bytes)
    }
}

/// Filter for `GET /todo-items`, parsed from [`TodoListParams`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TodoListQuery {
    /// Group whose items are left out of the listing.
    pub excluded_group: Option<DbId>,
}

impl<S: Send + Sync> FromRequestParts<S> for TodoListQuery {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let invalid = || AppError::BadRequest("Invalid activity_group_id".into());

        let Query(params) = Query::<TodoListParams>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid())?;

        let excluded_group = params
            .activity_group_id
            .map(|raw| raw.trim().parse::<DbId>())
            .transpose()
            .map_err(|_| invalid())?;

        Ok(Self { excluded_group })
    }
}
