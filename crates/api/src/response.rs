//! Shared response envelope for every endpoint.
//!
//! All responses use `{ "status": ..., "message": ..., "data"?: ... }`.
//! Success envelopes always carry `"Success"` in both text fields; error
//! envelopes carry a short status tag and a descriptive message and omit
//! `data`.

use serde::Serialize;

const SUCCESS: &str = "Success";

/// Standard `{ status, message, data? }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::success(items)))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: SUCCESS,
            message: SUCCESS.to_string(),
            data: Some(data),
        }
    }

    pub fn error(status: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: None,
        }
    }
}

/// Payload for endpoints that succeed without returning a record (`{}`).
#[derive(Debug, Default, Serialize)]
pub struct Empty {}
