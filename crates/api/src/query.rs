//! Query parameter types for list endpoints.

use serde::Deserialize;

/// `GET /todo-items?activity_group_id=N`.
///
/// Kept as a raw string; [`TodoListQuery`](crate::extract::TodoListQuery)
/// parses it and reports failures in the response envelope.
#[derive(Debug, Deserialize)]
pub struct TodoListParams {
    pub activity_group_id: Option<String>,
}
