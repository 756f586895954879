pub mod activity_group;
pub mod health;
pub mod todo_item;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /activity-groups                list, create
/// /activity-groups/{id}           get, patch, delete
///
/// /todo-items                     list (?activity_group_id= excludes a group), create
/// /todo-items/{id}                get, patch, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/activity-groups", activity_group::router())
        .nest("/todo-items", todo_item::router())
}
