//! Route definitions for the `/todo-items` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::todo_item;
use crate::state::AppState;

/// Routes mounted at `/todo-items`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(todo_item::list).post(todo_item::create))
        .route(
            "/{id}",
            get(todo_item::get_by_id)
                .patch(todo_item::update)
                .delete(todo_item::delete),
        )
}
