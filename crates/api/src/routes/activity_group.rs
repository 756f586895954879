//! Route definitions for the `/activity-groups` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::activity_group;
use crate::state::AppState;

/// Routes mounted at `/activity-groups`.
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
        .route("/", get(activity_group::list).post(activity_group::create))
        .route(
            "/{id}",
            get(activity_group::get_by_id)
                .patch(activity_group::update)
                .delete(activity_group::delete),
        )
}
