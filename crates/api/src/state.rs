/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup and cloned per request. The pool is the only
/// handle to the record store; there is no other shared mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: todolist_db::DbPool,
}
