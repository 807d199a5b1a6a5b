/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the pool is reference-counted internally. Handlers and
/// repositories receive the pool from here rather than from a global.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: dinedir_db::DbPool,
}
