pub mod health;
pub mod restaurant;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                          liveness + DB probe
///
/// /restaurants                                     list (paginated), create
/// /restaurants/top-rated                           top N by rating
/// /restaurants/cuisines                            distinct cuisines
/// /restaurants/locations                           distinct locations
/// /restaurants/search?q=                           name search
/// /restaurants/cuisine/{cuisine}                   by cuisine
/// /restaurants/location/{location}                 by location
/// /restaurants/price/{price_range}                 by exact price string
/// /restaurants/{id}                                get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/restaurants", restaurant::router())
}
