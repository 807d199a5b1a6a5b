//! Route definitions for restaurants.

use axum::routing::get;
use axum::Router;

use crate::handlers::restaurant;
use crate::state::AppState;

/// Routes mounted at `/restaurants`.
///
/// Static segments (`/top-rated`, `/cuisines`, ...) win over `/{id}`.
///
/// ```text
/// GET    /                        -> list (filtered, paginated)
/// POST   /                        -> create
/// GET    /top-rated               -> top_rated
/// GET    /cuisines                -> cuisines
/// GET    /locations               -> locations
/// GET    /search                  -> search
/// GET    /cuisine/{cuisine}       -> by_cuisine
/// GET    /location/{location}     -> by_location
/// GET    /price/{price_range}     -> by_price_range
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(restaurant::list).post(restaurant::create))
        .route("/top-rated", get(restaurant::top_rated))
        .route("/cuisines", get(restaurant::cuisines))
        .route("/locations", get(restaurant::locations))
        .route("/search", get(restaurant::search))
        .route("/cuisine/{cuisine}", get(restaurant::by_cuisine))
        .route("/location/{location}", get(restaurant::by_location))
        .route("/price/{price_range}", get(restaurant::by_price_range))
        .route(
            "/{id}",
            get(restaurant::get_by_id)
                .put(restaurant::update)
                .delete(restaurant::delete),
        )
}
