//! Query parameter types for the secondary restaurant endpoints.
//!
//! The main listing deserializes straight into
//! [`dinedir_core::listing::RestaurantFilter`].

use serde::Deserialize;

/// `?limit=` for `GET /restaurants/top-rated`. Clamped in the handler.
#[derive(Debug, Deserialize)]
pub struct TopRatedParams {
    pub limit: Option<i64>,
}

/// `?q=` for `GET /restaurants/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}
