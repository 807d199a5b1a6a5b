//! Handlers for the `/restaurants` resource.
//!
//! Ids arrive as raw path strings and are parsed here so a malformed id gets
//! the same JSON 400 body as every other validation failure.
//!
//! `Query` and `Json` are taken as `Result<_, *Rejection>` and converted with
//! `?` through the `From` impls in [`crate::error`], so a bad query string or
//! body yields `{ error, code }` instead of axum's plain-text rejection.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use dinedir_core::error::CoreError;
use dinedir_core::listing::RestaurantFilter;
use dinedir_core::price::validate_price_range;
use dinedir_core::restaurant::{parse_id, validate_fields, ENTITY};
use dinedir_core::search::{
    clamp_limit, validate_search_query, DEFAULT_TOP_RATED_LIMIT, MAX_TOP_RATED_LIMIT,
};
use dinedir_core::types::DbId;
use dinedir_db::models::restaurant::{CreateRestaurant, UpdateRestaurant};
use dinedir_db::repositories::RestaurantRepo;

use crate::error::{AppError, AppResult};
use crate::query::{SearchParams, TopRatedParams};
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

// ---------------------------------------------------------------------------
// Listing and CRUD
// ---------------------------------------------------------------------------

/// GET /api/restaurants?cuisine=&location=&priceRange=&minRating=&maxRating=&page=&limit=
///
/// Filtered, paginated listing, newest first.
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<RestaurantFilter>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(filter) = query?;
    let filter = filter.resolve()?;
    let page = RestaurantRepo::list_paginated(&state.pool, &filter).await?;
    Ok(Json(page))
}

/// POST /api/restaurants
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateRestaurant>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;
    validate_fields(
        Some(input.name.as_str()),
        Some(input.rating),
        Some(input.price_range.as_str()),
    )?;
    let restaurant = RestaurantRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(restaurant)))
}

/// GET /api/restaurants/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;
    let restaurant = RestaurantRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(restaurant))
}

/// PUT /api/restaurants/{id}
///
/// Partial update; only fields present in the body are written.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<UpdateRestaurant>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;
    let Json(input) = body?;
    validate_fields(
        input.name.as_deref(),
        input.rating,
        input.price_range.as_deref(),
    )?;
    let restaurant = RestaurantRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(restaurant))
}

/// DELETE /api/restaurants/{id}
///
/// Issues the delete directly; zero affected rows is reported as 404.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id)?;
    if !RestaurantRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    Ok(Json(MessageResponse {
        message: "Restaurant deleted successfully",
    }))
}

// ---------------------------------------------------------------------------
// Secondary listings
// ---------------------------------------------------------------------------

/// GET /api/restaurants/cuisine/{cuisine}
pub async fn by_cuisine(
    State(state): State<AppState>,
    Path(cuisine): Path<String>,
) -> AppResult<impl IntoResponse> {
    let restaurants = RestaurantRepo::list_by_cuisine(&state.pool, &cuisine).await?;
    Ok(Json(restaurants))
}

/// GET /api/restaurants/location/{location}
pub async fn by_location(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> AppResult<impl IntoResponse> {
    let restaurants = RestaurantRepo::list_by_location(&state.pool, &location).await?;
    Ok(Json(restaurants))
}

/// GET /api/restaurants/price/{price_range}
///
/// Exact match on the stored string; no bucketing here.
pub async fn by_price_range(
    State(state): State<AppState>,
    Path(price_range): Path<String>,
) -> AppResult<impl IntoResponse> {
    validate_price_range(&price_range)?;
    let restaurants = RestaurantRepo::list_by_price_range(&state.pool, &price_range).await?;
    Ok(Json(restaurants))
}

/// GET /api/restaurants/top-rated?limit=5
pub async fn top_rated(
    State(state): State<AppState>,
    query: Result<Query<TopRatedParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = query?;
    let limit = clamp_limit(params.limit, DEFAULT_TOP_RATED_LIMIT, MAX_TOP_RATED_LIMIT);
    let restaurants = RestaurantRepo::top_rated(&state.pool, limit).await?;
    Ok(Json(restaurants))
}

/// GET /api/restaurants/cuisines
pub async fn cuisines(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(RestaurantRepo::distinct_cuisines(&state.pool).await?))
}

/// GET /api/restaurants/locations
pub async fn locations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(RestaurantRepo::distinct_locations(&state.pool).await?))
}

/// GET /api/restaurants/search?q=
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = query?;
    let term = validate_search_query(params.q.as_deref())?;
    let restaurants = RestaurantRepo::search_by_name(&state.pool, term).await?;
    Ok(Json(restaurants))
}
