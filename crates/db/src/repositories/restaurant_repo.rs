//! Repository for the `restaurants` table.

use dinedir_core::listing::{Pagination, ResolvedFilter};
use dinedir_core::search::contains_pattern;
use dinedir_core::types::DbId;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::restaurant::{CreateRestaurant, Restaurant, RestaurantPage, UpdateRestaurant};
use crate::predicate::RestaurantPredicate;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, cuisine, image_url, location, rating, description, \
    price_range, created_at, updated_at";

/// Provides CRUD and listing operations for restaurants.
pub struct RestaurantRepo;

impl RestaurantRepo {
    /// Insert a new restaurant, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRestaurant,
    ) -> Result<Restaurant, sqlx::Error> {
        let query = format!(
            "INSERT INTO restaurants \
                (name, cuisine, image_url, location, rating, description, price_range) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        let restaurant = sqlx::query_as::<_, Restaurant>(&query)
            .bind(&input.name)
            .bind(&input.cuisine)
            .bind(&input.image_url)
            .bind(&input.location)
            .bind(input.rating)
            .bind(&input.description)
            .bind(&input.price_range)
            .fetch_one(pool)
            .await?;
        tracing::info!(restaurant_id = restaurant.id, "Restaurant created");
        Ok(restaurant)
    }

    /// Find a restaurant by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Restaurant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurants WHERE id = $1");
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a restaurant. Only non-`None` fields are applied;
    /// `description: Some(None)` clears the description.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRestaurant,
    ) -> Result<Option<Restaurant>, sqlx::Error> {
        let query = format!(
            "UPDATE restaurants SET \
                name        = COALESCE($2, name), \
                cuisine     = COALESCE($3, cuisine), \
                image_url   = COALESCE($4, image_url), \
                location    = COALESCE($5, location), \
                rating      = COALESCE($6, rating), \
                description = CASE WHEN $9 THEN $7 ELSE description END, \
                price_range = COALESCE($8, price_range) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let restaurant = sqlx::query_as::<_, Restaurant>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.cuisine)
            .bind(&input.image_url)
            .bind(&input.location)
            .bind(input.rating)
            .bind(input.description.clone().flatten())
            .bind(&input.price_range)
            .bind(input.description.is_some())
            .fetch_optional(pool)
            .await?;
        if restaurant.is_some() {
            tracing::debug!(restaurant_id = id, "Restaurant updated");
        }
        Ok(restaurant)
    }

    /// Delete a restaurant by its ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(restaurant_id = id, "Restaurant deleted");
        }
        Ok(deleted)
    }

    /// Count rows matching `predicate`.
    pub async fn count(pool: &PgPool, predicate: &RestaurantPredicate) -> Result<i64, sqlx::Error> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM restaurants");
        predicate.push_where(&mut qb);
        qb.build_query_scalar::<i64>().fetch_one(pool).await
    }

    /// Filtered, paginated listing, newest first.
    ///
    /// The count and the page fetch are separate statements; a concurrent
    /// write between them can make `total_pages` disagree with the rows
    /// returned. That window is accepted.
    pub async fn list_paginated(
        pool: &PgPool,
        filter: &ResolvedFilter,
    ) -> Result<RestaurantPage, sqlx::Error> {
        let predicate = RestaurantPredicate::build(pool, filter).await?;
        let page = filter.page;

        let total_items = Self::count(pool, &predicate).await?;

        let mut qb = QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNS} FROM restaurants"));
        predicate.push_where(&mut qb);
        qb.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        qb.push_bind(page.limit);
        qb.push(" OFFSET ");
        qb.push_bind(page.offset());

        let data = qb.build_query_as::<Restaurant>().fetch_all(pool).await?;

        Ok(RestaurantPage {
            data,
            pagination: Pagination::new(page, total_items),
        })
    }

    /// All restaurants with the given cuisine, best rated first.
    pub async fn list_by_cuisine(
        pool: &PgPool,
        cuisine: &str,
    ) -> Result<Vec<Restaurant>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM restaurants WHERE cuisine = $1 ORDER BY rating DESC, id"
        );
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(cuisine)
            .fetch_all(pool)
            .await
    }

    /// All restaurants in the given location, best rated first.
    pub async fn list_by_location(
        pool: &PgPool,
        location: &str,
    ) -> Result<Vec<Restaurant>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM restaurants WHERE location = $1 ORDER BY rating DESC, id"
        );
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(location)
            .fetch_all(pool)
            .await
    }

    /// All restaurants whose stored price string equals `price_range`.
    pub async fn list_by_price_range(
        pool: &PgPool,
        price_range: &str,
    ) -> Result<Vec<Restaurant>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM restaurants WHERE price_range = $1 ORDER BY rating DESC, id"
        );
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(price_range)
            .fetch_all(pool)
            .await
    }

    /// The `limit` best rated restaurants.
    pub async fn top_rated(pool: &PgPool, limit: i64) -> Result<Vec<Restaurant>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM restaurants ORDER BY rating DESC, id LIMIT $1");
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Restaurants whose name contains `term`, best rated first.
    pub async fn search_by_name(
        pool: &PgPool,
        term: &str,
    ) -> Result<Vec<Restaurant>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM restaurants WHERE name LIKE $1 ORDER BY rating DESC, id"
        );
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Distinct cuisine labels, sorted.
    pub async fn distinct_cuisines(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT cuisine FROM restaurants ORDER BY cuisine")
            .fetch_all(pool)
            .await
    }

    /// Distinct location labels, sorted.
    pub async fn distinct_locations(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT location FROM restaurants ORDER BY location")
            .fetch_all(pool)
            .await
    }

    /// Distinct stored price strings. Feeds price-bucket classification.
    pub async fn distinct_price_ranges(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT price_range FROM restaurants")
            .fetch_all(pool)
            .await
    }

    /// Remove every row. Returns the number of rows deleted.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM restaurants").execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Total number of rows in the table.
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        Self::count(pool, &RestaurantPredicate::default()).await
    }
}
