//! Restaurant model and DTOs.

use dinedir_core::listing::Pagination;
use dinedir_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `restaurants` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: DbId,
    pub name: String,
    pub cuisine: String,
    pub image_url: String,
    pub location: String,
    pub rating: i16,
    pub description: Option<String>,
    pub price_range: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One page of the filtered listing plus its pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantPage {
    pub data: Vec<Restaurant>,
    pub pagination: Pagination,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a restaurant. All fields except `description` are required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurant {
    pub name: String,
    pub cuisine: String,
    pub image_url: String,
    pub location: String,
    pub rating: i16,
    pub description: Option<String>,
    pub price_range: String,
}

/// DTO for a partial update. Only fields that are `Some` are written.
///
/// `description` distinguishes an absent key (`None`, left unchanged) from an
/// explicit `null` (`Some(None)`, cleared).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRestaurant {
    pub name: Option<String>,
    pub cuisine: Option<String>,
    pub image_url: Option<String>,
    pub location: Option<String>,
    pub rating: Option<i16>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub description: Option<Option<String>>,
    pub price_range: Option<String>,
}

/// Any key that is present, `null` included, deserializes to `Some`.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
