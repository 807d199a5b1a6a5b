//! Filter options and pagination math for the paginated restaurant listing.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::price::PriceFilter;
use crate::restaurant::validate_rating;

/// Page number used when the request omits `page`.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the request omits `limit`.
pub const DEFAULT_PAGE_LIMIT: i64 = 8;

/// Filter options for `GET /api/restaurants`.
///
/// Every field is optional. Empty strings are treated as absent, matching how
/// the web client sends untouched filter inputs.
///
/// | Field        | Default | Semantics                                  |
/// |--------------|---------|--------------------------------------------|
/// | `cuisine`    | none    | exact match                                |
/// | `location`   | none    | exact match                                |
/// | `price_range`| none    | legacy symbol = bucket, otherwise exact    |
/// | `min_rating` | none    | `rating >= min_rating`                     |
/// | `max_rating` | none    | `rating <= max_rating`                     |
/// | `page`       | `1`     | 1-based page number                        |
/// | `limit`      | `8`     | page size                                  |
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantFilter {
    pub cuisine: Option<String>,
    pub location: Option<String>,
    pub price_range: Option<String>,
    pub min_rating: Option<i16>,
    pub max_rating: Option<i16>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// A validated filter with defaults applied, ready for predicate building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFilter {
    pub cuisine: Option<String>,
    pub location: Option<String>,
    pub price: Option<PriceFilter>,
    pub min_rating: Option<i16>,
    pub max_rating: Option<i16>,
    pub page: PageRequest,
}

impl RestaurantFilter {
    /// Validate the raw options and apply defaults.
    pub fn resolve(&self) -> Result<ResolvedFilter, CoreError> {
        if let Some(min) = self.min_rating {
            validate_rating(min)?;
        }
        if let Some(max) = self.max_rating {
            validate_rating(max)?;
        }

        let page = PageRequest::new(self.page, self.limit)?;

        Ok(ResolvedFilter {
            cuisine: non_empty(&self.cuisine),
            location: non_empty(&self.location),
            price: non_empty(&self.price_range).map(|p| PriceFilter::parse(&p)),
            min_rating: self.min_rating,
            max_rating: self.max_rating,
            page,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
}

/// A validated page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Build a page request; `page` and `limit` must both be at least 1.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Result<Self, CoreError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT);

        if page < 1 {
            return Err(CoreError::Validation(
                "page must be a positive integer".to_string(),
            ));
        }
        if limit < 1 {
            return Err(CoreError::Validation(
                "limit must be a positive integer".to_string(),
            ));
        }
        Ok(Self { page, limit })
    }

    /// Number of rows to skip: `(page - 1) * limit`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Pagination metadata returned alongside a listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub items_per_page: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl Pagination {
    pub fn new(page: PageRequest, total_items: i64) -> Self {
        let total_pages = total_pages(total_items, page.limit);
        Self {
            current_page: page.page,
            total_pages,
            total_items,
            items_per_page: page.limit,
            has_next_page: page.page < total_pages,
            has_previous_page: page.page > 1,
        }
    }
}

/// `ceil(total_items / limit)`; `limit` is always >= 1 here.
pub fn total_pages(total_items: i64, limit: i64) -> i64 {
    if total_items <= 0 {
        0
    } else {
        (total_items - 1) / limit + 1
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::price::PriceBucket;

    fn page(page: i64, limit: i64) -> PageRequest {
        PageRequest::new(Some(page), Some(limit)).unwrap()
    }

    #[test]
    fn defaults_apply_when_absent() {
        let req = PageRequest::new(None, None).unwrap();
        assert_eq!(req, PageRequest { page: 1, limit: 8 });
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn offset_is_page_minus_one_times_limit() {
        assert_eq!(page(3, 8).offset(), 16);
        assert_eq!(page(1, 5).offset(), 0);
    }

    #[test]
    fn zero_page_or_limit_is_rejected() {
        assert_matches!(PageRequest::new(Some(0), None), Err(CoreError::Validation(_)));
        assert_matches!(PageRequest::new(None, Some(0)), Err(CoreError::Validation(_)));
        assert_matches!(PageRequest::new(Some(-2), Some(5)), Err(CoreError::Validation(_)));
    }

    #[test]
    fn total_pages_is_ceiling() {
        assert_eq!(total_pages(0, 8), 0);
        assert_eq!(total_pages(1, 8), 1);
        assert_eq!(total_pages(8, 8), 1);
        assert_eq!(total_pages(9, 8), 2);
        assert_eq!(total_pages(17, 4), 5);
    }

    #[test]
    fn huge_limit_does_not_overflow() {
        assert_eq!(total_pages(5, i64::MAX), 1);
        assert_eq!(total_pages(i64::MAX, i64::MAX), 1);
        assert_eq!(total_pages(i64::MAX, 1), i64::MAX);

        let meta = Pagination::new(page(1, i64::MAX), 5);
        assert_eq!(meta.total_pages, 1);
        assert!(!meta.has_next_page);

        assert_eq!(page(2, i64::MAX).offset(), i64::MAX);
    }

    #[test]
    fn pagination_metadata_holds_for_a_range_of_inputs() {
        for total in 0..40 {
            for limit in 1..10 {
                for p in 1..8 {
                    let meta = Pagination::new(page(p, limit), total);
                    assert_eq!(meta.current_page, p);
                    assert_eq!(meta.items_per_page, limit);
                    assert_eq!(meta.total_items, total);
                    assert_eq!(meta.total_pages, (total + limit - 1) / limit);
                    assert_eq!(meta.has_next_page, p < meta.total_pages);
                    assert_eq!(meta.has_previous_page, p > 1);
                }
            }
        }
    }

    #[test]
    fn pagination_serializes_camel_case() {
        let json = serde_json::to_value(Pagination::new(page(2, 8), 20)).unwrap();
        assert_eq!(json["currentPage"], 2);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["totalItems"], 20);
        assert_eq!(json["itemsPerPage"], 8);
        assert_eq!(json["hasNextPage"], true);
        assert_eq!(json["hasPreviousPage"], true);
    }

    #[test]
    fn resolve_maps_symbols_to_buckets_and_drops_empty_strings() {
        let filter = RestaurantFilter {
            cuisine: Some(String::new()),
            location: Some("Downtown".into()),
            price_range: Some("$$$".into()),
            ..Default::default()
        };
        let resolved = filter.resolve().unwrap();
        assert_eq!(resolved.cuisine, None);
        assert_eq!(resolved.location.as_deref(), Some("Downtown"));
        assert_eq!(resolved.price, Some(PriceFilter::Bucket(PriceBucket::Expensive)));
        assert_eq!(resolved.page, PageRequest { page: 1, limit: 8 });
    }

    #[test]
    fn resolve_keeps_literal_amount_exact() {
        let filter = RestaurantFilter {
            price_range: Some("$28".into()),
            ..Default::default()
        };
        assert_eq!(
            filter.resolve().unwrap().price,
            Some(PriceFilter::Exact("$28".into()))
        );
    }

    #[test]
    fn resolve_rejects_out_of_range_rating_bounds() {
        let filter = RestaurantFilter {
            min_rating: Some(0),
            ..Default::default()
        };
        assert_matches!(filter.resolve(), Err(CoreError::Validation(_)));

        let filter = RestaurantFilter {
            max_rating: Some(6),
            ..Default::default()
        };
        assert_matches!(filter.resolve(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn filter_deserializes_from_camel_case() {
        let filter: RestaurantFilter = serde_json::from_value(serde_json::json!({
            "priceRange": "$",
            "minRating": 3,
            "maxRating": 5,
            "page": 2
        }))
        .unwrap();
        assert_eq!(filter.price_range.as_deref(), Some("$"));
        assert_eq!(filter.min_rating, Some(3));
        assert_eq!(filter.max_rating, Some(5));
        assert_eq!(filter.page, Some(2));
        assert_eq!(filter.limit, None);
    }
}
