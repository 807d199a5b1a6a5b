//! Translation of a listing filter into a SQL `WHERE` clause.
//!
//! A [`RestaurantPredicate`] is built once per request and then pushed into
//! both the count query and the page query, so the two always filter on the
//! same criteria.

use dinedir_core::listing::ResolvedFilter;
use dinedir_core::price::{bucket_members, PriceFilter};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::repositories::RestaurantRepo;

/// How the `price_range` column is constrained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricePredicate {
    /// `price_range = $n`
    Equals(String),
    /// `price_range = ANY($n)`; an empty set matches no rows.
    AnyOf(Vec<String>),
}

/// Filter criteria for the `restaurants` table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantPredicate {
    cuisine: Option<String>,
    location: Option<String>,
    price: Option<PricePredicate>,
    min_rating: Option<i16>,
    max_rating: Option<i16>,
}

impl RestaurantPredicate {
    /// Build the predicate for `filter`.
    ///
    /// A bucket filter (`$`, `$$`, `$$$`) needs the distinct stored price
    /// strings to compute its membership set, so it costs one extra query.
    pub async fn build(pool: &PgPool, filter: &ResolvedFilter) -> Result<Self, sqlx::Error> {
        let stored = match filter.price {
            Some(PriceFilter::Bucket(_)) => RestaurantRepo::distinct_price_ranges(pool).await?,
            _ => Vec::new(),
        };
        Ok(Self::from_stored_prices(filter, &stored))
    }

    /// Build the predicate given the distinct stored price strings.
    pub fn from_stored_prices(filter: &ResolvedFilter, stored_prices: &[String]) -> Self {
        let price = filter.price.as_ref().map(|price| match price {
            PriceFilter::Exact(value) => PricePredicate::Equals(value.clone()),
            PriceFilter::Bucket(bucket) => {
                let members = bucket_members(stored_prices.iter().map(String::as_str), *bucket);
                tracing::debug!(%bucket, members = members.len(), "Resolved price bucket");
                PricePredicate::AnyOf(members)
            }
        });

        Self {
            cuisine: filter.cuisine.clone(),
            location: filter.location.clone(),
            price,
            min_rating: filter.min_rating,
            max_rating: filter.max_rating,
        }
    }

    #[cfg(test)]
    fn price(&self) -> Option<&PricePredicate> {
        self.price.as_ref()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Append ` WHERE ...` (or nothing, if unconstrained) to `qb`.
    pub fn push_where(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        let mut first = true;
        let mut clause = |qb: &mut QueryBuilder<'_, Postgres>, sql: &str| {
            qb.push(if first { " WHERE " } else { " AND " });
            qb.push(sql);
            first = false;
        };

        if let Some(ref cuisine) = self.cuisine {
            clause(qb, "cuisine = ");
            qb.push_bind(cuisine.clone());
        }
        if let Some(ref location) = self.location {
            clause(qb, "location = ");
            qb.push_bind(location.clone());
        }
        match self.price {
            Some(PricePredicate::Equals(ref value)) => {
                clause(qb, "price_range = ");
                qb.push_bind(value.clone());
            }
            Some(PricePredicate::AnyOf(ref values)) => {
                clause(qb, "price_range = ANY(");
                qb.push_bind(values.clone());
                qb.push(")");
            }
            None => {}
        }
        if let Some(min) = self.min_rating {
            clause(qb, "rating >= ");
            qb.push_bind(min);
        }
        if let Some(max) = self.max_rating {
            clause(qb, "rating <= ");
            qb.push_bind(max);
        }
    }
}
