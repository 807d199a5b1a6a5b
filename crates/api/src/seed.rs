//! Demo data loader used by the `dinedir-seed` binary.

use anyhow::Context;
use dinedir_core::restaurant::validate_fields;
use dinedir_db::models::restaurant::CreateRestaurant;
use dinedir_db::repositories::RestaurantRepo;
use dinedir_db::DbPool;

/// Demo restaurant set, embedded at compile time.
const DEMO_RESTAURANTS: &str = include_str!("../../../db/seed/restaurants.json");

/// What a seeding run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table already had rows and `reset` was not requested.
    Skipped { existing: i64 },
    /// Rows were inserted (after deleting `removed` rows when resetting).
    Seeded { removed: u64, inserted: usize },
}

/// Parse and validate the embedded demo set.
pub fn demo_restaurants() -> anyhow::Result<Vec<CreateRestaurant>> {
    let rows: Vec<CreateRestaurant> =
        serde_json::from_str(DEMO_RESTAURANTS).context("Malformed demo restaurant data")?;
    for row in &rows {
        validate_fields(
            Some(row.name.as_str()),
            Some(row.rating),
            Some(row.price_range.as_str()),
        )
        .with_context(|| format!("Invalid demo restaurant '{}'", row.name))?;
    }
    Ok(rows)
}

/// Insert the demo set.
///
/// Without `reset`, a non-empty table is left untouched so repeated runs are
/// harmless. With `reset`, every existing row is deleted first.
pub async fn seed_restaurants(pool: &DbPool, reset: bool) -> anyhow::Result<SeedOutcome> {
    let rows = demo_restaurants()?;

    let removed = if reset {
        RestaurantRepo::delete_all(pool).await?
    } else {
        let existing = RestaurantRepo::count_all(pool).await?;
        if existing > 0 {
            return Ok(SeedOutcome::Skipped { existing });
        }
        0
    };

    for row in &rows {
        RestaurantRepo::create(pool, row)
            .await
            .with_context(|| format!("Failed to insert '{}'", row.name))?;
    }

    Ok(SeedOutcome::Seeded {
        removed,
        inserted: rows.len(),
    })
}
