//! Load the demo restaurant set.
//!
//! ```text
//! dinedir-seed            # insert only if the table is empty
//! dinedir-seed --reset    # delete every row, then insert
//! ```

use dinedir_api::seed::{seed_restaurants, SeedOutcome};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dinedir_seed=info,dinedir_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let reset = std::env::args().skip(1).any(|arg| arg == "--reset");

    let database_url = std::env::var("DATABASE_URL")?;
    let pool = dinedir_db::create_pool(&database_url).await?;
    dinedir_db::run_migrations(&pool).await?;

    match seed_restaurants(&pool, reset).await? {
        SeedOutcome::Skipped { existing } => {
            tracing::info!(existing, "Table already populated, skipping (pass --reset to reseed)");
        }
        SeedOutcome::Seeded { removed, inserted } => {
            tracing::info!(removed, inserted, "Database seeded");
        }
    }

    pool.close().await;
    Ok(())
}
