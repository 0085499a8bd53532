//! Builds the seeded accounts store and prints what it contains.
//!
//! Run with:
//! ```
//! cargo run -p accounts-db --bin seed
//! ```
//!
//! Set `ACCOUNTS_RNG_SEED` for a reproducible data set.

use accounts_db::{Seeder, config::StoreConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = StoreConfig::from_env()?;
    tracing::info!(
        "Seeding from {} and {}",
        config.schema_script,
        config.data_script
    );

    let store = Seeder::new(config).initialize().await?;
    let balances = store.balances().await?;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Accounts: {}", balances.len());
    for entry in &balances {
        tracing::info!("  {:>12} {:>12}", entry.number, entry.balance.to_string());
    }

    Ok(())
}
