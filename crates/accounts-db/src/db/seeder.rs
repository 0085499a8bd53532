//! Builds the accounts store and assigns random balances.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::error::{StoreError, WriteFailure};
use super::store::Store;
use crate::config::StoreConfig;
use crate::generators::BalanceGenerator;

/// Builds a fresh in-memory store from the configured scripts and seeds
/// every account with a random balance.
pub struct Seeder {
    config: StoreConfig,
    balance_gen: BalanceGenerator,
}

impl Seeder {
    /// Creates a new seeder for the given configuration.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            balance_gen: BalanceGenerator::new(),
        }
    }

    /// Replaces the balance generator.
    pub fn with_balance_generator(mut self, balance_gen: BalanceGenerator) -> Self {
        self.balance_gen = balance_gen;
        self
    }

    /// Runs the full sequence: open store, apply schema then data, read the
    /// account numbers and write one generated balance per number.
    ///
    /// No store is returned unless every step succeeds.
    pub async fn initialize(&self) -> Result<Store, StoreError> {
        info!("Building in-memory accounts store");

        let store = Store::open_in_memory().await?;
        self.load_scripts(&store).await?;

        let numbers = store.account_numbers().await?;
        info!("System has {} accounts", numbers.len());

        let mut rng = match self.config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.seed_balances(&store, &numbers, &mut rng).await?;

        Ok(store)
    }

    /// Applies the schema script, then the data script.
    async fn load_scripts(&self, store: &Store) -> Result<(), StoreError> {
        for script in [&self.config.schema_script, &self.config.data_script] {
            store.run_script(script).await?;
        }
        Ok(())
    }

    /// Writes a freshly generated balance for each number. Returns the number
    /// of rows written.
    ///
    /// A number that matches no row is fatal: numbers come from a read of the
    /// same store, so a miss means the store changed underneath the seeder.
    pub async fn seed_balances(
        &self,
        store: &Store,
        numbers: &[String],
        rng: &mut impl Rng,
    ) -> Result<usize, StoreError> {
        for number in numbers {
            let balance = self.balance_gen.generate(rng);

            let affected = store
                .update_balance(number, balance)
                .await
                .map_err(|e| StoreError::Write {
                    number: number.clone(),
                    source: WriteFailure::Sql(e),
                })?;

            if affected == 0 {
                return Err(StoreError::Write {
                    number: number.clone(),
                    source: WriteFailure::RowMissing,
                });
            }

            debug!(number = %number, balance = %balance, "Seeded balance");
        }

        info!("Seeded balances for {} accounts", numbers.len());
        Ok(numbers.len())
    }
}

/// Builds and seeds a store with the given configuration.
pub async fn initialize(config: StoreConfig) -> Result<Store, StoreError> {
    Seeder::new(config).initialize().await
}
