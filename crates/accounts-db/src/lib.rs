//! In-memory accounts store for the accounts demo service.
//!
//! The store is built once per process: a schema script and a data script
//! are applied to a fresh in-memory SQLite database, then every account is
//! given a random balance between 0.00 and 100000.00.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use accounts_db::prelude::*;
//!
//! let store = Seeder::new(StoreConfig::default()).initialize().await?;
//! let account = store.find_by_number("123456789").await?;
//! ```

pub mod config;
pub mod db;
pub mod generators;
pub mod models;

pub use db::{Seeder, Store, StoreError, initialize};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ScriptRef, StoreConfig};
    pub use crate::db::{ScriptError, Seeder, Store, StoreError, WriteFailure, initialize};
    pub use crate::generators::{BalanceGenerator, round_half_up};
    pub use crate::models::{Account, AccountBalance, Stats};
}
