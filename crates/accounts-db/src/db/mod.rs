//! The in-memory accounts store and its seeding routine.
//!
//! [`Seeder::initialize`] builds a [`Store`] from a schema and a data script
//! and assigns a random balance to every account it finds.

mod error;
mod seeder;
mod store;

pub use error::{ScriptError, StoreError, WriteFailure};
pub use seeder::{Seeder, initialize};
pub use store::Store;
