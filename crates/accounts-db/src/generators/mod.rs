//! Value generators used while seeding the store.
//!
//! - [`BalanceGenerator`]: uniform random balances with two fractional digits

pub mod balance;

pub use balance::{
    BALANCE_SCALE, BalanceGenConfig, BalanceGenerator, MAX_BALANCE_CENTS, round_half_up,
};
