use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// An account as exposed to consumers of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Account {
    pub id: i64,
    pub number: String,
    pub owner: String,
    #[schema(value_type = String, example = "1234.50")]
    pub balance: Decimal,
}

/// Raw `T_ACCOUNT` row. The balance is read as text so that no binary
/// floating point sits between the column and the decimal value.
#[derive(Debug, FromRow)]
pub(crate) struct AccountRow {
    pub id: i64,
    pub number: String,
    pub owner: String,
    pub balance: Option<String>,
}

/// Account number paired with its current balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountBalance {
    pub number: String,
    pub balance: Decimal,
}

/// Aggregate figures for the seeded data set.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Stats {
    pub account_count: i64,
}
