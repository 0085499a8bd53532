//! Handle over the in-memory accounts database.

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::debug;

use super::error::{ScriptError, StoreError};
use crate::config::ScriptRef;
use crate::generators::round_half_up;
use crate::models::{Account, AccountBalance, AccountRow};

const ACCOUNT_COLUMNS: &str = r#"
    SELECT id AS id, CAST(number AS TEXT) AS number, name AS owner,
           CAST(balance AS TEXT) AS balance
    FROM T_ACCOUNT
"#;

/// The live store. Clones share the same underlying database.
///
/// The pool holds exactly one connection that never expires: an in-memory
/// SQLite database only lives as long as the connection that created it.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens a fresh, empty in-memory database.
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        let options =
            SqliteConnectOptions::from_str("sqlite::memory:").map_err(StoreError::Connect)?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(StoreError::Connect)?;

        Ok(Self { pool })
    }

    /// Executes a multi-statement SQL script.
    pub async fn execute(&self, sql: &str) -> Result<(), sqlx::Error> {
        if sql.trim().is_empty() {
            return Ok(());
        }
        sqlx::raw_sql(sql).execute(&self.pool).await?;
        Ok(())
    }

    /// Resolves a script reference and applies it.
    pub async fn run_script(&self, script: &ScriptRef) -> Result<(), StoreError> {
        let wrap = |source: ScriptError| StoreError::ScriptLoad {
            script: script.to_string(),
            source,
        };

        let sql = script.load().await.map_err(wrap)?;
        self.execute(&sql)
            .await
            .map_err(|e| wrap(ScriptError::Sql(e)))?;

        debug!("Applied script {}", script);
        Ok(())
    }

    /// Returns the distinct account numbers currently present.
    pub async fn account_numbers(&self) -> Result<Vec<String>, StoreError> {
        let numbers = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT CAST(number AS TEXT)
            FROM T_ACCOUNT
            WHERE number IS NOT NULL
            ORDER BY 1
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(numbers)
    }

    /// Sets the balance of every row matching `number`. Returns rows affected.
    ///
    /// Numbers are compared as text, the same form [`Store::account_numbers`]
    /// returns them in, whatever type the column was declared with.
    pub async fn update_balance(&self, number: &str, balance: Decimal) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE T_ACCOUNT
            SET balance = ?
            WHERE CAST(number AS TEXT) = ?
            "#,
        )
        .bind(balance.to_string())
        .bind(number)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Returns every account number with its balance.
    pub async fn balances(&self) -> Result<Vec<AccountBalance>, StoreError> {
        let rows: Vec<(String, Option<String>)> = sqlx::query_as(
            r#"
            SELECT CAST(number AS TEXT), CAST(balance AS TEXT)
            FROM T_ACCOUNT
            WHERE number IS NOT NULL
            ORDER BY number
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(number, raw)| {
                let balance = parse_balance(&number, raw.as_deref())?;
                Ok(AccountBalance { number, balance })
            })
            .collect()
    }

    pub async fn count_accounts(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM T_ACCOUNT")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Lists accounts ordered by number.
    pub async fn list_accounts(&self, limit: i64, offset: i64) -> Result<Vec<Account>, StoreError> {
        let rows: Vec<AccountRow> =
            sqlx::query_as(&format!("{ACCOUNT_COLUMNS} ORDER BY number LIMIT ? OFFSET ?"))
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(Account::try_from).collect()
    }

    pub async fn find_by_number(&self, number: &str) -> Result<Option<Account>, StoreError> {
        let row: Option<AccountRow> = sqlx::query_as(&format!(
            "{ACCOUNT_COLUMNS} WHERE CAST(T_ACCOUNT.number AS TEXT) = ?"
        ))
        .bind(number)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Account::try_from).transpose()
    }

    /// Finds accounts whose owner name contains `partial_name`, ignoring case.
    pub async fn find_by_owner(&self, partial_name: &str) -> Result<Vec<Account>, StoreError> {
        let rows: Vec<AccountRow> = sqlx::query_as(&format!(
            "{ACCOUNT_COLUMNS} WHERE instr(lower(name), lower(?)) > 0 ORDER BY number"
        ))
        .bind(partial_name)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Account::try_from).collect()
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl TryFrom<AccountRow> for Account {
    type Error = StoreError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let balance = parse_balance(&row.number, row.balance.as_deref())?;
        Ok(Account {
            id: row.id,
            number: row.number,
            owner: row.owner,
            balance,
        })
    }
}

/// Parses a balance read back as text into a two-digit decimal.
fn parse_balance(number: &str, raw: Option<&str>) -> Result<Decimal, StoreError> {
    let invalid = || StoreError::InvalidBalance {
        number: number.to_string(),
        value: raw.unwrap_or("NULL").to_string(),
    };

    let text = raw.ok_or_else(invalid)?;
    let value = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| invalid())?;

    Ok(round_half_up(value))
}
