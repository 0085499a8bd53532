use thiserror::Error;

/// Errors raised while building, seeding or reading the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open in-memory store: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Failed to load script {script}: {source}")]
    ScriptLoad {
        script: String,
        #[source]
        source: ScriptError,
    },

    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("Failed to write balance for account {number}: {source}")]
    Write {
        number: String,
        #[source]
        source: WriteFailure,
    },

    #[error("Account {number} has a non-decimal balance: {value}")]
    InvalidBalance { number: String, value: String },
}

/// Why a script could not be resolved or applied.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("no bundled script named {0}")]
    UnknownResource(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Sql(#[from] sqlx::Error),
}

/// Why a balance update did not land.
#[derive(Debug, Error)]
pub enum WriteFailure {
    #[error(transparent)]
    Sql(#[from] sqlx::Error),

    #[error("no row with that account number")]
    RowMissing,
}
