//! Configuration types for building the accounts store.

use std::{convert::Infallible, fmt, path::PathBuf, str::FromStr};

use crate::db::ScriptError;

/// Prefix selecting a script bundled into the binary.
pub const CLASSPATH_PREFIX: &str = "classpath:";

/// Default schema script reference.
pub const DEFAULT_SCHEMA_SCRIPT: &str = "classpath:testdb/schema.sql";

/// Default data script reference.
pub const DEFAULT_DATA_SCRIPT: &str = "classpath:testdb/data.sql";

/// Scripts shipped with the crate, addressable through `classpath:` references.
const BUNDLED_SCRIPTS: &[(&str, &str)] = &[
    ("testdb/schema.sql", include_str!("../testdb/schema.sql")),
    ("testdb/data.sql", include_str!("../testdb/data.sql")),
];

/// Reference to a SQL script applied while building the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptRef {
    /// A script bundled into the binary, e.g. `classpath:testdb/schema.sql`.
    Bundled(String),
    /// A script read from the filesystem at initialization.
    File(PathBuf),
    /// Literal SQL text.
    Inline(String),
}

impl ScriptRef {
    /// Creates a reference holding literal SQL.
    pub fn inline(sql: impl Into<String>) -> Self {
        Self::Inline(sql.into())
    }

    /// Resolves the reference to the SQL text it points at.
    pub async fn load(&self) -> Result<String, ScriptError> {
        match self {
            ScriptRef::Bundled(resource) => BUNDLED_SCRIPTS
                .iter()
                .find(|(name, _)| name == resource)
                .map(|(_, sql)| (*sql).to_string())
                .ok_or_else(|| ScriptError::UnknownResource(resource.clone())),
            ScriptRef::File(path) => Ok(tokio::fs::read_to_string(path).await?),
            ScriptRef::Inline(sql) => Ok(sql.clone()),
        }
    }
}

impl FromStr for ScriptRef {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.strip_prefix(CLASSPATH_PREFIX) {
            Some(resource) => ScriptRef::Bundled(resource.trim_start_matches('/').to_string()),
            None => ScriptRef::File(PathBuf::from(s)),
        })
    }
}

impl fmt::Display for ScriptRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptRef::Bundled(resource) => write!(f, "{CLASSPATH_PREFIX}{resource}"),
            ScriptRef::File(path) => write!(f, "{}", path.display()),
            ScriptRef::Inline(sql) => write!(f, "<inline script, {} bytes>", sql.len()),
        }
    }
}

/// Configuration for building and seeding the store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Script defining the schema. Applied first.
    pub schema_script: ScriptRef,

    /// Script inserting the account rows. Applied after the schema.
    pub data_script: ScriptRef,

    /// Fixed seed for the balance generator. `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            schema_script: ScriptRef::Bundled("testdb/schema.sql".to_string()),
            data_script: ScriptRef::Bundled("testdb/data.sql".to_string()),
            rng_seed: None,
        }
    }
}

impl StoreConfig {
    /// Creates a configuration from explicit script references.
    pub fn new(schema_script: ScriptRef, data_script: ScriptRef) -> Self {
        Self {
            schema_script,
            data_script,
            rng_seed: None,
        }
    }

    /// Fixes the balance generator seed for reproducible runs.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Reads the configuration from `ACCOUNTS_*` environment variables,
    /// falling back to the bundled scripts.
    pub fn from_env() -> anyhow::Result<Self> {
        let script = |key: &str, default: &str| {
            std::env::var(key)
                .unwrap_or_else(|_| default.to_string())
                .parse::<ScriptRef>()
        };

        let rng_seed = match std::env::var("ACCOUNTS_RNG_SEED") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|e| anyhow::anyhow!("invalid ACCOUNTS_RNG_SEED {raw:?}: {e}"))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            schema_script: script("ACCOUNTS_SCHEMA_SCRIPT", DEFAULT_SCHEMA_SCRIPT)?,
            data_script: script("ACCOUNTS_DATA_SCRIPT", DEFAULT_DATA_SCRIPT)?,
            rng_seed,
        })
    }
}
