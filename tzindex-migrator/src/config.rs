//! Configuration constants and defaults for the migrator
//!
//! The ledger and lock live next to the indexer tables, so their names and the
//! advisory lock key are configurable for deployments sharing one database.

use crate::error::{MigrateError, Result};

/// Default name of the table recording applied migrations.
pub const DEFAULT_LEDGER_TABLE: &str = "__MigrationsHistory";

/// Default name of the single-row lock table used on SQLite.
pub const DEFAULT_LOCK_TABLE: &str = "__MigrationsLock";

/// Default PostgreSQL advisory lock key.
///
/// Any run using the same key on the same database is mutually exclusive.
pub const DEFAULT_LOCK_KEY: i64 = 7_270_345_519_013_470_065;

/// Runtime configuration of a [`Migrator`](crate::Migrator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigratorConfig {
    /// Table recording applied migrations
    pub ledger_table: String,

    /// Lock table (SQLite only)
    pub lock_table: String,

    /// Advisory lock key (PostgreSQL only)
    pub lock_key: i64,

    /// Reject ledgers whose checksums differ from the shipped migrations
    pub verify_checksums: bool,
}

impl Default for MigratorConfig {
    fn default() -> Self {
        Self {
            ledger_table: DEFAULT_LEDGER_TABLE.to_owned(),
            lock_table: DEFAULT_LOCK_TABLE.to_owned(),
            lock_key: DEFAULT_LOCK_KEY,
            verify_checksums: true,
        }
    }
}

impl MigratorConfig {
    /// Checks that table names are plain identifiers.
    pub fn validate(&self) -> Result<()> {
        for name in [&self.ledger_table, &self.lock_table] {
            if !is_plain_identifier(name) {
                return Err(MigrateError::InvalidTableName(name.to_owned()));
            }
        }

        Ok(())
    }
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }

    name.len() <= 63 && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Configuration builder for customizing migrator behavior
#[derive(Debug)]
pub struct ConfigBuilder {
    config: MigratorConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values
    pub fn new() -> Self {
        Self {
            config: MigratorConfig::default(),
        }
    }

    /// Set the ledger table name
    pub fn ledger_table(mut self, name: impl Into<String>) -> Self {
        self.config.ledger_table = name.into();
        self
    }

    /// Set the SQLite lock table name
    pub fn lock_table(mut self, name: impl Into<String>) -> Self {
        self.config.lock_table = name.into();
        self
    }

    /// Set the PostgreSQL advisory lock key
    pub fn lock_key(mut self, key: i64) -> Self {
        self.config.lock_key = key;
        self
    }

    /// Enable or disable checksum verification of applied migrations
    pub fn verify_checksums(mut self, verify: bool) -> Self {
        self.config.verify_checksums = verify;
        self
    }

    /// Build the final configuration, rejecting invalid table names
    pub fn build(self) -> Result<MigratorConfig> {
        self.config.validate()?;

        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(MigratorConfig::default().validate().is_ok());
    }

    #[test]
    fn builder_rejects_quoted_names() {
        let err = ConfigBuilder::new()
            .ledger_table("history\"; drop table x; --")
            .build()
            .unwrap_err();

        assert!(matches!(err, MigrateError::InvalidTableName(_)));
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = ConfigBuilder::new()
            .ledger_table("schema_history")
            .lock_key(42)
            .verify_checksums(false)
            .build()
            .unwrap();

        assert_eq!(config.ledger_table, "schema_history");
        assert_eq!(config.lock_table, DEFAULT_LOCK_TABLE);
        assert_eq!(config.lock_key, 42);
        assert!(!config.verify_checksums);
    }
}
