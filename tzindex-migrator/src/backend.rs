use std::fmt;

use serde::Serialize;
use sqlx::AnyConnection;

use crate::error::{MigrateError, Result};

/// Storage engines the migrator can drive.
///
/// Both run DDL inside transactions, which is what makes a migration atomic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Sqlite,
    Postgres,
}

impl Backend {
    /// Resolves the backend of an open connection.
    pub fn of(connection: &AnyConnection) -> Result<Self> {
        Self::from_name(connection.backend_name())
    }

    /// Resolves a backend from the sqlx driver name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "SQLite" => Ok(Backend::Sqlite),
            "PostgreSQL" => Ok(Backend::Postgres),
            name => Err(MigrateError::UnsupportedBackend(name.to_owned())),
        }
    }

    /// Resolves a backend from a connection url scheme.
    pub fn from_url(url: &str) -> Result<Self> {
        let scheme = url.split(':').next().unwrap_or_default();

        match scheme {
            "sqlite" => Ok(Backend::Sqlite),
            "postgres" | "postgresql" => Ok(Backend::Postgres),
            scheme => Err(MigrateError::UnsupportedBackend(scheme.to_owned())),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Sqlite => f.write_str("SQLite"),
            Backend::Postgres => f.write_str("PostgreSQL"),
        }
    }
}
