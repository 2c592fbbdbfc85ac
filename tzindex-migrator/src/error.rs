use std::fmt;

use crate::migration::Direction;

/// Reason a ledger cannot be reconciled with the known migrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inconsistency {
    /// The ledger records an identifier this binary does not know.
    UnknownMigration,
    /// A known migration older than the newest applied one was never applied.
    OutOfOrder,
    /// The recorded checksum differs from the shipped migration.
    ChecksumMismatch,
    /// The ledger row could not be decoded.
    MalformedEntry,
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Inconsistency::UnknownMigration => "applied migration is unknown to this binary",
            Inconsistency::OutOfOrder => "pending migration is older than an applied one",
            Inconsistency::ChecksumMismatch => "applied migration was modified after shipping",
            Inconsistency::MalformedEntry => "ledger entry is malformed",
        };

        f.write_str(reason)
    }
}

/// Errors raised while registering, planning or running migrations.
///
/// Every variant is terminal for the current run: nothing is retried, and the
/// database is left at the last committed migration.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    /// The database cannot be reached. Raised before any migration executes.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[source] sqlx::Error),

    /// A migration's statements failed; its transaction was rolled back.
    #[error(
        "migration `{id}` failed to {direction}, last applied migration: {}",
        .last_applied.as_deref().unwrap_or("none")
    )]
    MigrationApplyFailure {
        id: String,
        direction: Direction,
        last_applied: Option<String>,
        #[source]
        source: sqlx::Error,
    },

    #[error("ledger inconsistency on `{id}`: {reason}")]
    LedgerInconsistency { id: String, reason: Inconsistency },

    #[error("another migration run holds the lock")]
    ConcurrentRunDetected,

    #[error("invalid migration identifier `{0}`, expected `YYYYMMDDhhmmss_Name`")]
    InvalidIdentifier(String),

    #[error("migration `{0}` is registered twice")]
    DuplicateMigration(String),

    #[error("unknown migration `{0}`")]
    UnknownMigration(String),

    /// A revert-only plan names a migration newer than the schema version.
    #[error(
        "cannot revert to `{target}`, it is ahead of schema version {}",
        .version.as_deref().unwrap_or("none")
    )]
    TargetAhead {
        target: String,
        version: Option<String>,
    },

    #[error("unsupported database backend `{0}`, consider using SQLite or PostgreSQL")]
    UnsupportedBackend(String),

    #[error("invalid table name `{0}`")]
    InvalidTableName(String),

    #[error("sqlx `{0}`")]
    Sqlx(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, MigrateError>;
