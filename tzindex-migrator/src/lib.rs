//! Transactional schema migrations for the tzindex database.
//!
//! A [`Migration`] is an immutable, timestamp-named schema delta made of
//! reversible [`Operation`]s. The [`Migrator`] compares the registered
//! migrations with the database's ledger table and applies (or reverts) the
//! missing ones in identifier order, each inside its own transaction together
//! with its ledger row, so a migration is either fully applied and recorded or
//! not at all.
//!
//! # Features
//!
//! - **`sqlite`** - Enables the SQLite driver
//! - **`postgres`** - Enables the PostgreSQL driver
//!
//! Both are enabled by default. Connections go through sqlx's `Any` driver, so
//! the backend is picked from the connection url at runtime.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tzindex_migrator::{connect, Plan};
//!
//! let mut conn = connect("postgres://tzindex@localhost/mainnet").await?;
//! let migrator = tzindex_schema::new()?;
//!
//! let report = migrator.run(&mut conn, &Plan::apply_all()).await?;
//! println!("schema version: {:?}", report.version());
//! ```
//!
//! # Writing migrations
//!
//! ```rust,ignore
//! use tzindex_migrator::{vec_box, Operation, Statement};
//!
//! pub struct CreateTable;
//!
//! impl Operation for CreateTable {
//!     fn up(&self) -> Vec<Statement> {
//!         vec![Table::create().table(Blocks::Table) /* ... */ .to_owned().into()]
//!     }
//!
//!     fn down(&self) -> Vec<Statement> {
//!         vec![Table::drop().table(Blocks::Table).to_owned().into()]
//!     }
//! }
//!
//! pub struct Initial;
//!
//! tzindex_migrator::migration!(Initial, "20190916172004_Initial", vec_box![CreateTable]);
//! ```
//!
//! # Concurrency
//!
//! A run holds a lock for its whole duration: a PostgreSQL advisory lock, or a
//! single-row lock table on SQLite. A second run fails fast with
//! [`MigrateError::ConcurrentRunDetected`].

mod backend;
pub mod config;
mod error;
mod ledger;
mod lock;
mod migration;
mod migrator;
mod plan;
mod statement;

use sqlx::{AnyConnection, Connection};

pub use backend::Backend;
pub use config::{ConfigBuilder, MigratorConfig};
pub use error::{Inconsistency, MigrateError, Result};
pub use ledger::{table_exists, Ledger, LedgerEntry};
pub use lock::{force_unlock, MigrationLock};
pub use migration::{validate_identifier, Direction, Migration, Operation};
pub use migrator::{Executed, MigrationStatus, Migrator, Report, RunState, Script, Status};
pub use plan::Plan;
pub use statement::Statement;
pub use tokio_util::sync::CancellationToken;

/// Opens a connection, failing with [`MigrateError::StorageUnavailable`].
///
/// SQLite urls follow sqlx: `sqlite:indexer.db?mode=rwc`, `sqlite::memory:`.
pub async fn connect(url: &str) -> Result<AnyConnection> {
    sqlx::any::install_default_drivers();

    AnyConnection::connect(url)
        .await
        .map_err(MigrateError::StorageUnavailable)
}
