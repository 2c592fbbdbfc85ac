//! Schema history of the tzindex database.
//!
//! Each migration module describes one schema delta with sea-query statements,
//! rendered for SQLite or PostgreSQL when the [`Migrator`] runs it. Migrations
//! are never edited once released: the ledger stores a checksum of their SQL and
//! a changed migration is reported as a ledger inconsistency.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tzindex_migrator::{connect, Plan};
//!
//! let mut conn = connect("sqlite:mainnet.db?mode=rwc").await?;
//! let migrator = tzindex_schema::new()?;
//!
//! migrator.run(&mut conn, &Plan::apply_all()).await?;
//! ```
//!
//! # Migrations
//!
//! - [`M20190916172004Initial`] - Chain state, protocols, addresses, blocks and
//!   the first operation tables
//! - [`M20191113225956Initial`] - Renames `Addresses` to `Accounts`, adds
//!   reveals and cycles
//! - [`M20200210110506Voting`] - Voting periods and baker cycles
//! - [`M20210329121017BigMaps`] - Big maps, their keys and updates
//! - [`M20220610101023Tokens`] - Tokens, balances and transfers
//! - [`M20221124151948Lima`] - Widens `Blocks.Operations`, adds drain delegate
//!   and consensus key operations
//! - [`M20230330074036Mumbai`] - Smart rollups
//! - [`M20250617133541Attestations`] - Endorsements renamed to attestations

mod m20190916172004_initial;
mod m20191113225956_initial;
mod m20200210110506_voting;
mod m20210329121017_big_maps;
mod m20220610101023_tokens;
mod m20221124151948_lima;
mod m20230330074036_mumbai;
mod m20250617133541_attestations;
pub mod ops;
pub mod table;

use tzindex_migrator::{MigrateError, Migrator, MigratorConfig};

pub use m20190916172004_initial::{M20190916172004Initial, GENESIS_LEVEL};
pub use m20191113225956_initial::M20191113225956Initial;
pub use m20200210110506_voting::M20200210110506Voting;
pub use m20210329121017_big_maps::M20210329121017BigMaps;
pub use m20220610101023_tokens::M20220610101023Tokens;
pub use m20221124151948_lima::M20221124151948Lima;
pub use m20230330074036_mumbai::M20230330074036Mumbai;
pub use m20250617133541_attestations::M20250617133541Attestations;

/// Creates a [`Migrator`] with every schema migration registered and the
/// default configuration.
///
/// # Errors
///
/// Returns an error if migration registration fails.
pub fn new() -> Result<Migrator, MigrateError> {
    with_config(MigratorConfig::default())
}

/// Like [`new`], with custom ledger and lock settings.
pub fn with_config(config: MigratorConfig) -> Result<Migrator, MigrateError> {
    let mut migrator = Migrator::new(config);
    migrator.add_migration(Box::new(M20190916172004Initial))?;
    migrator.add_migration(Box::new(M20191113225956Initial))?;
    migrator.add_migration(Box::new(M20200210110506Voting))?;
    migrator.add_migration(Box::new(M20210329121017BigMaps))?;
    migrator.add_migration(Box::new(M20220610101023Tokens))?;
    migrator.add_migration(Box::new(M20221124151948Lima))?;
    migrator.add_migration(Box::new(M20230330074036Mumbai))?;
    migrator.add_migration(Box::new(M20250617133541Attestations))?;

    Ok(migrator)
}
