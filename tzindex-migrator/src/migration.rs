use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::{
    backend::Backend,
    error::{MigrateError, Result},
    statement::Statement,
};

/// Which transformation of a migration to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}

/// A reversible schema change, usually one table or one index.
pub trait Operation: Send + Sync {
    fn up(&self) -> Vec<Statement>;

    fn down(&self) -> Vec<Statement>;
}

/// An immutable, named schema delta made of ordered operations.
///
/// Up runs every operation's `up` in declaration order; Down runs every
/// operation's `down` in reverse declaration order.
pub trait Migration: Send + Sync {
    /// `YYYYMMDDhhmmss_Name`, unique and ordered chronologically.
    fn id(&self) -> &str;

    fn operations(&self) -> Vec<Box<dyn Operation>>;

    fn statements(&self, direction: Direction) -> Vec<Statement> {
        let operations = self.operations();

        match direction {
            Direction::Up => operations.iter().flat_map(|op| op.up()).collect(),
            Direction::Down => operations.iter().rev().flat_map(|op| op.down()).collect(),
        }
    }

    /// SQL executed for `direction` on `backend`, statements restricted to
    /// other backends left out.
    fn render(&self, backend: Backend, direction: Direction) -> Vec<String> {
        self.statements(direction)
            .iter()
            .filter_map(|statement| statement.render(backend))
            .collect()
    }

    /// Hex SHA-256 of the up SQL on `backend`, recorded in the ledger.
    ///
    /// The hash covers the SQL as rendered by sea-query, not the operations
    /// themselves. A sea-query release that changes its output (quoting,
    /// spacing, type names) changes the checksum of every migration, and
    /// databases migrated before the upgrade then fail with
    /// [`Inconsistency::ChecksumMismatch`](crate::Inconsistency::ChecksumMismatch)
    /// until run with checksum verification disabled.
    fn checksum(&self, backend: Backend) -> String {
        checksum(&self.render(backend, Direction::Up))
    }
}

pub(crate) fn checksum(statements: &[String]) -> String {
    let digest = Sha256::digest(statements.join(";\n").as_bytes());

    hex::encode(digest)
}

/// Checks the `YYYYMMDDhhmmss_Name` identifier shape.
pub fn validate_identifier(id: &str) -> Result<()> {
    let invalid = || MigrateError::InvalidIdentifier(id.to_owned());
    let (timestamp, name) = id.split_once('_').ok_or_else(invalid)?;

    if timestamp.len() != 14 || !timestamp.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    if chrono::NaiveDateTime::parse_from_str(timestamp, "%Y%m%d%H%M%S").is_err() {
        return Err(invalid());
    }

    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return Err(invalid());
    }

    Ok(())
}

/// Creates a vector of boxed values.
///
/// ```rust,ignore
/// vec_box![blocks::create_table::Operation, blocks::create_level_idx::Operation]
/// ```
#[macro_export]
macro_rules! vec_box {
    () => { ::std::vec::Vec::new() };
    ($($x:expr),+ $(,)?) => {
        ::std::vec![$(::std::boxed::Box::new($x)),+]
    };
}

/// Implements [`Migration`] for a unit struct.
///
/// ```rust,ignore
/// pub struct Lima;
///
/// tzindex_migrator::migration!(
///     Lima,
///     "20221124151948_Lima",
///     vec_box![blocks::widen_operations::Operation]
/// );
/// ```
#[macro_export]
macro_rules! migration {
    ($ty:ty, $id:literal, $operations:expr $(,)?) => {
        impl $crate::Migration for $ty {
            fn id(&self) -> &str {
                $id
            }

            fn operations(&self) -> ::std::vec::Vec<::std::boxed::Box<dyn $crate::Operation>> {
                $operations
            }
        }
    };
}
