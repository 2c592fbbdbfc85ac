use std::collections::BTreeSet;

use crate::{
    error::{Inconsistency, MigrateError, Result},
    ledger::LedgerEntry,
    migration::Direction,
};

/// What a run should bring the database to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Apply every pending migration.
    ApplyAll,
    /// End with this migration as the schema version, applying or reverting
    /// as needed.
    Target(String),
    /// End with this migration as the schema version, failing with
    /// [`MigrateError::TargetAhead`] if that would apply anything.
    RevertTo(String),
    /// Revert every applied migration.
    RevertAll,
}

impl Plan {
    pub fn apply_all() -> Self {
        Plan::ApplyAll
    }

    pub fn target(id: impl Into<String>) -> Self {
        Plan::Target(id.into())
    }

    pub fn revert_to(id: impl Into<String>) -> Self {
        Plan::RevertTo(id.into())
    }

    pub fn revert_all() -> Self {
        Plan::RevertAll
    }
}

/// Checks the ledger against the known identifiers (sorted ascending) and
/// returns how many of them are applied.
///
/// Applied migrations must be exactly a prefix of the known list.
pub(crate) fn reconcile(known: &[&str], applied: &[LedgerEntry]) -> Result<usize> {
    let known_ids: BTreeSet<&str> = known.iter().copied().collect();
    let mut applied_ids = BTreeSet::new();

    for entry in applied {
        if !known_ids.contains(entry.id.as_str()) {
            return Err(MigrateError::LedgerInconsistency {
                id: entry.id.to_owned(),
                reason: Inconsistency::UnknownMigration,
            });
        }

        applied_ids.insert(entry.id.as_str());
    }

    let count = applied_ids.len();

    if let Some(gap) = known[..count].iter().find(|id| !applied_ids.contains(*id)) {
        return Err(MigrateError::LedgerInconsistency {
            id: (*gap).to_owned(),
            reason: Inconsistency::OutOfOrder,
        });
    }

    Ok(count)
}

/// Resolves `plan` into ordered `(index, direction)` steps over the known
/// identifiers, given that the first `current` are applied.
pub(crate) fn resolve(
    known: &[&str],
    current: usize,
    plan: &Plan,
) -> Result<Vec<(usize, Direction)>> {
    let position = |id: &str| {
        known
            .iter()
            .position(|known| *known == id)
            .map(|position| position + 1)
            .ok_or_else(|| MigrateError::UnknownMigration(id.to_owned()))
    };

    let target = match plan {
        Plan::ApplyAll => known.len(),
        Plan::RevertAll => 0,
        Plan::Target(id) => position(id.as_str())?,
        Plan::RevertTo(id) => {
            let target = position(id.as_str())?;

            if target > current {
                return Err(MigrateError::TargetAhead {
                    target: id.to_owned(),
                    version: current.checked_sub(1).map(|i| known[i].to_owned()),
                });
            }

            target
        }
    };

    let steps = if target >= current {
        (current..target).map(|i| (i, Direction::Up)).collect()
    } else {
        (target..current).rev().map(|i| (i, Direction::Down)).collect()
    };

    Ok(steps)
}
