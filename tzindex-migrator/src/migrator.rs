use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{AnyConnection, Connection};
use tokio_util::sync::CancellationToken;

use crate::{
    backend::Backend,
    config::MigratorConfig,
    error::{Inconsistency, MigrateError, Result},
    ledger::{Ledger, LedgerEntry},
    lock::{self, MigrationLock},
    migration::{checksum, validate_identifier, Direction, Migration},
    plan::{reconcile, resolve, Plan},
};

/// Lifecycle of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Idle,
    Running,
    Succeeded,
    Failed,
    /// Stopped between two migrations because cancellation was requested.
    Cancelled,
}

/// A migration executed by a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Executed {
    pub id: String,
    pub direction: Direction,
}

/// Outcome of a run that did not fail.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub state: RunState,
    pub executed: Vec<Executed>,
    /// Ledger content once the run ended.
    pub ledger: Vec<LedgerEntry>,
}

impl Report {
    /// Schema version: the newest applied migration.
    pub fn version(&self) -> Option<&str> {
        self.ledger.iter().map(|entry| entry.id.as_str()).max()
    }
}

/// SQL a plan would execute for one migration.
#[derive(Debug, Clone, Serialize)]
pub struct Script {
    pub id: String,
    pub direction: Direction,
    pub statements: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MigrationStatus {
    pub id: String,
    pub applied_at: Option<DateTime<Utc>>,
    /// `None` while pending.
    pub checksum_matches: Option<bool>,
}

/// Known migrations compared with a database's ledger.
#[derive(Debug, Clone, Serialize)]
pub struct Status {
    pub backend: Backend,
    pub version: Option<String>,
    pub migrations: Vec<MigrationStatus>,
    /// Ledger entries this binary does not know about.
    pub unknown: Vec<LedgerEntry>,
}

struct Run {
    state: RunState,
}

impl Run {
    fn new() -> Self {
        Self {
            state: RunState::Idle,
        }
    }

    fn transition(&mut self, next: RunState) {
        tracing::debug!("migration run {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

/// Brings a database to a schema version by applying or reverting migrations,
/// each in its own transaction together with its ledger update.
#[derive(Default)]
pub struct Migrator {
    migrations: Vec<Box<dyn Migration>>,
    config: MigratorConfig,
}

impl Migrator {
    pub fn new(config: MigratorConfig) -> Self {
        Self {
            migrations: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &MigratorConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: MigratorConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Registers a migration, keeping the list ordered by identifier.
    pub fn add_migration(&mut self, migration: Box<dyn Migration>) -> Result<&mut Self> {
        validate_identifier(migration.id())?;

        match self
            .migrations
            .binary_search_by(|known| known.id().cmp(migration.id()))
        {
            Ok(_) => Err(MigrateError::DuplicateMigration(migration.id().to_owned())),
            Err(position) => {
                self.migrations.insert(position, migration);

                Ok(self)
            }
        }
    }

    /// Registered migrations, oldest first.
    pub fn migrations(&self) -> &[Box<dyn Migration>] {
        &self.migrations
    }

    fn ids(&self) -> Vec<&str> {
        self.migrations.iter().map(|m| m.id()).collect()
    }

    fn ledger(&self, backend: Backend) -> Ledger {
        Ledger::new(backend, &self.config.ledger_table)
    }

    /// Runs `plan` to completion.
    pub async fn run(&self, connection: &mut AnyConnection, plan: &Plan) -> Result<Report> {
        self.run_until_cancelled(connection, plan, &CancellationToken::new())
            .await
    }

    /// Runs `plan`, stopping before the next migration once `cancel` fires.
    ///
    /// A migration whose transaction has started always runs to commit or
    /// rollback.
    pub async fn run_until_cancelled(
        &self,
        connection: &mut AnyConnection,
        plan: &Plan,
        cancel: &CancellationToken,
    ) -> Result<Report> {
        self.config.validate()?;

        let backend = Backend::of(connection)?;
        let lock = MigrationLock::acquire(connection, backend, &self.config).await?;

        let result = self.run_locked(connection, backend, plan, cancel).await;

        if let Err(err) = lock.release(connection).await {
            tracing::error!("failed to release migration lock: {err}");
        }

        result
    }

    async fn run_locked(
        &self,
        connection: &mut AnyConnection,
        backend: Backend,
        plan: &Plan,
        cancel: &CancellationToken,
    ) -> Result<Report> {
        let mut run = Run::new();
        run.transition(RunState::Running);

        let ledger = self.ledger(backend);
        let applied = ledger.list_applied(connection).await?;
        let known = self.ids();
        let current = reconcile(&known, &applied)?;

        if self.config.verify_checksums {
            self.verify_checksums(backend, &applied)?;
        }

        let steps = resolve(&known, current, plan)?;

        if steps.is_empty() {
            tracing::info!("database schema is up to date");
        } else {
            ledger
                .ensure(connection)
                .await
                .map_err(MigrateError::StorageUnavailable)?;
        }

        let mut version = current;
        let mut last_applied_at = applied.iter().map(|entry| entry.applied_at).max();
        let mut executed = Vec::with_capacity(steps.len());

        for (index, direction) in steps {
            if cancel.is_cancelled() {
                tracing::warn!("migration run cancelled before {}", known[index]);
                run.transition(RunState::Cancelled);
                break;
            }

            let migration = self.migrations[index].as_ref();
            let statements = migration.render(backend, direction);
            let skipped = migration.statements(direction).len() - statements.len();

            match direction {
                Direction::Up => tracing::info!("applying migration {}", migration.id()),
                Direction::Down => tracing::info!("reverting migration {}", migration.id()),
            }

            if skipped > 0 {
                tracing::debug!("{skipped} statement(s) do not apply to {backend}");
            }

            let now = Utc::now();
            let applied_at = last_applied_at.map_or(now, |last| last.max(now));

            let result = execute(
                connection,
                &ledger,
                migration.id(),
                direction,
                &statements,
                &checksum(&statements),
                applied_at,
            )
            .await;

            if let Err(source) = result {
                run.transition(RunState::Failed);

                let last_applied = version.checked_sub(1).map(|i| known[i].to_owned());
                tracing::error!(
                    "migration {} failed to {direction}: {source}",
                    migration.id()
                );

                return Err(MigrateError::MigrationApplyFailure {
                    id: migration.id().to_owned(),
                    direction,
                    last_applied,
                    source,
                });
            }

            if direction == Direction::Up {
                last_applied_at = Some(applied_at);
            }

            version = match direction {
                Direction::Up => index + 1,
                Direction::Down => index,
            };

            executed.push(Executed {
                id: migration.id().to_owned(),
                direction,
            });
        }

        if run.state == RunState::Running {
            run.transition(RunState::Succeeded);
        }

        tracing::info!(
            "database schema version: {}",
            version.checked_sub(1).map_or("none", |i| known[i])
        );

        Ok(Report {
            state: run.state,
            executed,
            ledger: ledger.list_applied(connection).await?,
        })
    }

    fn verify_checksums(&self, backend: Backend, applied: &[LedgerEntry]) -> Result<()> {
        for entry in applied {
            let Some(migration) = self.find(&entry.id) else {
                continue;
            };

            if migration.checksum(backend) != entry.checksum {
                return Err(MigrateError::LedgerInconsistency {
                    id: entry.id.to_owned(),
                    reason: Inconsistency::ChecksumMismatch,
                });
            }
        }

        Ok(())
    }

    fn find(&self, id: &str) -> Option<&dyn Migration> {
        self.migrations
            .binary_search_by(|known| known.id().cmp(id))
            .ok()
            .map(|index| self.migrations[index].as_ref())
    }

    /// SQL that `plan` would execute on a database whose ledger is `applied`.
    pub fn script(
        &self,
        backend: Backend,
        applied: &[LedgerEntry],
        plan: &Plan,
    ) -> Result<Vec<Script>> {
        let known = self.ids();
        let current = reconcile(&known, applied)?;

        resolve(&known, current, plan)?
            .into_iter()
            .map(|(index, direction)| {
                let migration = self.migrations[index].as_ref();

                Ok(Script {
                    id: migration.id().to_owned(),
                    direction,
                    statements: migration.render(backend, direction),
                })
            })
            .collect()
    }

    /// Reads the ledger of `connection` and renders `plan` against it.
    pub async fn script_for(
        &self,
        connection: &mut AnyConnection,
        plan: &Plan,
    ) -> Result<Vec<Script>> {
        let backend = Backend::of(connection)?;
        let applied = self.ledger(backend).list_applied(connection).await?;

        self.script(backend, &applied, plan)
    }

    /// Compares known migrations with the ledger without changing anything.
    pub async fn status(&self, connection: &mut AnyConnection) -> Result<Status> {
        self.config.validate()?;

        let backend = Backend::of(connection)?;
        let applied = self.ledger(backend).list_applied(connection).await?;

        let migrations = self
            .migrations
            .iter()
            .map(|migration| {
                let entry = applied.iter().find(|entry| entry.id == migration.id());

                MigrationStatus {
                    id: migration.id().to_owned(),
                    applied_at: entry.map(|entry| entry.applied_at),
                    checksum_matches: entry
                        .map(|entry| entry.checksum == migration.checksum(backend)),
                }
            })
            .collect();

        let unknown = applied
            .iter()
            .filter(|entry| self.find(&entry.id).is_none())
            .cloned()
            .collect();

        Ok(Status {
            backend,
            version: applied.iter().map(|entry| entry.id.to_owned()).max(),
            migrations,
            unknown,
        })
    }

    /// Removes a lock left behind by a crashed run, see [`lock::force_unlock`].
    pub async fn unlock(&self, connection: &mut AnyConnection) -> Result<bool> {
        let backend = Backend::of(connection)?;

        lock::force_unlock(connection, backend, &self.config).await
    }
}

async fn execute(
    connection: &mut AnyConnection,
    ledger: &Ledger,
    id: &str,
    direction: Direction,
    statements: &[String],
    checksum: &str,
    applied_at: DateTime<Utc>,
) -> sqlx::Result<()> {
    let mut tx = connection.begin().await?;

    let result = async {
        for sql in statements {
            sqlx::query(sql).execute(&mut *tx).await?;
        }

        match direction {
            Direction::Up => ledger.mark_applied(&mut tx, id, checksum, applied_at).await,
            Direction::Down => ledger.unmark(&mut tx, id).await,
        }
    }
    .await;

    match result {
        Ok(()) => tx.commit().await,
        Err(err) => {
            if let Err(rollback) = tx.rollback().await {
                tracing::warn!("rollback of {id} failed: {rollback}");
            }

            Err(err)
        }
    }
}
