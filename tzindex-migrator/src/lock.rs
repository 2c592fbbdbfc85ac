//! Mutual exclusion between concurrent migration runs.
//!
//! PostgreSQL uses a session advisory lock. SQLite has no such thing, so a
//! single-row table stands in for it: whoever inserts the row owns the lock.

use chrono::Utc;
use sea_query::{Alias, ColumnDef, Expr, Iden, OnConflict, Query, SqliteQueryBuilder, Table};
use sqlx::AnyConnection;
use uuid::Uuid;

use crate::{
    backend::Backend,
    config::MigratorConfig,
    error::{MigrateError, Result},
    ledger::format_timestamp,
};

#[derive(Iden)]
enum LockRow {
    #[iden = "Id"]
    Id,
    #[iden = "Owner"]
    Owner,
    #[iden = "AcquiredAt"]
    AcquiredAt,
}

const LOCK_ROW_ID: i32 = 1;

/// A held run lock. Must be released on the connection that acquired it.
#[derive(Debug)]
pub struct MigrationLock {
    backend: Backend,
    owner: String,
    lock_table: String,
    lock_key: i64,
}

impl MigrationLock {
    /// Takes the lock without waiting, failing with
    /// [`MigrateError::ConcurrentRunDetected`] when another run holds it.
    pub async fn acquire(
        connection: &mut AnyConnection,
        backend: Backend,
        config: &MigratorConfig,
    ) -> Result<Self> {
        let lock = Self {
            backend,
            owner: Uuid::new_v4().to_string(),
            lock_table: config.lock_table.to_owned(),
            lock_key: config.lock_key,
        };

        let acquired = match backend {
            Backend::Postgres => {
                let sql = format!("SELECT pg_try_advisory_lock({})", lock.lock_key);
                sqlx::query_scalar::<_, bool>(&sql)
                    .fetch_one(connection)
                    .await
                    .map_err(MigrateError::StorageUnavailable)?
            }
            Backend::Sqlite => lock
                .insert_row(connection)
                .await
                .map_err(MigrateError::StorageUnavailable)?,
        };

        if !acquired {
            tracing::warn!("migration lock is held by another run");

            return Err(MigrateError::ConcurrentRunDetected);
        }

        tracing::debug!("migration lock acquired by {}", lock.owner);

        Ok(lock)
    }

    async fn insert_row(&self, connection: &mut AnyConnection) -> sqlx::Result<bool> {
        let create = Table::create()
            .table(Alias::new(&self.lock_table))
            .if_not_exists()
            .col(
                ColumnDef::new(LockRow::Id)
                    .integer()
                    .not_null()
                    .primary_key(),
            )
            .col(ColumnDef::new(LockRow::Owner).string().string_len(36).not_null())
            .col(ColumnDef::new(LockRow::AcquiredAt).string().string_len(32).not_null())
            .to_string(SqliteQueryBuilder);
        sqlx::query(&create).execute(&mut *connection).await?;

        let insert = Query::insert()
            .into_table(Alias::new(&self.lock_table))
            .columns([LockRow::Id, LockRow::Owner, LockRow::AcquiredAt])
            .values_panic([
                LOCK_ROW_ID.into(),
                self.owner.as_str().into(),
                format_timestamp(Utc::now()).into(),
            ])
            .on_conflict(OnConflict::column(LockRow::Id).do_nothing().to_owned())
            .to_string(SqliteQueryBuilder);
        let result = sqlx::query(&insert).execute(connection).await?;

        Ok(result.rows_affected() == 1)
    }

    /// Gives the lock back.
    pub async fn release(self, connection: &mut AnyConnection) -> Result<()> {
        match self.backend {
            Backend::Postgres => {
                let sql = format!("SELECT pg_advisory_unlock({})", self.lock_key);
                let released = sqlx::query_scalar::<_, bool>(&sql)
                    .fetch_one(connection)
                    .await?;

                if !released {
                    tracing::warn!("advisory lock {} was not held at release", self.lock_key);
                }
            }
            Backend::Sqlite => {
                let sql = Query::delete()
                    .from_table(Alias::new(&self.lock_table))
                    .and_where(Expr::col(LockRow::Id).eq(LOCK_ROW_ID))
                    .and_where(Expr::col(LockRow::Owner).eq(self.owner.as_str()))
                    .to_string(SqliteQueryBuilder);
                sqlx::query(&sql).execute(connection).await?;
            }
        }

        tracing::debug!("migration lock released by {}", self.owner);

        Ok(())
    }
}

/// Removes a lock left behind by a crashed run.
///
/// Returns whether a lock was removed. PostgreSQL advisory locks die with
/// their session, so there is never anything to remove there.
pub async fn force_unlock(
    connection: &mut AnyConnection,
    backend: Backend,
    config: &MigratorConfig,
) -> Result<bool> {
    match backend {
        Backend::Postgres => Ok(false),
        Backend::Sqlite => {
            if !crate::ledger::table_exists(connection, backend, &config.lock_table).await? {
                return Ok(false);
            }

            let sql = Query::delete()
                .from_table(Alias::new(&config.lock_table))
                .to_string(SqliteQueryBuilder);
            let result = sqlx::query(&sql).execute(connection).await?;

            Ok(result.rows_affected() > 0)
        }
    }
}
