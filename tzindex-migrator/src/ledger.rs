//! Durable record of applied migrations.
//!
//! One row per applied migration in the configured ledger table. Rows are
//! written and removed inside the transaction of the migration they describe.

use chrono::{DateTime, SecondsFormat, Utc};
use sea_query::{
    Alias, Asterisk, ColumnDef, Expr, Func, Iden, Order, PostgresQueryBuilder, Query,
    SelectStatement, SqliteQueryBuilder, Table,
};
use serde::Serialize;
use sqlx::AnyConnection;

use crate::{
    backend::Backend,
    error::{Inconsistency, MigrateError, Result},
};

#[derive(Iden)]
enum History {
    #[iden = "MigrationId"]
    MigrationId,
    #[iden = "Checksum"]
    Checksum,
    #[iden = "AppliedAt"]
    AppliedAt,
}

/// A migration recorded as applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    pub id: String,
    pub checksum: String,
    pub applied_at: DateTime<Utc>,
}

/// Narrow read/write access to the ledger table.
#[derive(Debug, Clone)]
pub struct Ledger {
    backend: Backend,
    table: String,
}

impl Ledger {
    pub fn new(backend: Backend, table: impl Into<String>) -> Self {
        Self {
            backend,
            table: table.into(),
        }
    }

    fn table(&self) -> Alias {
        Alias::new(&self.table)
    }

    /// Creates the ledger table when missing.
    pub async fn ensure(&self, connection: &mut AnyConnection) -> sqlx::Result<()> {
        let statement = Table::create()
            .table(self.table())
            .if_not_exists()
            .col(
                ColumnDef::new(History::MigrationId)
                    .string()
                    .string_len(150)
                    .not_null()
                    .primary_key(),
            )
            .col(ColumnDef::new(History::Checksum).string().string_len(64).not_null())
            .col(ColumnDef::new(History::AppliedAt).string().string_len(32).not_null())
            .to_owned();

        let sql = match self.backend {
            Backend::Sqlite => statement.to_string(SqliteQueryBuilder),
            Backend::Postgres => statement.to_string(PostgresQueryBuilder),
        };
        sqlx::query(&sql).execute(connection).await?;

        Ok(())
    }

    /// Applied migrations ordered by application time, then identifier.
    ///
    /// A missing ledger table means nothing was ever applied.
    pub async fn list_applied(&self, connection: &mut AnyConnection) -> Result<Vec<LedgerEntry>> {
        let exists = table_exists(connection, self.backend, &self.table)
            .await
            .map_err(MigrateError::StorageUnavailable)?;

        if !exists {
            return Ok(Vec::new());
        }

        let statement = Query::select()
            .columns([History::MigrationId, History::Checksum, History::AppliedAt])
            .from(self.table())
            .order_by(History::AppliedAt, Order::Asc)
            .order_by(History::MigrationId, Order::Asc)
            .to_owned();

        let rows = sqlx::query_as::<_, (String, String, String)>(&self.build(&statement))
            .fetch_all(connection)
            .await
            .map_err(MigrateError::StorageUnavailable)?;

        rows.into_iter()
            .map(|(id, checksum, applied_at)| {
                let Ok(applied_at) = DateTime::parse_from_rfc3339(&applied_at) else {
                    return Err(MigrateError::LedgerInconsistency {
                        id,
                        reason: Inconsistency::MalformedEntry,
                    });
                };

                Ok(LedgerEntry {
                    id,
                    checksum,
                    applied_at: applied_at.with_timezone(&Utc),
                })
            })
            .collect()
    }

    /// Records `id` as applied. Runs inside the migration's transaction.
    pub async fn mark_applied(
        &self,
        connection: &mut AnyConnection,
        id: &str,
        checksum: &str,
        applied_at: DateTime<Utc>,
    ) -> sqlx::Result<()> {
        let statement = Query::insert()
            .into_table(self.table())
            .columns([History::MigrationId, History::Checksum, History::AppliedAt])
            .values_panic([id.into(), checksum.into(), format_timestamp(applied_at).into()])
            .to_owned();

        let sql = match self.backend {
            Backend::Sqlite => statement.to_string(SqliteQueryBuilder),
            Backend::Postgres => statement.to_string(PostgresQueryBuilder),
        };
        sqlx::query(&sql).execute(connection).await?;

        Ok(())
    }

    /// Removes `id`. Runs inside the transaction reverting the migration.
    pub async fn unmark(&self, connection: &mut AnyConnection, id: &str) -> sqlx::Result<()> {
        let statement = Query::delete()
            .from_table(self.table())
            .and_where(Expr::col(History::MigrationId).eq(id))
            .to_owned();

        let sql = match self.backend {
            Backend::Sqlite => statement.to_string(SqliteQueryBuilder),
            Backend::Postgres => statement.to_string(PostgresQueryBuilder),
        };
        sqlx::query(&sql).execute(connection).await?;

        Ok(())
    }

    fn build(&self, statement: &SelectStatement) -> String {
        match self.backend {
            Backend::Sqlite => statement.to_string(SqliteQueryBuilder),
            Backend::Postgres => statement.to_string(PostgresQueryBuilder),
        }
    }
}

/// RFC 3339 in UTC with microseconds, so text order is time order.
pub(crate) fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Whether a table named `name` exists in the current schema.
pub async fn table_exists(
    connection: &mut AnyConnection,
    backend: Backend,
    name: &str,
) -> sqlx::Result<bool> {
    let sql = match backend {
        Backend::Sqlite => Query::select()
            .expr(Func::count(Expr::col(Asterisk)))
            .from(Alias::new("sqlite_master"))
            .and_where(Expr::col(Alias::new("type")).eq("table"))
            .and_where(Expr::col(Alias::new("name")).eq(name))
            .to_string(SqliteQueryBuilder),
        Backend::Postgres => Query::select()
            .expr(Func::count(Expr::col(Asterisk)))
            .from((Alias::new("information_schema"), Alias::new("tables")))
            .and_where(Expr::col(Alias::new("table_schema")).eq(Expr::cust("current_schema()")))
            .and_where(Expr::col(Alias::new("table_name")).eq(name))
            .to_string(PostgresQueryBuilder),
    };

    let count = sqlx::query_scalar::<_, i64>(&sql)
        .fetch_one(connection)
        .await?;

    Ok(count > 0)
}
