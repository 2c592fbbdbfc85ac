//! Backend-neutral schema statements.
//!
//! Migrations describe their changes with sea-query statements wrapped in
//! [`Statement`]. Rendering to SQL happens per [`Backend`] right before a
//! migration's transaction is opened.

use sea_query::{
    DeleteStatement, IndexCreateStatement, IndexDropStatement, InsertStatement,
    PostgresQueryBuilder, SqliteQueryBuilder, TableAlterStatement, TableCreateStatement,
    TableDropStatement, TableRenameStatement, UpdateStatement,
};

use crate::backend::Backend;

/// One schema or seed-data change.
#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(TableCreateStatement),
    DropTable(TableDropStatement),
    /// SQLite accepts a single alter option per statement and cannot modify
    /// column types; wrap those in [`Statement::only`] with
    /// [`Backend::Postgres`].
    AlterTable(TableAlterStatement),
    RenameTable(TableRenameStatement),
    CreateIndex(IndexCreateStatement),
    DropIndex(IndexDropStatement),
    Insert(InsertStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),
    /// Verbatim SQL, identical on every backend.
    Raw(String),
    /// A statement rendered only on the given backend.
    Only(Backend, Box<Statement>),
}

macro_rules! build {
    ($statement:expr, $backend:expr, $builder:expr) => {
        match $statement {
            Statement::CreateTable(s) => s.to_string($builder),
            Statement::DropTable(s) => s.to_string($builder),
            Statement::AlterTable(s) => s.to_string($builder),
            Statement::RenameTable(s) => s.to_string($builder),
            Statement::CreateIndex(s) => s.to_string($builder),
            Statement::DropIndex(s) => s.to_string($builder),
            Statement::Insert(s) => s.to_string($builder),
            Statement::Update(s) => s.to_string($builder),
            Statement::Delete(s) => s.to_string($builder),
            Statement::Raw(sql) => sql.clone(),
            Statement::Only(only, statement) => {
                return if *only == $backend {
                    statement.render($backend)
                } else {
                    None
                };
            }
        }
    };
}

impl Statement {
    /// Restricts `statement` to `backend`.
    pub fn only(backend: Backend, statement: impl Into<Statement>) -> Self {
        Statement::Only(backend, Box::new(statement.into()))
    }

    pub fn raw(sql: impl Into<String>) -> Self {
        Statement::Raw(sql.into())
    }

    /// Renders the statement for `backend`, or `None` when it is restricted to
    /// another backend.
    pub fn render(&self, backend: Backend) -> Option<String> {
        let sql = match backend {
            Backend::Sqlite => build!(self, backend, SqliteQueryBuilder),
            Backend::Postgres => build!(self, backend, PostgresQueryBuilder),
        };

        Some(sql)
    }
}

macro_rules! impl_from_statement {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Statement {
                fn from(statement: $ty) -> Self {
                    Statement::$variant(statement)
                }
            }
        )*
    };
}

impl_from_statement! {
    TableCreateStatement => CreateTable,
    TableDropStatement => DropTable,
    TableAlterStatement => AlterTable,
    TableRenameStatement => RenameTable,
    IndexCreateStatement => CreateIndex,
    IndexDropStatement => DropIndex,
    InsertStatement => Insert,
    UpdateStatement => Update,
    DeleteStatement => Delete,
}

#[cfg(test)]
mod tests {
    use sea_query::{Alias, ColumnDef, Expr, Index, Query, Table};

    use super::*;

    fn blocks() -> Alias {
        Alias::new("Blocks")
    }

    #[test]
    fn renders_quoted_identifiers_per_backend() {
        let statement: Statement = Table::create()
            .table(blocks())
            .col(ColumnDef::new(Alias::new("Level")).integer().not_null())
            .to_owned()
            .into();

        let sqlite = statement.render(Backend::Sqlite).unwrap();
        let postgres = statement.render(Backend::Postgres).unwrap();

        assert!(sqlite.starts_with(r#"CREATE TABLE "Blocks""#), "{sqlite}");
        assert!(postgres.starts_with(r#"CREATE TABLE "Blocks""#), "{postgres}");
        assert!(sqlite.contains(r#""Level" integer NOT NULL"#), "{sqlite}");
    }

    #[test]
    fn restricted_statement_renders_on_its_backend_only() {
        let statement = Statement::only(
            Backend::Postgres,
            Table::alter()
                .table(blocks())
                .modify_column(ColumnDef::new(Alias::new("Operations")).big_integer())
                .to_owned(),
        );

        assert_eq!(statement.render(Backend::Sqlite), None);

        let sql = statement.render(Backend::Postgres).unwrap();
        assert!(sql.contains(r#"ALTER COLUMN "Operations" TYPE bigint"#), "{sql}");
    }

    #[test]
    fn inlines_escaped_values() {
        let statement: Statement = Query::update()
            .table(Alias::new("AppState"))
            .value(Alias::new("Chain"), "it's mainnet")
            .and_where(Expr::col(Alias::new("Id")).eq(-1))
            .to_owned()
            .into();

        let sql = statement.render(Backend::Sqlite).unwrap();
        assert!(sql.contains("'it''s mainnet'"), "{sql}");
    }

    #[test]
    fn raw_statement_is_verbatim() {
        let statement = Statement::raw("VACUUM");

        assert_eq!(statement.render(Backend::Sqlite).as_deref(), Some("VACUUM"));
        assert_eq!(statement.render(Backend::Postgres).as_deref(), Some("VACUUM"));
    }

    #[test]
    fn drops_index_by_name() {
        let statement: Statement = Index::drop()
            .name("IX_Blocks_Level")
            .table(blocks())
            .to_owned()
            .into();

        let sql = statement.render(Backend::Sqlite).unwrap();
        assert!(sql.starts_with("DROP INDEX"), "{sql}");
        assert!(sql.contains(r#""IX_Blocks_Level""#), "{sql}");
    }
}
