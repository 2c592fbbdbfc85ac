use std::collections::{BTreeMap, BTreeSet};

use sqlx::{any::install_default_drivers, migrate::MigrateDatabase, Any, AnyConnection, Connection};

#[cfg(feature = "postgres-tests")]
pub mod postgres;

pub const INITIAL: &str = "20190916172004_Initial";
pub const ACCOUNTS: &str = "20191113225956_Initial";
pub const TOKENS: &str = "20220610101023_Tokens";
pub const LIMA: &str = "20221124151948_Lima";
pub const MUMBAI: &str = "20230330074036_Mumbai";
pub const ATTESTATIONS: &str = "20250617133541_Attestations";

/// Columns as `(name, declared type, not null)` and index names of a table.
#[derive(Debug, PartialEq, Eq)]
pub struct TableShape {
    pub columns: Vec<(String, String, i64)>,
    pub indexes: BTreeSet<String>,
}

/// Every indexer table, bookkeeping tables of the migrator left out.
pub type Snapshot = BTreeMap<String, TableShape>;

/// Recreates an empty database file for `key` and connects to it.
pub async fn create_connection(key: &str) -> anyhow::Result<AnyConnection> {
    install_default_drivers();

    let url = format!("sqlite:{}/schema_{key}.db", env!("CARGO_TARGET_TMPDIR"));

    let _ = Any::drop_database(&url).await;
    Any::create_database(&url).await?;

    Ok(AnyConnection::connect(&url).await?)
}

pub async fn snapshot(conn: &mut AnyConnection) -> anyhow::Result<Snapshot> {
    let tables = sqlx::query_scalar::<_, String>(
        "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
    )
    .fetch_all(&mut *conn)
    .await?;

    let mut snapshot = Snapshot::new();

    for table in tables
        .into_iter()
        .filter(|table| !table.starts_with("__") && !table.starts_with("sqlite_"))
    {
        let columns = sqlx::query_as::<_, (String, String, i64)>(
            r#"SELECT name, type, "notnull" FROM pragma_table_info(?) ORDER BY cid"#,
        )
        .bind(&table)
        .fetch_all(&mut *conn)
        .await?;

        let indexes = sqlx::query_scalar::<_, String>(
            "SELECT name FROM sqlite_master WHERE type = 'index' AND tbl_name = ?",
        )
        .bind(&table)
        .fetch_all(&mut *conn)
        .await?
        .into_iter()
        .filter(|index| !index.starts_with("sqlite_autoindex"))
        .collect();

        snapshot.insert(table, TableShape { columns, indexes });
    }

    Ok(snapshot)
}

pub async fn has_column(conn: &mut AnyConnection, table: &str, column: &str) -> anyhow::Result<bool> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM pragma_table_info(?) WHERE name = ?",
    )
    .bind(table)
    .bind(column)
    .fetch_one(conn)
    .await?;

    Ok(count > 0)
}
