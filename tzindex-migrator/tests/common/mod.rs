use sqlx::{any::install_default_drivers, migrate::MigrateDatabase, Any, AnyConnection, Connection};
use tzindex_migrator::{Migration, Migrator, Operation, Statement};

#[cfg(feature = "postgres-tests")]
pub mod postgres;

pub const THINGS: &str = "20240101000000_Things";
pub const COLORS: &str = "20240102000000_Colors";
pub const BROKEN: &str = "20240103000000_Broken";
pub const SEEDS: &str = "20240104000000_Seeds";

struct Sql {
    up: &'static str,
    down: &'static str,
}

impl Operation for Sql {
    fn up(&self) -> Vec<Statement> {
        vec![Statement::raw(self.up)]
    }

    fn down(&self) -> Vec<Statement> {
        vec![Statement::raw(self.down)]
    }
}

pub struct TestMigration {
    pub id: &'static str,
    pub operations: Vec<(&'static str, &'static str)>,
}

impl Migration for TestMigration {
    fn id(&self) -> &str {
        self.id
    }

    fn operations(&self) -> Vec<Box<dyn Operation>> {
        self.operations
            .iter()
            .map(|&(up, down)| Box::new(Sql { up, down }) as Box<dyn Operation>)
            .collect()
    }
}

pub fn things() -> TestMigration {
    TestMigration {
        id: THINGS,
        operations: vec![(
            r#"CREATE TABLE "Things" ("Id" integer NOT NULL PRIMARY KEY, "Name" text NOT NULL)"#,
            r#"DROP TABLE "Things""#,
        )],
    }
}

pub fn colors() -> TestMigration {
    TestMigration {
        id: COLORS,
        operations: vec![
            (
                r#"ALTER TABLE "Things" ADD COLUMN "Color" text"#,
                r#"ALTER TABLE "Things" DROP COLUMN "Color""#,
            ),
            (
                r#"CREATE INDEX "IX_Things_Color" ON "Things" ("Color")"#,
                r#"DROP INDEX "IX_Things_Color""#,
            ),
        ],
    }
}

pub fn broken() -> TestMigration {
    TestMigration {
        id: BROKEN,
        operations: vec![
            (
                r#"CREATE TABLE "Orphans" ("Id" integer NOT NULL PRIMARY KEY)"#,
                r#"DROP TABLE "Orphans""#,
            ),
            (
                r#"ALTER TABLE "Missing" ADD COLUMN "Nothing" integer"#,
                r#"ALTER TABLE "Missing" DROP COLUMN "Nothing""#,
            ),
        ],
    }
}

pub fn seeds() -> TestMigration {
    TestMigration {
        id: SEEDS,
        operations: vec![(
            r#"INSERT INTO "Things" ("Id", "Name") VALUES (1, 'tz1'), (2, 'KT1')"#,
            r#"DELETE FROM "Things" WHERE "Id" IN (1, 2)"#,
        )],
    }
}

pub fn migrator(migrations: Vec<TestMigration>) -> anyhow::Result<Migrator> {
    let mut migrator = Migrator::default();

    for migration in migrations {
        migrator.add_migration(Box::new(migration))?;
    }

    Ok(migrator)
}

pub fn database_url(key: &str) -> String {
    format!("sqlite:{}/migrator_{key}.db", env!("CARGO_TARGET_TMPDIR"))
}

/// Recreates an empty database file for `key` and connects to it.
pub async fn create_connection(key: &str) -> anyhow::Result<AnyConnection> {
    install_default_drivers();

    let url = database_url(key);

    let _ = Any::drop_database(&url).await;
    Any::create_database(&url).await?;

    Ok(AnyConnection::connect(&url).await?)
}

/// A second connection to the database created by [`create_connection`].
pub async fn connect_again(key: &str) -> anyhow::Result<AnyConnection> {
    Ok(AnyConnection::connect(&database_url(key)).await?)
}

pub async fn has_table(conn: &mut AnyConnection, table: &str) -> anyhow::Result<bool> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
    )
    .bind(table)
    .fetch_one(conn)
    .await?;

    Ok(count > 0)
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
