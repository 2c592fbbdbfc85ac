#![cfg(feature = "postgres-tests")]

mod common;

use common::{broken, colors, migrator, postgres, seeds, things, BROKEN, COLORS, SEEDS, THINGS};
use tzindex_migrator::{
    table_exists, Backend, ConfigBuilder, MigrateError, MigrationLock, Plan, RunState,
};

fn ledger_ids(report: &tzindex_migrator::Report) -> Vec<&str> {
    report.ledger.iter().map(|entry| entry.id.as_str()).collect()
}

#[tokio::test]
async fn apply_and_revert() -> anyhow::Result<()> {
    let mut conn = postgres::create_connection("apply_and_revert").await?;
    let migrator = migrator(vec![things(), colors(), seeds()])?;

    let report = migrator.run(&mut conn, &Plan::apply_all()).await?;

    assert_eq!(report.state, RunState::Succeeded);
    assert_eq!(ledger_ids(&report), vec![THINGS, COLORS, SEEDS]);
    assert!(table_exists(&mut conn, Backend::Postgres, "Things").await?);
    assert!(table_exists(&mut conn, Backend::Postgres, "__MigrationsHistory").await?);
    assert!(!table_exists(&mut conn, Backend::Postgres, "__MigrationsLock").await?);

    let count = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "Things""#)
        .fetch_one(&mut conn)
        .await?;
    assert_eq!(count, 2);

    let status = migrator.status(&mut conn).await?;
    assert_eq!(status.backend, Backend::Postgres);
    assert_eq!(status.version.as_deref(), Some(SEEDS));
    assert!(status
        .migrations
        .iter()
        .all(|migration| migration.checksum_matches == Some(true)));

    let rerun = migrator.run(&mut conn, &Plan::apply_all()).await?;
    assert!(rerun.executed.is_empty());

    let report = migrator.run(&mut conn, &Plan::revert_all()).await?;

    assert!(report.ledger.is_empty());
    assert!(!table_exists(&mut conn, Backend::Postgres, "Things").await?);

    Ok(())
}

#[tokio::test]
async fn failing_migration_rolls_back_its_ddl() -> anyhow::Result<()> {
    let mut conn = postgres::create_connection("failing_migration").await?;
    let migrator = migrator(vec![things(), broken()])?;

    let err = migrator
        .run(&mut conn, &Plan::apply_all())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        MigrateError::MigrationApplyFailure { ref id, ref last_applied, .. }
            if id == BROKEN && last_applied.as_deref() == Some(THINGS)
    ));

    // the table created before the failing statement is gone with the transaction
    assert!(!table_exists(&mut conn, Backend::Postgres, "Orphans").await?);
    assert!(table_exists(&mut conn, Backend::Postgres, "Things").await?);
    assert_eq!(
        migrator.status(&mut conn).await?.version.as_deref(),
        Some(THINGS)
    );

    Ok(())
}

#[tokio::test]
async fn concurrent_run_is_rejected_by_advisory_lock() -> anyhow::Result<()> {
    let mut holder = postgres::create_connection("advisory_lock").await?;
    let mut conn = postgres::connect_again("advisory_lock").await?;

    let mut migrator = migrator(vec![things()])?;
    migrator.set_config(ConfigBuilder::new().lock_key(4_242).build()?);

    let lock = MigrationLock::acquire(&mut holder, Backend::Postgres, migrator.config()).await?;

    let err = migrator
        .run(&mut conn, &Plan::apply_all())
        .await
        .unwrap_err();
    assert!(matches!(err, MigrateError::ConcurrentRunDetected));
    assert!(!table_exists(&mut conn, Backend::Postgres, "Things").await?);

    // advisory locks end with their session, there is nothing to force
    assert!(!migrator.unlock(&mut conn).await?);

    lock.release(&mut holder).await?;

    let report = migrator.run(&mut conn, &Plan::apply_all()).await?;
    assert_eq!(report.version(), Some(THINGS));

    let free = sqlx::query_scalar::<_, bool>("SELECT pg_try_advisory_lock(4242)")
        .fetch_one(&mut holder)
        .await?;
    assert!(free, "the run kept the advisory lock");

    sqlx::query_scalar::<_, bool>("SELECT pg_advisory_unlock(4242)")
        .fetch_one(&mut holder)
        .await?;

    Ok(())
}
