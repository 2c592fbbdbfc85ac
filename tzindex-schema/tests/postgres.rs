#![cfg(feature = "postgres-tests")]

mod common;

use common::{
    postgres::{column_type, create_connection, snapshot},
    ATTESTATIONS, LIMA, MUMBAI, TOKENS,
};
use tzindex_migrator::{table_exists, Backend, Plan};

#[tokio::test]
async fn lima_widens_block_operations_to_bigint() -> anyhow::Result<()> {
    let mut conn = create_connection("lima_widens_block_operations").await?;
    let migrator = tzindex_schema::new()?;

    migrator.run(&mut conn, &Plan::target(TOKENS)).await?;
    assert_eq!(
        column_type(&mut conn, "Blocks", "Operations").await?.as_deref(),
        Some("integer")
    );

    let report = migrator.run(&mut conn, &Plan::target(LIMA)).await?;
    assert_eq!(report.version(), Some(LIMA));

    let schema = snapshot(&mut conn).await?;
    assert!(schema["Blocks"]
        .columns
        .contains(&("Operations".to_owned(), "bigint".to_owned(), 1)));

    let operations = 5_000_000_000_i64;
    sqlx::query(&format!(
        r#"INSERT INTO "Blocks" ("Id", "Level", "Hash", "Timestamp", "ProtoCode", "Operations")
        VALUES (1, 2981889, 'BLockGenesisGenesisGenesisGenesisGenesisb83baZgbyZe', '2022-12-20T15:35:00Z', 15, {operations})"#
    ))
    .execute(&mut conn)
    .await?;

    let stored = sqlx::query_scalar::<_, i64>(r#"SELECT "Operations" FROM "Blocks" WHERE "Id" = 1"#)
        .fetch_one(&mut conn)
        .await?;
    assert_eq!(stored, operations);

    // narrowing back needs every value to fit 32 bits
    sqlx::query(r#"DELETE FROM "Blocks""#).execute(&mut conn).await?;

    migrator.run(&mut conn, &Plan::target(TOKENS)).await?;
    assert_eq!(
        column_type(&mut conn, "Blocks", "Operations").await?.as_deref(),
        Some("integer")
    );

    migrator.run(&mut conn, &Plan::apply_all()).await?;
    assert_eq!(
        column_type(&mut conn, "Blocks", "Operations").await?.as_deref(),
        Some("bigint")
    );

    Ok(())
}

#[tokio::test]
async fn attestations_round_trip() -> anyhow::Result<()> {
    let mut conn = create_connection("attestations_round_trip").await?;
    let migrator = tzindex_schema::new()?;

    migrator.run(&mut conn, &Plan::target(MUMBAI)).await?;

    sqlx::query(
        r#"INSERT INTO "EndorsementOps" ("Id", "Level", "OpHash", "Timestamp", "DelegateId", "Slots")
        VALUES
            (1, 100, 'ooEndorsementOne', '2023-04-01T00:00:00Z', 7, 3),
            (2, 101, 'ooEndorsementTwo', '2023-04-01T00:00:30Z', 8, 5)"#,
    )
    .execute(&mut conn)
    .await?;

    let report = migrator.run(&mut conn, &Plan::apply_all()).await?;
    assert_eq!(report.version(), Some(ATTESTATIONS));

    assert!(table_exists(&mut conn, Backend::Postgres, "AttestationOps").await?);
    assert!(!table_exists(&mut conn, Backend::Postgres, "EndorsementOps").await?);

    let rows = sqlx::query_as::<_, (i64, String, i64)>(
        r#"SELECT CAST("Id" AS bigint), "OpHash", CAST("Slots" AS bigint)
        FROM "AttestationOps" ORDER BY "Id""#,
    )
    .fetch_all(&mut conn)
    .await?;
    assert_eq!(
        rows,
        vec![
            (1, "ooEndorsementOne".to_owned(), 3),
            (2, "ooEndorsementTwo".to_owned(), 5),
        ]
    );

    let schema = snapshot(&mut conn).await?;
    let indexes = &schema["AttestationOps"].indexes;
    assert!(indexes.contains("IX_AttestationOps_Level"));
    assert!(indexes.contains("IX_AttestationOps_OpHash"));
    assert!(column_type(&mut conn, "AppState", "AttestationOpsCount").await?.is_some());
    assert!(column_type(&mut conn, "BakerCycles", "AttestationRewards").await?.is_some());

    let report = migrator.run(&mut conn, &Plan::target(MUMBAI)).await?;
    assert_eq!(report.version(), Some(MUMBAI));

    assert!(table_exists(&mut conn, Backend::Postgres, "EndorsementOps").await?);
    assert!(!table_exists(&mut conn, Backend::Postgres, "AttestationOps").await?);

    let count = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "EndorsementOps""#)
        .fetch_one(&mut conn)
        .await?;
    assert_eq!(count, 2);

    let schema = snapshot(&mut conn).await?;
    let indexes = &schema["EndorsementOps"].indexes;
    assert!(indexes.contains("IX_EndorsementOps_Level"));
    assert!(indexes.contains("IX_EndorsementOps_OpHash"));
    assert!(column_type(&mut conn, "AppState", "EndorsementOpsCount").await?.is_some());
    assert!(column_type(&mut conn, "AppState", "AttestationOpsCount").await?.is_none());
    assert!(column_type(&mut conn, "BakerCycles", "ExpectedEndorsements").await?.is_some());

    let report = migrator.run(&mut conn, &Plan::apply_all()).await?;
    assert_eq!(report.version(), Some(ATTESTATIONS));

    Ok(())
}

#[tokio::test]
async fn every_migration_reverts_cleanly() -> anyhow::Result<()> {
    let mut conn = create_connection("every_migration_reverts_cleanly").await?;
    let migrator = tzindex_schema::new()?;
    let ids = migrator
        .migrations()
        .iter()
        .map(|migration| migration.id().to_owned())
        .collect::<Vec<_>>();

    let mut before = snapshot(&mut conn).await?;

    for (index, id) in ids.iter().enumerate() {
        migrator.run(&mut conn, &Plan::target(id)).await?;
        let after = snapshot(&mut conn).await?;
        assert_ne!(after, before, "{id} changed nothing");

        let previous = match index {
            0 => Plan::revert_all(),
            _ => Plan::revert_to(&ids[index - 1]),
        };
        migrator.run(&mut conn, &previous).await?;
        assert_eq!(snapshot(&mut conn).await?, before, "{id} did not revert cleanly");

        migrator.run(&mut conn, &Plan::target(id)).await?;
        assert_eq!(snapshot(&mut conn).await?, after, "{id} did not reapply cleanly");

        before = after;
    }

    for table in ["AppState", "Protocols", "Blocks", "Accounts", "AttestationOps"] {
        assert!(before.contains_key(table), "{table} is missing");
    }

    let report = migrator.run(&mut conn, &Plan::revert_all()).await?;
    assert!(report.ledger.is_empty());
    assert!(snapshot(&mut conn).await?.is_empty());

    Ok(())
}
