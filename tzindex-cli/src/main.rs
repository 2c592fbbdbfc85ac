//! `tzindex-migrate`: brings a tzindex database to a schema version.
//!
//! ```text
//! DATABASE_URL=postgres://tzindex@localhost/mainnet tzindex-migrate up
//! tzindex-migrate --database-url sqlite:mainnet.db down --target 20221124151948_Lima
//! tzindex-migrate --database-url sqlite:mainnet.db status --json
//! ```
//!
//! Exits with a non-zero status when the schema does not end at the requested
//! version.

mod cli;
mod outcome;
mod output;

use anyhow::Context;
use clap::Parser;
use tzindex_migrator::{CancellationToken, Migration};

use cli::{Args, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let migrator = tzindex_schema::with_config(args.config()?)?;
    let latest = migrator.migrations().last().map(|migration| migration.id());

    let mut conn = tzindex_migrator::connect(&args.database_url)
        .await
        .context("cannot open the database")?;

    match &args.command {
        Command::Status { json } => {
            let status = migrator.status(&mut conn).await?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                print!("{}", output::status(&status));
            }
        }
        Command::Script { .. } => {
            let Some((plan, _)) = args.command.plan(latest) else {
                anyhow::bail!("nothing to migrate to");
            };

            let scripts = migrator.script_for(&mut conn, &plan).await?;
            print!("{}", output::scripts(&scripts));
        }
        Command::Unlock => {
            if migrator.unlock(&mut conn).await? {
                tracing::info!("removed stale migration lock");
            } else {
                tracing::info!("no migration lock to remove");
            }
        }
        Command::Up { .. } | Command::Down { .. } => {
            let Some((plan, expected)) = args.command.plan(latest) else {
                anyhow::bail!("nothing to migrate to");
            };

            let token = CancellationToken::new();
            tokio::spawn({
                let token = token.clone();
                async move {
                    if tokio::signal::ctrl_c().await.is_ok() {
                        tracing::info!("received Ctrl+C, stopping after the current migration");
                        token.cancel();
                    }
                }
            });

            let report = migrator
                .run_until_cancelled(&mut conn, &plan, &token)
                .await?;

            outcome::outcome(&report, expected.as_deref())?;

            tracing::info!(
                "schema version {}, {} migration(s) executed",
                report.version().unwrap_or("none"),
                report.executed.len()
            );
        }
    }

    Ok(())
}
