use clap::{Parser, Subcommand};
use tzindex_migrator::{
    config::{DEFAULT_LEDGER_TABLE, DEFAULT_LOCK_KEY, DEFAULT_LOCK_TABLE},
    ConfigBuilder, MigratorConfig, Plan,
};

#[derive(Parser, Debug)]
#[command(name = "tzindex-migrate")]
#[command(version, about = "Applies and reverts tzindex schema migrations")]
pub struct Args {
    /// Database url, e.g. `sqlite:mainnet.db?mode=rwc` or `postgres://tzindex@localhost/mainnet`
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Table recording applied migrations
    #[arg(long, env = "TZINDEX_LEDGER_TABLE", default_value = DEFAULT_LEDGER_TABLE)]
    pub ledger_table: String,

    /// Table holding the run lock on SQLite
    #[arg(long, env = "TZINDEX_LOCK_TABLE", default_value = DEFAULT_LOCK_TABLE)]
    pub lock_table: String,

    /// Advisory lock key on PostgreSQL
    #[arg(long, env = "TZINDEX_LOCK_KEY", default_value_t = DEFAULT_LOCK_KEY)]
    pub lock_key: i64,

    /// Accept migrations whose SQL changed since they were applied.
    ///
    /// Checksums hash the SQL rendered for the backend, so a query builder
    /// upgrade that changes quoting or spacing reports every applied migration
    /// as modified.
    #[arg(long, env = "TZINDEX_NO_VERIFY_CHECKSUMS")]
    pub no_verify_checksums: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Migrate to the latest schema, or to `--target` in either direction
    Up {
        #[arg(long)]
        target: Option<String>,
    },

    /// Revert to `--target`, or everything with `--all`
    Down {
        #[arg(long, required_unless_present = "all", conflicts_with = "all")]
        target: Option<String>,

        #[arg(long)]
        all: bool,
    },

    /// Print applied and pending migrations
    Status {
        #[arg(long)]
        json: bool,
    },

    /// Print the SQL `up` would execute, without running it
    Script {
        #[arg(long)]
        target: Option<String>,
    },

    /// Remove the lock row left by a crashed run (SQLite)
    Unlock,
}

impl Args {
    pub fn config(&self) -> tzindex_migrator::Result<MigratorConfig> {
        ConfigBuilder::new()
            .ledger_table(&self.ledger_table)
            .lock_table(&self.lock_table)
            .lock_key(self.lock_key)
            .verify_checksums(!self.no_verify_checksums)
            .build()
    }
}

impl Command {
    /// Plan of a migrating command with the schema version it must reach,
    /// `latest` being the newest known migration.
    pub fn plan(&self, latest: Option<&str>) -> Option<(Plan, Option<String>)> {
        match self {
            Command::Up { target: None } | Command::Script { target: None } => {
                Some((Plan::apply_all(), latest.map(str::to_owned)))
            }
            Command::Up {
                target: Some(target),
            }
            | Command::Script {
                target: Some(target),
            } => Some((Plan::target(target), Some(target.to_owned()))),
            Command::Down {
                target: Some(target),
                ..
            } => Some((Plan::revert_to(target), Some(target.to_owned()))),
            Command::Down { all: true, .. } => Some((Plan::revert_all(), None)),
            Command::Down { .. } | Command::Status { .. } | Command::Unlock => None,
        }
    }
}
