use std::fmt::Write;

use chrono::SecondsFormat;
use tzindex_migrator::{Script, Status};

/// One line per migration: identifier, then `applied at <time>` or
/// `pending`, flagged when the shipped SQL no longer matches the ledger.
pub fn status(status: &Status) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "backend: {}", status.backend);
    let _ = writeln!(
        out,
        "version: {}",
        status.version.as_deref().unwrap_or("none")
    );

    for migration in &status.migrations {
        let state = match migration.applied_at {
            Some(at) => format!("applied at {}", at.to_rfc3339_opts(SecondsFormat::Secs, true)),
            None => "pending".to_owned(),
        };

        let _ = match migration.checksum_matches {
            Some(false) => writeln!(out, "{}  {state}  (checksum mismatch)", migration.id),
            _ => writeln!(out, "{}  {state}", migration.id),
        };
    }

    for entry in &status.unknown {
        let _ = writeln!(out, "{}  unknown to this binary", entry.id);
    }

    out
}

pub fn scripts(scripts: &[Script]) -> String {
    let mut out = String::new();

    for script in scripts {
        let _ = writeln!(out, "-- {} ({})", script.id, script.direction);

        for statement in &script.statements {
            let _ = writeln!(out, "{statement};");
        }
    }

    out
}
