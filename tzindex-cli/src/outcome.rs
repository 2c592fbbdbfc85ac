use tzindex_migrator::{Report, RunState};

/// Turns a finished run into the process exit status: the run must have
/// completed and left the schema at `expected`.
pub fn outcome(report: &Report, expected: Option<&str>) -> anyhow::Result<()> {
    let version = report.version().unwrap_or("none");

    if report.state == RunState::Cancelled {
        anyhow::bail!("cancelled at schema version {version}");
    }

    if report.state != RunState::Succeeded {
        anyhow::bail!("run ended {:?} at schema version {version}", report.state);
    }

    if report.version() != expected {
        anyhow::bail!(
            "schema version is {version}, expected {}",
            expected.unwrap_or("none")
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use tzindex_migrator::{Direction, Executed, LedgerEntry};

    use super::*;

    const INITIAL: &str = "20190916172004_Initial";
    const LIMA: &str = "20221124151948_Lima";

    fn report(state: RunState, ledger: &[&str]) -> Report {
        Report {
            state,
            executed: vec![Executed {
                id: LIMA.to_owned(),
                direction: Direction::Up,
            }],
            ledger: ledger
                .iter()
                .map(|id| LedgerEntry {
                    id: id.to_string(),
                    checksum: String::new(),
                    applied_at: Utc::now(),
                })
                .collect(),
        }
    }

    #[test]
    fn reaching_the_target_succeeds() {
        assert!(outcome(&report(RunState::Succeeded, &[INITIAL, LIMA]), Some(LIMA)).is_ok());
        assert!(outcome(&report(RunState::Succeeded, &[]), None).is_ok());
    }

    #[test]
    fn cancelled_run_fails() {
        let err = outcome(&report(RunState::Cancelled, &[INITIAL]), Some(LIMA)).unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("cancelled at schema version {INITIAL}")
        );

        // even when cancellation came after the last migration was committed
        assert!(outcome(&report(RunState::Cancelled, &[INITIAL, LIMA]), Some(LIMA)).is_err());
    }

    #[test]
    fn other_version_fails() {
        let err = outcome(&report(RunState::Succeeded, &[INITIAL]), Some(LIMA)).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("schema version is {INITIAL}, expected {LIMA}")
        );

        let err = outcome(&report(RunState::Succeeded, &[INITIAL]), None).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("schema version is {INITIAL}, expected none")
        );
    }
}
