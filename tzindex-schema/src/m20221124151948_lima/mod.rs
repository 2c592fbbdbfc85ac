//! Lima protocol support.

mod blocks {
    pub mod widen_operations;
}
mod drain_delegate_ops {
    pub mod create_table;
}
mod update_consensus_key_ops {
    pub mod create_table;
}

use sea_query::ColumnDef;
use tzindex_migrator::vec_box;

use crate::{
    ops::{AddColumn, CreateIndex},
    table::{AppState, DrainDelegateOps, UpdateConsensusKeyOps},
};

/// Migration for the Lima protocol.
///
/// ## Changes
///
/// 1. **Widens `Blocks.Operations` to 64 bits** - Lima introduced more
///    operation kinds than the 32-bit bitmask can hold.
/// 2. **Creates `DrainDelegateOps` and `UpdateConsensusKeyOps`**, with their
///    counters on `AppState`.
///
/// ## Database-Specific Notes
///
/// - **SQLite**: The column widening is a no-op, integers are stored on up to
///   8 bytes regardless of the declared type.
/// - **PostgreSQL**: Uses `ALTER COLUMN ... TYPE bigint`.
pub struct M20221124151948Lima;

tzindex_migrator::migration!(
    M20221124151948Lima,
    "20221124151948_Lima",
    vec_box![
        blocks::widen_operations::Operation,
        drain_delegate_ops::create_table::Operation,
        CreateIndex::new("IX_DrainDelegateOps_Level", DrainDelegateOps::Table)
            .col(DrainDelegateOps::Level),
        update_consensus_key_ops::create_table::Operation,
        CreateIndex::new("IX_UpdateConsensusKeyOps_Level", UpdateConsensusKeyOps::Table)
            .col(UpdateConsensusKeyOps::Level),
        AddColumn::new(
            AppState::Table,
            ColumnDef::new(AppState::DrainDelegateOpsCount)
                .integer()
                .not_null()
                .default(0)
        ),
        AddColumn::new(
            AppState::Table,
            ColumnDef::new(AppState::UpdateConsensusKeyOpsCount)
                .integer()
                .not_null()
                .default(0)
        ),
    ]
);
