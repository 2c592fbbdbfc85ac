//! Mumbai protocol support: smart rollups.

mod smart_rollup_add_messages_ops {
    pub mod create_table;
}
mod smart_rollup_commitments {
    pub mod create_table;
}
mod smart_rollup_originate_ops {
    pub mod create_table;
}

use sea_query::ColumnDef;
use tzindex_migrator::vec_box;

use crate::{
    ops::{AddColumn, CreateIndex},
    table::{AppState, SmartRollupAddMessagesOps, SmartRollupCommitments, SmartRollupOriginateOps},
};

pub struct M20230330074036Mumbai;

tzindex_migrator::migration!(
    M20230330074036Mumbai,
    "20230330074036_Mumbai",
    vec_box![
        smart_rollup_originate_ops::create_table::Operation,
        CreateIndex::new(
            "IX_SmartRollupOriginateOps_Level",
            SmartRollupOriginateOps::Table
        )
        .col(SmartRollupOriginateOps::Level),
        smart_rollup_add_messages_ops::create_table::Operation,
        CreateIndex::new(
            "IX_SmartRollupAddMessagesOps_Level",
            SmartRollupAddMessagesOps::Table
        )
        .col(SmartRollupAddMessagesOps::Level),
        smart_rollup_commitments::create_table::Operation,
        CreateIndex::new(
            "IX_SmartRollupCommitments_SmartRollupId_InboxLevel",
            SmartRollupCommitments::Table
        )
        .col(SmartRollupCommitments::SmartRollupId)
        .col(SmartRollupCommitments::InboxLevel),
        AddColumn::new(
            AppState::Table,
            ColumnDef::new(AppState::SmartRollupOriginateOpsCount)
                .integer()
                .not_null()
                .default(0)
        ),
        AddColumn::new(
            AppState::Table,
            ColumnDef::new(AppState::SmartRollupAddMessagesOpsCount)
                .integer()
                .not_null()
                .default(0)
        ),
    ]
);
