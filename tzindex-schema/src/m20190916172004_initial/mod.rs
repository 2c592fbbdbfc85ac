//! The first schema: chain state, protocols, addresses, blocks and the
//! operation tables indexed since the Athens protocol.

mod addresses {
    pub mod create_table;
}
mod app_state {
    pub mod create_table;
    pub mod seed;
}
mod blocks {
    pub mod create_table;
}
mod delegation_ops {
    pub mod create_table;
}
mod endorsement_ops {
    pub mod create_table;
}
mod protocols {
    pub mod create_table;
}
mod transaction_ops {
    pub mod create_table;
}

use tzindex_migrator::vec_box;

use crate::{
    ops::CreateIndex,
    table::{Addresses, Blocks, DelegationOps, EndorsementOps, Protocols, TransactionOps},
};

pub use app_state::seed::GENESIS_LEVEL;

/// Creates the initial tables and seeds the single `AppState` row.
///
/// Accounts are stored in `Addresses` until
/// [`M20191113225956Initial`](crate::M20191113225956Initial) renames the table.
pub struct M20190916172004Initial;

tzindex_migrator::migration!(
    M20190916172004Initial,
    "20190916172004_Initial",
    vec_box![
        app_state::create_table::Operation,
        app_state::seed::Operation,
        protocols::create_table::Operation,
        CreateIndex::new("IX_Protocols_Code", Protocols::Table)
            .col(Protocols::Code)
            .unique(),
        addresses::create_table::Operation,
        CreateIndex::new("IX_Addresses_Address", Addresses::Table)
            .col(Addresses::Address)
            .unique(),
        blocks::create_table::Operation,
        CreateIndex::new("IX_Blocks_Level", Blocks::Table)
            .col(Blocks::Level)
            .unique(),
        CreateIndex::new("IX_Blocks_Hash", Blocks::Table)
            .col(Blocks::Hash)
            .unique(),
        endorsement_ops::create_table::Operation,
        CreateIndex::new("IX_EndorsementOps_Level", EndorsementOps::Table)
            .col(EndorsementOps::Level),
        CreateIndex::new("IX_EndorsementOps_OpHash", EndorsementOps::Table)
            .col(EndorsementOps::OpHash),
        transaction_ops::create_table::Operation,
        CreateIndex::new("IX_TransactionOps_Level", TransactionOps::Table)
            .col(TransactionOps::Level),
        CreateIndex::new("IX_TransactionOps_OpHash", TransactionOps::Table)
            .col(TransactionOps::OpHash),
        delegation_ops::create_table::Operation,
        CreateIndex::new("IX_DelegationOps_Level", DelegationOps::Table)
            .col(DelegationOps::Level),
    ]
);
