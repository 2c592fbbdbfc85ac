//! Governance and baking rights.

mod baker_cycles {
    pub mod create_table;
}
mod voting_periods {
    pub mod create_table;
}

use tzindex_migrator::vec_box;

use crate::{
    ops::CreateIndex,
    table::{BakerCycles, VotingPeriods},
};

/// Creates `VotingPeriods` and the per-cycle baker statistics in
/// `BakerCycles`.
pub struct M20200210110506Voting;

tzindex_migrator::migration!(
    M20200210110506Voting,
    "20200210110506_Voting",
    vec_box![
        voting_periods::create_table::Operation,
        CreateIndex::new("IX_VotingPeriods_Index", VotingPeriods::Table)
            .col(VotingPeriods::Index)
            .unique(),
        baker_cycles::create_table::Operation,
        CreateIndex::new("IX_BakerCycles_Cycle_BakerId", BakerCycles::Table)
            .col(BakerCycles::Cycle)
            .col(BakerCycles::BakerId)
            .unique(),
        CreateIndex::new("IX_BakerCycles_BakerId", BakerCycles::Table).col(BakerCycles::BakerId),
    ]
);
