//! Big map storage of smart contracts.

mod big_map_keys {
    pub mod create_table;
}
mod big_map_updates {
    pub mod create_table;
}
mod big_maps {
    pub mod create_table;
}

use tzindex_migrator::vec_box;

use crate::{
    ops::CreateIndex,
    table::{BigMapKeys, BigMapUpdates, BigMaps},
};

pub struct M20210329121017BigMaps;

tzindex_migrator::migration!(
    M20210329121017BigMaps,
    "20210329121017_BigMaps",
    vec_box![
        big_maps::create_table::Operation,
        CreateIndex::new("IX_BigMaps_Ptr", BigMaps::Table)
            .col(BigMaps::Ptr)
            .unique(),
        CreateIndex::new("IX_BigMaps_ContractId", BigMaps::Table).col(BigMaps::ContractId),
        big_map_keys::create_table::Operation,
        CreateIndex::new("IX_BigMapKeys_BigMapPtr_KeyHash", BigMapKeys::Table)
            .col(BigMapKeys::BigMapPtr)
            .col(BigMapKeys::KeyHash),
        big_map_updates::create_table::Operation,
        CreateIndex::new("IX_BigMapUpdates_BigMapPtr", BigMapUpdates::Table)
            .col(BigMapUpdates::BigMapPtr),
        CreateIndex::new("IX_BigMapUpdates_Level", BigMapUpdates::Table)
            .col(BigMapUpdates::Level),
    ]
);
