//! Second baseline: `Addresses` becomes `Accounts`, delegation tracking,
//! reveals and cycles.

mod cycles {
    pub mod create_table;
}
mod reveal_ops {
    pub mod create_table;
}

use sea_query::ColumnDef;
use tzindex_migrator::vec_box;

use crate::{
    ops::{AddColumn, CreateIndex, RenameTable, Revert},
    table::{Accounts, Addresses, AppState, RevealOps},
};

/// Renames `Addresses` to `Accounts` and adds the tables of the second
/// baseline.
///
/// ## Changes
///
/// 1. **Renames `Addresses` to `Accounts`** - The unique address index is
///    dropped first and recreated as `IX_Accounts_Address`.
/// 2. **Adds `Accounts.DelegateId` and `Accounts.DelegationLevel`**, indexed
///    by delegate.
/// 3. **Creates `RevealOps` and `Cycles`**, with a reveal counter on
///    `AppState`.
pub struct M20191113225956Initial;

tzindex_migrator::migration!(
    M20191113225956Initial,
    "20191113225956_Initial",
    vec_box![
        Revert(
            CreateIndex::new("IX_Addresses_Address", Addresses::Table)
                .col(Addresses::Address)
                .unique()
        ),
        RenameTable::new(Addresses::Table, Accounts::Table),
        CreateIndex::new("IX_Accounts_Address", Accounts::Table)
            .col(Accounts::Address)
            .unique(),
        AddColumn::new(
            Accounts::Table,
            ColumnDef::new(Accounts::DelegateId).integer().null()
        ),
        AddColumn::new(
            Accounts::Table,
            ColumnDef::new(Accounts::DelegationLevel).integer().null()
        ),
        CreateIndex::new("IX_Accounts_DelegateId", Accounts::Table).col(Accounts::DelegateId),
        reveal_ops::create_table::Operation,
        CreateIndex::new("IX_RevealOps_Level", RevealOps::Table).col(RevealOps::Level),
        AddColumn::new(
            AppState::Table,
            ColumnDef::new(AppState::RevealOpsCount)
                .integer()
                .not_null()
                .default(0)
        ),
        cycles::create_table::Operation,
    ]
);
