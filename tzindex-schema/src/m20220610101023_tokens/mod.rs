//! FA1.2 and FA2 token indexing.

mod token_balances {
    pub mod create_table;
}
mod token_transfers {
    pub mod create_table;
}
mod tokens {
    pub mod create_table;
}

use sea_query::ColumnDef;
use tzindex_migrator::vec_box;

use crate::{
    ops::{AddColumn, CreateIndex},
    table::{Accounts, AppState, TokenBalances, TokenTransfers, Tokens},
};

/// Creates the token tables and their counters on `AppState` and `Accounts`.
pub struct M20220610101023Tokens;

tzindex_migrator::migration!(
    M20220610101023Tokens,
    "20220610101023_Tokens",
    vec_box![
        tokens::create_table::Operation,
        CreateIndex::new("IX_Tokens_ContractId_TokenId", Tokens::Table)
            .col(Tokens::ContractId)
            .col(Tokens::TokenId)
            .unique(),
        token_balances::create_table::Operation,
        CreateIndex::new("IX_TokenBalances_AccountId_TokenId", TokenBalances::Table)
            .col(TokenBalances::AccountId)
            .col(TokenBalances::TokenId)
            .unique(),
        CreateIndex::new("IX_TokenBalances_TokenId", TokenBalances::Table)
            .col(TokenBalances::TokenId),
        token_transfers::create_table::Operation,
        CreateIndex::new("IX_TokenTransfers_Level", TokenTransfers::Table)
            .col(TokenTransfers::Level),
        CreateIndex::new("IX_TokenTransfers_TokenId", TokenTransfers::Table)
            .col(TokenTransfers::TokenId),
        AddColumn::new(
            AppState::Table,
            ColumnDef::new(AppState::TokensCount)
                .integer()
                .not_null()
                .default(0)
        ),
        AddColumn::new(
            AppState::Table,
            ColumnDef::new(AppState::TokenBalancesCount)
                .integer()
                .not_null()
                .default(0)
        ),
        AddColumn::new(
            AppState::Table,
            ColumnDef::new(AppState::TokenTransfersCount)
                .integer()
                .not_null()
                .default(0)
        ),
        AddColumn::new(
            Accounts::Table,
            ColumnDef::new(Accounts::ActiveTokensCount)
                .integer()
                .not_null()
                .default(0)
        ),
        AddColumn::new(
            Accounts::Table,
            ColumnDef::new(Accounts::TokenBalancesCount)
                .integer()
                .not_null()
                .default(0)
        ),
    ]
);
