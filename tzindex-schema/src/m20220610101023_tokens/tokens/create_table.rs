use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::Tokens;

pub struct Operation;

// Amounts are arbitrary-precision naturals, stored as decimal text.
fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Tokens::Table)
        .col(
            ColumnDef::new(Tokens::Id)
                .big_integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(Tokens::ContractId).integer().not_null())
        .col(ColumnDef::new(Tokens::TokenId).text().not_null())
        .col(ColumnDef::new(Tokens::Standard).small_integer().not_null())
        .col(ColumnDef::new(Tokens::FirstLevel).integer().not_null())
        .col(ColumnDef::new(Tokens::LastLevel).integer().not_null())
        .col(
            ColumnDef::new(Tokens::TransfersCount)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Tokens::BalancesCount)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Tokens::HoldersCount)
                .integer()
                .not_null()
                .default(0),
        )
        .col(ColumnDef::new(Tokens::TotalMinted).text().not_null())
        .col(ColumnDef::new(Tokens::TotalBurned).text().not_null())
        .col(ColumnDef::new(Tokens::TotalSupply).text().not_null())
        .col(ColumnDef::new(Tokens::Metadata).text())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Tokens::Table).to_owned()
}

impl tzindex_migrator::Operation for Operation {
    fn up(&self) -> Vec<Statement> {
        vec![up_statement().into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![down_statement().into()]
    }
}
