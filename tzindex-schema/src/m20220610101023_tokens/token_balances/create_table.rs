use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::TokenBalances;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(TokenBalances::Table)
        .col(
            ColumnDef::new(TokenBalances::Id)
                .big_integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(TokenBalances::AccountId).integer().not_null())
        .col(ColumnDef::new(TokenBalances::TokenId).big_integer().not_null())
        .col(ColumnDef::new(TokenBalances::Balance).text().not_null())
        .col(ColumnDef::new(TokenBalances::FirstLevel).integer().not_null())
        .col(ColumnDef::new(TokenBalances::LastLevel).integer().not_null())
        .col(
            ColumnDef::new(TokenBalances::TransfersCount)
                .integer()
                .not_null()
                .default(0),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(TokenBalances::Table).to_owned()
}

impl tzindex_migrator::Operation for Operation {
    fn up(&self) -> Vec<Statement> {
        vec![up_statement().into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![down_statement().into()]
    }
}
