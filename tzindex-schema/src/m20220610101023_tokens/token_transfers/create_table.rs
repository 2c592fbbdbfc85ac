use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::TokenTransfers;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(TokenTransfers::Table)
        .col(
            ColumnDef::new(TokenTransfers::Id)
                .big_integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(TokenTransfers::Level).integer().not_null())
        .col(ColumnDef::new(TokenTransfers::TokenId).big_integer().not_null())
        .col(ColumnDef::new(TokenTransfers::FromId).integer())
        .col(ColumnDef::new(TokenTransfers::ToId).integer())
        .col(ColumnDef::new(TokenTransfers::Amount).text().not_null())
        .col(ColumnDef::new(TokenTransfers::TransactionId).big_integer())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(TokenTransfers::Table).to_owned()
}

impl tzindex_migrator::Operation for Operation {
    fn up(&self) -> Vec<Statement> {
        vec![up_statement().into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![down_statement().into()]
    }
}
