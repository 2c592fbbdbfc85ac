use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::TransactionOps;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(TransactionOps::Table)
        .col(
            ColumnDef::new(TransactionOps::Id)
                .big_integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(TransactionOps::Level).integer().not_null())
        .col(
            ColumnDef::new(TransactionOps::OpHash)
                .string()
                .string_len(51)
                .not_null(),
        )
        .col(
            ColumnDef::new(TransactionOps::Timestamp)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(TransactionOps::SenderId).integer().not_null())
        .col(ColumnDef::new(TransactionOps::TargetId).integer())
        .col(ColumnDef::new(TransactionOps::Amount).big_integer().not_null())
        .col(ColumnDef::new(TransactionOps::BakerFee).big_integer().not_null())
        .col(ColumnDef::new(TransactionOps::Status).small_integer().not_null())
        .col(ColumnDef::new(TransactionOps::Parameters).text())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(TransactionOps::Table).to_owned()
}

impl tzindex_migrator::Operation for Operation {
    fn up(&self) -> Vec<Statement> {
        vec![up_statement().into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![down_statement().into()]
    }
}
