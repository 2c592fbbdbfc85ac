use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::RevealOps;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(RevealOps::Table)
        .col(
            ColumnDef::new(RevealOps::Id)
                .big_integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(RevealOps::Level).integer().not_null())
        .col(
            ColumnDef::new(RevealOps::OpHash)
                .string()
                .string_len(51)
                .not_null(),
        )
        .col(
            ColumnDef::new(RevealOps::Timestamp)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(RevealOps::SenderId).integer().not_null())
        .col(ColumnDef::new(RevealOps::BakerFee).big_integer().not_null())
        .col(ColumnDef::new(RevealOps::Status).small_integer().not_null())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(RevealOps::Table).to_owned()
}

impl tzindex_migrator::Operation for Operation {
    fn up(&self) -> Vec<Statement> {
        vec![up_statement().into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![down_statement().into()]
    }
}
