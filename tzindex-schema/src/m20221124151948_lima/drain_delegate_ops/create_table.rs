use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::DrainDelegateOps;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(DrainDelegateOps::Table)
        .col(
            ColumnDef::new(DrainDelegateOps::Id)
                .big_integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(DrainDelegateOps::Level).integer().not_null())
        .col(
            ColumnDef::new(DrainDelegateOps::OpHash)
                .string()
                .string_len(51)
                .not_null(),
        )
        .col(
            ColumnDef::new(DrainDelegateOps::Timestamp)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(DrainDelegateOps::DelegateId).integer().not_null())
        .col(ColumnDef::new(DrainDelegateOps::TargetId).integer().not_null())
        .col(ColumnDef::new(DrainDelegateOps::Amount).big_integer().not_null())
        .col(ColumnDef::new(DrainDelegateOps::Fee).big_integer().not_null())
        .col(
            ColumnDef::new(DrainDelegateOps::AllocationFee)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(DrainDelegateOps::Table).to_owned()
}

impl tzindex_migrator::Operation for Operation {
    fn up(&self) -> Vec<Statement> {
        vec![up_statement().into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![down_statement().into()]
    }
}
