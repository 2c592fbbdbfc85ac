use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::DelegationOps;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(DelegationOps::Table)
        .col(
            ColumnDef::new(DelegationOps::Id)
                .big_integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(DelegationOps::Level).integer().not_null())
        .col(
            ColumnDef::new(DelegationOps::OpHash)
                .string()
                .string_len(51)
                .not_null(),
        )
        .col(
            ColumnDef::new(DelegationOps::Timestamp)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(DelegationOps::SenderId).integer().not_null())
        .col(ColumnDef::new(DelegationOps::DelegateId).integer())
        .col(ColumnDef::new(DelegationOps::PrevDelegateId).integer())
        .col(ColumnDef::new(DelegationOps::BakerFee).big_integer().not_null())
        .col(ColumnDef::new(DelegationOps::Status).small_integer().not_null())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(DelegationOps::Table).to_owned()
}

impl tzindex_migrator::Operation for Operation {
    fn up(&self) -> Vec<Statement> {
        vec![up_statement().into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![down_statement().into()]
    }
}
