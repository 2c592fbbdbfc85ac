use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::EndorsementOps;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(EndorsementOps::Table)
        .col(
            ColumnDef::new(EndorsementOps::Id)
                .big_integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(EndorsementOps::Level).integer().not_null())
        .col(
            ColumnDef::new(EndorsementOps::OpHash)
                .string()
                .string_len(51)
                .not_null(),
        )
        .col(
            ColumnDef::new(EndorsementOps::Timestamp)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(EndorsementOps::DelegateId).integer().not_null())
        .col(ColumnDef::new(EndorsementOps::Slots).integer().not_null())
        .col(
            ColumnDef::new(EndorsementOps::Reward)
                .big_integer()
                .not_null()
                .default(0),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(EndorsementOps::Table).to_owned()
}

impl tzindex_migrator::Operation for Operation {
    fn up(&self) -> Vec<Statement> {
        vec![up_statement().into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![down_statement().into()]
    }
}
