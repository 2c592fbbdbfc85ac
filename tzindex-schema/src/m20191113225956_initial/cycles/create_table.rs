use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::Cycles;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Cycles::Table)
        .col(
            ColumnDef::new(Cycles::Index)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(Cycles::FirstLevel).integer().not_null())
        .col(ColumnDef::new(Cycles::LastLevel).integer().not_null())
        .col(ColumnDef::new(Cycles::SnapshotIndex).integer().not_null())
        .col(ColumnDef::new(Cycles::SnapshotLevel).integer().not_null())
        .col(
            ColumnDef::new(Cycles::Seed)
                .string()
                .string_len(64)
                .not_null(),
        )
        .col(ColumnDef::new(Cycles::TotalBakers).integer().not_null())
        .col(ColumnDef::new(Cycles::TotalStaking).big_integer().not_null())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Cycles::Table).to_owned()
}

impl tzindex_migrator::Operation for Operation {
    fn up(&self) -> Vec<Statement> {
        vec![up_statement().into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![down_statement().into()]
    }
}
