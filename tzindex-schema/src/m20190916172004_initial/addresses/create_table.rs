use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::Addresses;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Addresses::Table)
        .col(
            ColumnDef::new(Addresses::Id)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Addresses::Address)
                .string()
                .string_len(36)
                .not_null(),
        )
        .col(ColumnDef::new(Addresses::Type).small_integer().not_null())
        .col(
            ColumnDef::new(Addresses::Balance)
                .big_integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Addresses::Counter)
                .integer()
                .not_null()
                .default(0),
        )
        .col(ColumnDef::new(Addresses::FirstLevel).integer().not_null())
        .col(ColumnDef::new(Addresses::LastLevel).integer().not_null())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Addresses::Table).to_owned()
}

impl tzindex_migrator::Operation for Operation {
    fn up(&self) -> Vec<Statement> {
        vec![up_statement().into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![down_statement().into()]
    }
}
