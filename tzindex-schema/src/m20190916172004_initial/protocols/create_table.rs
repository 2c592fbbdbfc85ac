use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::Protocols;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Protocols::Table)
        .col(
            ColumnDef::new(Protocols::Id)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(Protocols::Code).integer().not_null())
        .col(
            ColumnDef::new(Protocols::Hash)
                .string()
                .string_len(51)
                .not_null(),
        )
        .col(ColumnDef::new(Protocols::FirstLevel).integer().not_null())
        .col(ColumnDef::new(Protocols::LastLevel).integer().not_null())
        .col(ColumnDef::new(Protocols::FirstCycle).integer().not_null())
        .col(ColumnDef::new(Protocols::Constants).text())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Protocols::Table).to_owned()
}

impl tzindex_migrator::Operation for Operation {
    fn up(&self) -> Vec<Statement> {
        vec![up_statement().into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![down_statement().into()]
    }
}
