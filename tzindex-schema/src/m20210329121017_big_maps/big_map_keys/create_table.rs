use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::BigMapKeys;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(BigMapKeys::Table)
        .col(
            ColumnDef::new(BigMapKeys::Id)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(BigMapKeys::BigMapPtr).integer().not_null())
        .col(ColumnDef::new(BigMapKeys::Active).boolean().not_null())
        .col(
            ColumnDef::new(BigMapKeys::KeyHash)
                .string()
                .string_len(54)
                .not_null(),
        )
        .col(ColumnDef::new(BigMapKeys::RawKey).blob().not_null())
        .col(ColumnDef::new(BigMapKeys::JsonKey).text().not_null())
        .col(ColumnDef::new(BigMapKeys::RawValue).blob().not_null())
        .col(ColumnDef::new(BigMapKeys::JsonValue).text().not_null())
        .col(ColumnDef::new(BigMapKeys::FirstLevel).integer().not_null())
        .col(ColumnDef::new(BigMapKeys::LastLevel).integer().not_null())
        .col(
            ColumnDef::new(BigMapKeys::Updates)
                .integer()
                .not_null()
                .default(0),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(BigMapKeys::Table).to_owned()
}

impl tzindex_migrator::Operation for Operation {
    fn up(&self) -> Vec<Statement> {
        vec![up_statement().into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![down_statement().into()]
    }
}
