use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::BigMapUpdates;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(BigMapUpdates::Table)
        .col(
            ColumnDef::new(BigMapUpdates::Id)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(BigMapUpdates::BigMapPtr).integer().not_null())
        .col(ColumnDef::new(BigMapUpdates::Action).small_integer().not_null())
        .col(ColumnDef::new(BigMapUpdates::Level).integer().not_null())
        .col(ColumnDef::new(BigMapUpdates::TransactionId).big_integer())
        .col(ColumnDef::new(BigMapUpdates::BigMapKeyId).integer())
        .col(ColumnDef::new(BigMapUpdates::RawValue).blob())
        .col(ColumnDef::new(BigMapUpdates::JsonValue).text())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(BigMapUpdates::Table).to_owned()
}

impl tzindex_migrator::Operation for Operation {
    fn up(&self) -> Vec<Statement> {
        vec![up_statement().into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![down_statement().into()]
    }
}
