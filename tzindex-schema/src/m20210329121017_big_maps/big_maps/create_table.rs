use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::BigMaps;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(BigMaps::Table)
        .col(
            ColumnDef::new(BigMaps::Id)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(BigMaps::Ptr).integer().not_null())
        .col(ColumnDef::new(BigMaps::ContractId).integer().not_null())
        .col(ColumnDef::new(BigMaps::StoragePath).text().not_null())
        .col(ColumnDef::new(BigMaps::Active).boolean().not_null())
        .col(ColumnDef::new(BigMaps::KeyType).blob())
        .col(ColumnDef::new(BigMaps::ValueType).blob())
        .col(ColumnDef::new(BigMaps::FirstLevel).integer().not_null())
        .col(ColumnDef::new(BigMaps::LastLevel).integer().not_null())
        .col(
            ColumnDef::new(BigMaps::TotalKeys)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(BigMaps::ActiveKeys)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(BigMaps::Updates)
                .integer()
                .not_null()
                .default(0),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(BigMaps::Table).to_owned()
}

impl tzindex_migrator::Operation for Operation {
    fn up(&self) -> Vec<Statement> {
        vec![up_statement().into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![down_statement().into()]
    }
}
