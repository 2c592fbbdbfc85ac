use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::Blocks;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Blocks::Table)
        .col(
            ColumnDef::new(Blocks::Id)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(Blocks::Level).integer().not_null())
        .col(
            ColumnDef::new(Blocks::Hash)
                .string()
                .string_len(51)
                .not_null(),
        )
        .col(
            ColumnDef::new(Blocks::Timestamp)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(Blocks::ProtoCode).integer().not_null())
        .col(ColumnDef::new(Blocks::Priority).integer())
        .col(ColumnDef::new(Blocks::Validations).integer())
        // Bitmask of operation kinds in the block, widened to 64 bits by Lima.
        .col(
            ColumnDef::new(Blocks::Operations)
                .integer()
                .not_null()
                .default(0),
        )
        .col(ColumnDef::new(Blocks::BakerId).integer())
        .col(
            ColumnDef::new(Blocks::Reward)
                .big_integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Blocks::Fees)
                .big_integer()
                .not_null()
                .default(0),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Blocks::Table).to_owned()
}

impl tzindex_migrator::Operation for Operation {
    fn up(&self) -> Vec<Statement> {
        vec![up_statement().into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![down_statement().into()]
    }
}
