use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::BakerCycles;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(BakerCycles::Table)
        .col(
            ColumnDef::new(BakerCycles::Id)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(BakerCycles::Cycle).integer().not_null())
        .col(ColumnDef::new(BakerCycles::BakerId).integer().not_null())
        .col(
            ColumnDef::new(BakerCycles::StakingBalance)
                .big_integer()
                .not_null(),
        )
        .col(ColumnDef::new(BakerCycles::ExpectedBlocks).double().not_null())
        .col(
            ColumnDef::new(BakerCycles::ExpectedEndorsements)
                .double()
                .not_null(),
        )
        .col(
            ColumnDef::new(BakerCycles::Blocks)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(BakerCycles::Endorsements)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(BakerCycles::BlockRewards)
                .big_integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(BakerCycles::EndorsementRewards)
                .big_integer()
                .not_null()
                .default(0),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(BakerCycles::Table).to_owned()
}

impl tzindex_migrator::Operation for Operation {
    fn up(&self) -> Vec<Statement> {
        vec![up_statement().into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![down_statement().into()]
    }
}
