use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::UpdateConsensusKeyOps;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(UpdateConsensusKeyOps::Table)
        .col(
            ColumnDef::new(UpdateConsensusKeyOps::Id)
                .big_integer()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(UpdateConsensusKeyOps::Level)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(UpdateConsensusKeyOps::OpHash)
                .string()
                .string_len(51)
                .not_null(),
        )
        .col(
            ColumnDef::new(UpdateConsensusKeyOps::Timestamp)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(UpdateConsensusKeyOps::SenderId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(UpdateConsensusKeyOps::ActivationCycle)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(UpdateConsensusKeyOps::PublicKey)
                .text()
                .not_null(),
        )
        .col(
            ColumnDef::new(UpdateConsensusKeyOps::PublicKeyHash)
                .string()
                .string_len(37)
                .not_null(),
        )
        .col(
            ColumnDef::new(UpdateConsensusKeyOps::BakerFee)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(UpdateConsensusKeyOps::Status)
                .small_integer()
                .not_null(),
        )
        .col(ColumnDef::new(UpdateConsensusKeyOps::Errors).text())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(UpdateConsensusKeyOps::Table).to_owned()
}

impl tzindex_migrator::Operation for Operation {
    fn up(&self) -> Vec<Statement> {
        vec![up_statement().into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![down_statement().into()]
    }
}
