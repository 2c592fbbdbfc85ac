use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::SmartRollupCommitments;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(SmartRollupCommitments::Table)
        .col(
            ColumnDef::new(SmartRollupCommitments::Id)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(SmartRollupCommitments::SmartRollupId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupCommitments::InitiatorId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupCommitments::InboxLevel)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupCommitments::State)
                .string()
                .string_len(54)
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupCommitments::Hash)
                .string()
                .string_len(54)
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupCommitments::Ticks)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupCommitments::FirstLevel)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupCommitments::LastLevel)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupCommitments::Status)
                .small_integer()
                .not_null(),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop()
        .table(SmartRollupCommitments::Table)
        .to_owned()
}

impl tzindex_migrator::Operation for Operation {
    fn up(&self) -> Vec<Statement> {
        vec![up_statement().into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![down_statement().into()]
    }
}
