use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::SmartRollupAddMessagesOps;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(SmartRollupAddMessagesOps::Table)
        .col(
            ColumnDef::new(SmartRollupAddMessagesOps::Id)
                .big_integer()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(SmartRollupAddMessagesOps::Level)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupAddMessagesOps::OpHash)
                .string()
                .string_len(51)
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupAddMessagesOps::Timestamp)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupAddMessagesOps::SenderId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupAddMessagesOps::MessagesCount)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupAddMessagesOps::BakerFee)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupAddMessagesOps::Status)
                .small_integer()
                .not_null(),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop()
        .table(SmartRollupAddMessagesOps::Table)
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
