use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::SmartRollupOriginateOps;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(SmartRollupOriginateOps::Table)
        .col(
            ColumnDef::new(SmartRollupOriginateOps::Id)
                .big_integer()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(SmartRollupOriginateOps::Level)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupOriginateOps::OpHash)
                .string()
                .string_len(51)
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupOriginateOps::Timestamp)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupOriginateOps::SenderId)
                .integer()
                .not_null(),
        )
        .col(ColumnDef::new(SmartRollupOriginateOps::SmartRollupId).integer())
        .col(
            ColumnDef::new(SmartRollupOriginateOps::PvmKind)
                .small_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupOriginateOps::Kernel)
                .blob()
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupOriginateOps::ParameterType)
                .blob()
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupOriginateOps::GenesisCommitment)
                .string()
                .string_len(54)
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupOriginateOps::BakerFee)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(SmartRollupOriginateOps::Status)
                .small_integer()
                .not_null(),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop()
        .table(SmartRollupOriginateOps::Table)
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
