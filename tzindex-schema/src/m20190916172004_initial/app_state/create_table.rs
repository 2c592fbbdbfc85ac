use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::AppState;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(AppState::Table)
        .col(
            ColumnDef::new(AppState::Id)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(AppState::Level).integer().not_null())
        .col(ColumnDef::new(AppState::Hash).string().string_len(51))
        .col(ColumnDef::new(AppState::Protocol).string().string_len(51))
        .col(ColumnDef::new(AppState::NextProtocol).string().string_len(51))
        .col(ColumnDef::new(AppState::Timestamp).timestamp_with_time_zone())
        .col(
            ColumnDef::new(AppState::AccountCounter)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(AppState::OperationCounter)
                .big_integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(AppState::EndorsementOpsCount)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(AppState::TransactionOpsCount)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(AppState::DelegationOpsCount)
                .integer()
                .not_null()
                .default(0),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(AppState::Table).to_owned()
}

impl tzindex_migrator::Operation for Operation {
    fn up(&self) -> Vec<Statement> {
        vec![up_statement().into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![down_statement().into()]
    }
}
