use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};
use tzindex_migrator::Statement;

use crate::table::VotingPeriods;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(VotingPeriods::Table)
        .col(
            ColumnDef::new(VotingPeriods::Id)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(VotingPeriods::Index).integer().not_null())
        .col(ColumnDef::new(VotingPeriods::Epoch).integer().not_null())
        .col(ColumnDef::new(VotingPeriods::FirstLevel).integer().not_null())
        .col(ColumnDef::new(VotingPeriods::LastLevel).integer().not_null())
        .col(ColumnDef::new(VotingPeriods::Kind).small_integer().not_null())
        .col(ColumnDef::new(VotingPeriods::Status).small_integer().not_null())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(VotingPeriods::Table).to_owned()
}

impl tzindex_migrator::Operation for Operation {
    fn up(&self) -> Vec<Statement> {
        vec![up_statement().into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![down_statement().into()]
    }
}
