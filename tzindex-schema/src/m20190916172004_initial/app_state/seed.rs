use sea_query::{DeleteStatement, Expr, InsertStatement, Query};
use tzindex_migrator::Statement;

use crate::table::AppState;

/// Level of the state row before the first block is indexed.
pub const GENESIS_LEVEL: i32 = -1;

pub struct Operation;

fn up_statement() -> InsertStatement {
    Query::insert()
        .into_table(AppState::Table)
        .columns([
            AppState::Id,
            AppState::Level,
            AppState::AccountCounter,
            AppState::OperationCounter,
        ])
        .values_panic([(-1).into(), GENESIS_LEVEL.into(), 0.into(), 0.into()])
        .to_owned()
}

fn down_statement() -> DeleteStatement {
    Query::delete()
        .from_table(AppState::Table)
        .and_where(Expr::col(AppState::Id).eq(-1))
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
