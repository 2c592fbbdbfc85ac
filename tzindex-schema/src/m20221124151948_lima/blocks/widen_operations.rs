use sea_query::{ColumnDef, Table, TableAlterStatement};
use tzindex_migrator::{Backend, Statement};

use crate::table::Blocks;

pub struct Operation;

fn up_statement() -> TableAlterStatement {
    Table::alter()
        .table(Blocks::Table)
        .modify_column(
            ColumnDef::new(Blocks::Operations)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn down_statement() -> TableAlterStatement {
    Table::alter()
        .table(Blocks::Table)
        .modify_column(ColumnDef::new(Blocks::Operations).integer().not_null())
        .to_owned()
}

// SQLite does not support ALTER COLUMN, and its integers already hold 64 bits.
impl tzindex_migrator::Operation for Operation {
    fn up(&self) -> Vec<Statement> {
        vec![Statement::only(Backend::Postgres, up_statement())]
    }

    fn down(&self) -> Vec<Statement> {
        vec![Statement::only(Backend::Postgres, down_statement())]
    }
}
