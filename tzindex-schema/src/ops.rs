//! Operations shared by several migrations.
//!
//! Table creations live next to their migration; indexes, added columns and
//! renames are common enough to be described inline:
//!
//! ```rust,ignore
//! vec_box![
//!     blocks::create_table::Operation,
//!     CreateIndex::new("IX_Blocks_Level", Blocks::Table).col(Blocks::Level).unique(),
//! ]
//! ```

use sea_query::{Alias, ColumnDef, DynIden, Index, IntoIden, Table};
use tzindex_migrator::{Operation, Statement};

/// Creates a named index, dropping it on the way down.
pub struct CreateIndex {
    name: &'static str,
    table: DynIden,
    columns: Vec<DynIden>,
    unique: bool,
}

impl CreateIndex {
    pub fn new(name: &'static str, table: impl IntoIden) -> Self {
        Self {
            name,
            table: table.into_iden(),
            columns: Vec::new(),
            unique: false,
        }
    }

    pub fn col(mut self, column: impl IntoIden) -> Self {
        self.columns.push(column.into_iden());
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

impl Operation for CreateIndex {
    fn up(&self) -> Vec<Statement> {
        let mut index = Index::create();
        index.name(self.name).table(self.table.clone());

        for column in &self.columns {
            index.col(column.clone());
        }

        if self.unique {
            index.unique();
        }

        vec![index.to_owned().into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![Index::drop()
            .name(self.name)
            .table(self.table.clone())
            .to_owned()
            .into()]
    }
}

/// Adds a column, dropping it on the way down.
///
/// SQLite refuses `NOT NULL` columns without a default on existing tables.
pub struct AddColumn {
    table: DynIden,
    column: ColumnDef,
}

impl AddColumn {
    pub fn new(table: impl IntoIden, column: &mut ColumnDef) -> Self {
        Self {
            table: table.into_iden(),
            column: column.to_owned(),
        }
    }
}

impl Operation for AddColumn {
    fn up(&self) -> Vec<Statement> {
        vec![Table::alter()
            .table(self.table.clone())
            .add_column(self.column.clone())
            .to_owned()
            .into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![Table::alter()
            .table(self.table.clone())
            .drop_column(Alias::new(self.column.get_column_name()))
            .to_owned()
            .into()]
    }
}

pub struct RenameColumn {
    table: DynIden,
    from: DynIden,
    to: DynIden,
}

impl RenameColumn {
    pub fn new(table: impl IntoIden, from: impl IntoIden, to: impl IntoIden) -> Self {
        Self {
            table: table.into_iden(),
            from: from.into_iden(),
            to: to.into_iden(),
        }
    }
}

impl Operation for RenameColumn {
    fn up(&self) -> Vec<Statement> {
        vec![Table::alter()
            .table(self.table.clone())
            .rename_column(self.from.clone(), self.to.clone())
            .to_owned()
            .into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![Table::alter()
            .table(self.table.clone())
            .rename_column(self.to.clone(), self.from.clone())
            .to_owned()
            .into()]
    }
}

pub struct RenameTable {
    from: DynIden,
    to: DynIden,
}

impl RenameTable {
    pub fn new(from: impl IntoIden, to: impl IntoIden) -> Self {
        Self {
            from: from.into_iden(),
            to: to.into_iden(),
        }
    }
}

impl Operation for RenameTable {
    fn up(&self) -> Vec<Statement> {
        vec![Table::rename()
            .table(self.from.clone(), self.to.clone())
            .to_owned()
            .into()]
    }

    fn down(&self) -> Vec<Statement> {
        vec![Table::rename()
            .table(self.to.clone(), self.from.clone())
            .to_owned()
            .into()]
    }
}

/// Runs an operation backwards: `Revert(CreateIndex::new(..))` drops the
/// index on the way up and recreates it on the way down.
pub struct Revert<O>(pub O);

impl<O: Operation> Operation for Revert<O> {
    fn up(&self) -> Vec<Statement> {
        self.0.down()
    }

    fn down(&self) -> Vec<Statement> {
        self.0.up()
    }
}
