//! CREATE / ALTER / DROP / RENAME TABLE.

use crate::ast::{
    self, AlterCommand, AlterTableStmt, ColumnDef, CreateTableStmt, DropTableStmt, RelationRef,
    RenameColumnStmt, RenameTableStmt,
};
use crate::diagnostics::Diagnostic;
use crate::dialect::{
    self, AlterTableSpec, ColumnOptionType, Node, TableOptionType,
};

use super::Converter;

/// A column is not-null when declared `NOT NULL` or `PRIMARY KEY`.
fn is_not_null(def: &dialect::ColumnDef) -> bool {
    def.options
        .iter()
        .any(|opt| matches!(opt.tp, ColumnOptionType::NotNull | ColumnOptionType::PrimaryKey))
}

/// Text of the last `COMMENT` option.
fn column_comment(def: &dialect::ColumnDef) -> Option<String> {
    def.options
        .iter()
        .filter(|opt| opt.tp == ColumnOptionType::Comment)
        .filter_map(|opt| match opt.expr.as_deref() {
            Some(Node::ValueExpr(value)) => value.datum.as_str().map(str::to_string),
            Some(_) => None,
            None => Some(opt.str_value.clone()),
        })
        .last()
}

pub(crate) fn convert_column_def(def: &dialect::ColumnDef) -> ColumnDef {
    ColumnDef {
        colname: def.name.name.clone(),
        type_name: def.tp.tp.type_str().to_string(),
        is_not_null: is_not_null(def),
        comment: column_comment(def),
        vals: (!def.tp.elems.is_empty()).then(|| def.tp.elems.clone()),
    }
}

pub(crate) fn convert_create_table(n: &dialect::CreateTableStmt) -> CreateTableStmt {
    let comment = n
        .options
        .iter()
        .filter(|opt| opt.tp == TableOptionType::Comment)
        .map(|opt| opt.str_value.clone())
        .last();
    CreateTableStmt {
        name: (&n.table).into(),
        if_not_exists: n.if_not_exists,
        temporary: n.temporary,
        refer_table: n.refer_table.as_ref().map(RelationRef::from),
        cols: n.cols.iter().map(convert_column_def).collect(),
        comment,
    }
}

pub(crate) fn convert_drop_table(n: &dialect::DropTableStmt) -> DropTableStmt {
    DropTableStmt {
        if_exists: n.if_exists,
        tables: n.tables.iter().map(RelationRef::from).collect(),
    }
}

pub(crate) fn convert_rename_table(n: &dialect::RenameTableStmt) -> RenameTableStmt {
    RenameTableStmt {
        table: (&n.old_table).into(),
        new_name: n.new_table.name.clone(),
    }
}

impl Converter<'_> {
    /// Specs become commands in order.
    ///
    /// `MODIFY` expands to a drop followed by an add of the same column.
    /// A `RENAME COLUMN` or `RENAME TO` spec returns a rename statement on
    /// the spot and any other spec in the statement is dropped.
    pub(crate) fn convert_alter_table(&mut self, n: &dialect::AlterTableStmt) -> ast::Node {
        let table = RelationRef::from(&n.table);
        let mut cmds = Vec::with_capacity(n.specs.len());
        for spec in &n.specs {
            match spec {
                AlterTableSpec::AddColumns { columns, .. } => {
                    cmds.extend(
                        columns
                            .iter()
                            .map(|def| AlterCommand::add_column(convert_column_def(def))),
                    );
                }
                AlterTableSpec::DropColumn { name, if_exists } => {
                    cmds.push(AlterCommand::drop_column(name.name.clone(), *if_exists));
                }
                AlterTableSpec::ModifyColumn { column, .. } => {
                    cmds.push(AlterCommand::drop_column(column.name.name.clone(), false));
                    cmds.push(AlterCommand::add_column(convert_column_def(column)));
                }
                AlterTableSpec::RenameColumn { old_name, new_name } => {
                    return ast::Node::RenameColumn(RenameColumnStmt {
                        table,
                        col: old_name.name.clone(),
                        new_name: new_name.name.clone(),
                    });
                }
                AlterTableSpec::RenameTable { new_table } => {
                    return ast::Node::RenameTable(RenameTableStmt {
                        table,
                        new_name: new_table.name.clone(),
                    });
                }
                AlterTableSpec::ChangeColumn { .. }
                | AlterTableSpec::AlterColumn { .. }
                | AlterTableSpec::RenameIndex { .. }
                | AlterTableSpec::AddConstraint(_)
                | AlterTableSpec::DropPrimaryKey
                | AlterTableSpec::DropIndex { .. }
                | AlterTableSpec::DropForeignKey { .. }
                | AlterTableSpec::Options(_) => {
                    self.report(Diagnostic::UnhandledAlterSpec(spec.kind()));
                }
            }
        }
        ast::Node::AlterTable(AlterTableStmt { table, cmds })
    }
}
