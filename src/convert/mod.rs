//! Dialect tree to canonical tree conversion.
//!
//! [`Converter::convert`] is total over [`dialect::Node`]: every kind either
//! has a mapping or becomes [`ast::Node::Placeholder`]. The only failure is
//! a structural one, see [`ConvertError`](crate::error::ConvertError).
//!
//! ```
//! use canonsql::convert::Converter;
//! use canonsql::dialect::builders::*;
//!
//! let where_id = eq(col("id"), param(30));
//! let mut conv = Converter::new();
//! let node = conv.convert(&where_id).unwrap();
//! assert_eq!(node.param_refs()[0].number, 1);
//! ```

mod context;
mod ddl;
mod dml;
mod expr;
mod operators;
mod tables;

#[cfg(test)]
mod tests;

pub use context::ConvertContext;
pub use operators::op_to_name;

use crate::ast::{self, ParamRef, Placeholder};
use crate::config::Config;
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::dialect::visit::{walk_order_by, Visitor};
use crate::dialect::{self, Node, OrderByClause};
use crate::error::ConvertResult;

use context::ParamReserver;

/// Converts one statement at a time.
///
/// Holds the parameter counter for the statement being converted; build a
/// fresh converter for each statement.
pub struct Converter<'a> {
    ctx: ConvertContext,
    sink: Option<&'a mut dyn DiagnosticSink>,
}

impl Default for Converter<'_> {
    fn default() -> Self {
        Self {
            ctx: ConvertContext::new(),
            sink: None,
        }
    }
}

impl<'a> Converter<'a> {
    /// A converter with diagnostics disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// A converter that reports skipped constructs to `sink`.
    pub fn with_sink(sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            ctx: ConvertContext::new(),
            sink: Some(sink),
        }
    }

    pub fn context(&self) -> &ConvertContext {
        &self.ctx
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        if let Some(sink) = &mut self.sink {
            sink.report(diagnostic);
        }
    }

    /// Convert any dialect node.
    pub fn convert(&mut self, node: &Node) -> ConvertResult<ast::Node> {
        let out = match node {
            Node::ValueExpr(n) => ast::Node::Literal(self.convert_value(n)),
            Node::ParamMarkerExpr(n) => ast::Node::ParamRef(self.convert_param_marker(n)),
            Node::AggregateFuncExpr(n) => ast::Node::FuncCall(self.convert_aggregate(n)?),
            Node::BinaryOperationExpr(n) => self.convert_binary(n)?,
            Node::ColumnNameExpr(n) => ast::Node::ColumnRef(expr::convert_column_name(&n.name)),
            Node::ColumnName(n) => ast::Node::ColumnRef(expr::convert_column_name(n)),
            Node::ExistsSubqueryExpr(n) => self.convert_exists(n)?,
            Node::FuncCallExpr(n) => ast::Node::FuncCall(self.convert_func_call(n)?),
            Node::ParenthesesExpr(n) => self.convert(&n.expr)?,
            Node::SubqueryExpr(n) => ast::Node::Subquery(self.convert_subquery(n)?),
            Node::WildCardField(n) => ast::Node::ColumnRef(expr::convert_wildcard(n)),

            Node::Assignment(n) => ast::Node::ResTarget(self.convert_assignment(n)?),
            Node::ByItem(n) => ast::Node::SortBy(self.convert_by_item(n)?),
            Node::ColumnDef(n) => ast::Node::ColumnDef(ddl::convert_column_def(n)),
            Node::FieldList(n) => ast::Node::List(
                self.convert_field_list(n)?
                    .into_iter()
                    .map(ast::Node::ResTarget)
                    .collect(),
            ),
            Node::GroupByClause(n) => ast::Node::List(self.convert_group_by(Some(n))?),
            Node::HavingClause(n) => self.convert(&n.expr)?,
            Node::OnCondition(n) => self.convert(&n.expr)?,
            Node::OrderByClause(n) => ast::Node::List(
                self.convert_order_by(Some(n))?
                    .into_iter()
                    .map(ast::Node::SortBy)
                    .collect(),
            ),
            Node::SelectField(n) => ast::Node::ResTarget(self.convert_select_field(n)?),
            Node::TableName(n) => ast::Node::Relation(n.into()),
            Node::TableRefsClause(n) => relation_list(self.convert_table_refs(Some(n))),
            Node::Join(_) | Node::TableSource(_) => relation_list(self.convert_table_tree(node)),

            Node::SelectStmt(n) => ast::Node::Select(self.convert_select(n)?),
            Node::InsertStmt(n) => ast::Node::Insert(self.convert_insert(n)?),
            Node::UpdateStmt(n) => ast::Node::Update(self.convert_update(n)?),
            Node::DeleteStmt(n) => ast::Node::Delete(self.convert_delete(n)?),
            Node::CreateTableStmt(n) => ast::Node::CreateTable(ddl::convert_create_table(n)),
            Node::AlterTableStmt(n) => self.convert_alter_table(n),
            // Views are not modeled.
            Node::DropTableStmt(n) if n.is_view => self.placeholder(node),
            Node::DropTableStmt(n) => ast::Node::DropTable(ddl::convert_drop_table(n)),
            Node::RenameTableStmt(n) => ast::Node::RenameTable(ddl::convert_rename_table(n)),

            Node::BetweenExpr(_)
            | Node::CaseExpr(_)
            | Node::CompareSubqueryExpr(_)
            | Node::DefaultExpr(_)
            | Node::FuncCastExpr(_)
            | Node::IsNullExpr(_)
            | Node::IsTruthExpr(_)
            | Node::MatchAgainst(_)
            | Node::PatternInExpr(_)
            | Node::PatternLikeExpr(_)
            | Node::PatternRegexpExpr(_)
            | Node::RowExpr(_)
            | Node::TimeUnitExpr(_)
            | Node::UnaryOperationExpr(_)
            | Node::ValuesExpr(_)
            | Node::VariableExpr(_)
            | Node::WindowFuncExpr(_)
            | Node::AlterTableSpec(_)
            | Node::Constraint(_)
            | Node::Limit(_)
            | Node::WhenClause(_)
            | Node::WindowSpec(_)
            | Node::BeginStmt(_)
            | Node::CommitStmt(_)
            | Node::CreateDatabaseStmt(_)
            | Node::CreateIndexStmt(_)
            | Node::CreateViewStmt(_)
            | Node::DeallocateStmt(_)
            | Node::DropDatabaseStmt(_)
            | Node::DropIndexStmt(_)
            | Node::ExecuteStmt(_)
            | Node::ExplainStmt(_)
            | Node::LoadDataStmt(_)
            | Node::LockTablesStmt(_)
            | Node::PrepareStmt(_)
            | Node::RollbackStmt(_)
            | Node::SetOprStmt(_)
            | Node::SetStmt(_)
            | Node::ShowStmt(_)
            | Node::TruncateTableStmt(_)
            | Node::UnlockTablesStmt(_)
            | Node::UseStmt(_) => self.placeholder(node),
        };
        Ok(out)
    }

    /// Convert an optional node; `None` stays `None`.
    pub fn convert_opt(&mut self, node: Option<&Node>) -> ConvertResult<Option<ast::Node>> {
        node.map(|n| self.convert(n)).transpose()
    }

    pub(crate) fn convert_boxed(
        &mut self,
        node: Option<&Node>,
    ) -> ConvertResult<Option<Box<ast::Node>>> {
        Ok(self.convert_opt(node)?.map(Box::new))
    }

    fn placeholder(&mut self, node: &Node) -> ast::Node {
        self.report(Diagnostic::UnhandledNode(node.kind()));
        let mut reserver = ParamReserver::new(&mut self.ctx);
        reserver.visit_node(node);
        ast::Node::Placeholder(Placeholder {
            kind: node.kind().to_string(),
            params: reserver.params,
        })
    }

    /// Number the parameters of an `ORDER BY` that has no canonical home.
    pub(crate) fn skip_order_by(&mut self, order: &OrderByClause) -> Vec<ParamRef> {
        let mut reserver = ParamReserver::new(&mut self.ctx);
        walk_order_by(&mut reserver, order);
        reserver.params
    }
}

fn relation_list(rels: Vec<ast::RelationRef>) -> ast::Node {
    ast::Node::List(rels.into_iter().map(ast::Node::Relation).collect())
}

/// Convert one statement with a fresh context and no diagnostics.
pub fn convert(node: &dialect::Node) -> ConvertResult<ast::Node> {
    Converter::new().convert(node)
}

/// Convert one statement, logging skipped constructs when `config.debug` is set.
pub fn convert_with_config(node: &dialect::Node, config: &Config) -> ConvertResult<ast::Node> {
    if config.debug {
        let mut sink = TracingSink;
        Converter::with_sink(&mut sink).convert(node)
    } else {
        convert(node)
    }
}
