//! Table-reference flattening.
//!
//! Join trees collapse to the ordered list of tables they touch. Join
//! kind, `ON`/`USING` predicates and aliases are not kept.

use crate::ast::RelationRef;
use crate::dialect::visit::{walk_table_refs, Visitor};
use crate::dialect::{Node, ParamMarkerExpr, TableName, TableRefsClause};
use crate::error::{ConvertError, ConvertResult};

use super::{ConvertContext, Converter};

impl From<&TableName> for RelationRef {
    fn from(name: &TableName) -> Self {
        RelationRef {
            schema: (!name.schema.is_empty()).then(|| name.schema.clone()),
            name: name.name.clone(),
        }
    }
}

/// Collects table names in pre-order.
///
/// Parameter markers met on the way (join conditions, derived tables)
/// still take their number so later parameters stay aligned.
struct TableCollector<'c> {
    ctx: &'c mut ConvertContext,
    tables: Vec<RelationRef>,
}

impl<'ast> Visitor<'ast> for TableCollector<'_> {
    fn visit_table_name(&mut self, name: &'ast TableName) {
        self.tables.push(name.into());
    }

    fn visit_param_marker(&mut self, _marker: &'ast ParamMarkerExpr) {
        self.ctx.next_param();
    }
}

impl Converter<'_> {
    /// Tables referenced by a FROM or target clause. `None` gives an empty list.
    pub fn convert_table_refs(&mut self, clause: Option<&TableRefsClause>) -> Vec<RelationRef> {
        let Some(clause) = clause else {
            return Vec::new();
        };
        let mut collector = TableCollector {
            ctx: &mut self.ctx,
            tables: Vec::new(),
        };
        walk_table_refs(&mut collector, clause);
        collector.tables
    }

    /// Tables under a bare `Join` or `TableSource` node.
    pub(crate) fn convert_table_tree(&mut self, node: &Node) -> Vec<RelationRef> {
        let mut collector = TableCollector {
            ctx: &mut self.ctx,
            tables: Vec::new(),
        };
        collector.visit_node(node);
        collector.tables
    }

    /// The one table a single-table statement targets.
    ///
    /// Anything other than exactly one table aborts the conversion.
    pub(crate) fn single_relation(
        &mut self,
        statement: &'static str,
        clause: &TableRefsClause,
    ) -> ConvertResult<RelationRef> {
        let mut rels = self.convert_table_refs(Some(clause));
        if rels.len() != 1 {
            return Err(ConvertError::one_relation(statement, rels.len()));
        }
        Ok(rels.remove(0))
    }
}
