//! Scalar and boolean expressions.

use crate::ast::{
    self, BinaryExpr, BoolExpr, BoolOp, ColumnRef, FuncCall, FuncName, Literal, ParamRef,
    Placeholder, ResTarget, SelectStmt, SortBy, SubLink, SubLinkKind,
};
use crate::dialect::{
    AggregateFuncExpr, Assignment, BinaryOperationExpr, ByItem, ColumnName, ExistsSubqueryExpr,
    FieldList, FuncCallExpr, Node, Opcode, ParamMarkerExpr, SelectField, SubqueryExpr, ValueExpr,
    WildCardField,
};
use crate::error::ConvertResult;

use super::{op_to_name, Converter};

/// Only the bare column name is kept; table and schema qualifiers are dropped.
pub(crate) fn convert_column_name(name: &ColumnName) -> ColumnRef {
    ColumnRef::name(name.name.clone())
}

pub(crate) fn convert_wildcard(field: &WildCardField) -> ColumnRef {
    let table = (!field.table.is_empty()).then_some(field.table.as_str());
    ColumnRef::star(table)
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// A converted query body.
pub(crate) enum Query {
    Select(SelectStmt),
    /// No select form; the placeholder keeps the parameters numbered inside.
    Other(Placeholder),
}

impl Query {
    fn from_node(node: ast::Node) -> Self {
        match node {
            ast::Node::Select(stmt) => Query::Select(stmt),
            ast::Node::Subquery(SubLink {
                unconverted: Some(placeholder),
                ..
            }) => Query::Other(placeholder),
            ast::Node::Subquery(SubLink {
                subselect: Some(stmt),
                ..
            }) => Query::Select(*stmt),
            ast::Node::Placeholder(placeholder) => Query::Other(placeholder),
            other => Query::Other(Placeholder {
                kind: other.kind().to_string(),
                params: other.param_refs(),
            }),
        }
    }

    /// The select, or an empty one alongside the unconverted body.
    pub(crate) fn or_default(self) -> (SelectStmt, Option<Placeholder>) {
        match self {
            Query::Select(stmt) => (stmt, None),
            Query::Other(placeholder) => (SelectStmt::default(), Some(placeholder)),
        }
    }
}

impl Converter<'_> {
    pub(crate) fn convert_value(&mut self, n: &ValueExpr) -> Literal {
        Literal::new(n.datum.to_string())
    }

    pub(crate) fn convert_param_marker(&mut self, n: &ParamMarkerExpr) -> ParamRef {
        ParamRef {
            number: self.ctx.next_param(),
            location: n.offset,
        }
    }

    /// `AND` / `OR` become a two-operand [`BoolExpr`]; everything else a [`BinaryExpr`].
    pub(crate) fn convert_binary(&mut self, n: &BinaryOperationExpr) -> ConvertResult<ast::Node> {
        let left = self.convert(&n.left)?;
        let right = self.convert(&n.right)?;
        let node = match n.op {
            Opcode::LogicAnd | Opcode::LogicOr => {
                let op = if n.op == Opcode::LogicAnd {
                    BoolOp::And
                } else {
                    BoolOp::Or
                };
                ast::Node::BoolExpr(BoolExpr {
                    op,
                    args: vec![left, right],
                })
            }
            op => ast::Node::BinaryExpr(BinaryExpr {
                name: op_to_name(op),
                left: Box::new(left),
                right: Box::new(right),
            }),
        };
        Ok(node)
    }

    pub(crate) fn convert_func_call(&mut self, n: &FuncCallExpr) -> ConvertResult<FuncCall> {
        let args = n
            .args
            .iter()
            .map(|arg| self.convert(arg))
            .collect::<ConvertResult<Vec<_>>>()?;
        Ok(FuncCall {
            func: FuncName {
                schema: non_empty(&n.schema),
                name: n.fn_name.clone(),
            },
            args,
            agg_star: false,
            agg_distinct: false,
            location: n.offset,
        })
    }

    /// A literal integer `1` argument is read as `*`, so `COUNT(1)` and
    /// `COUNT(*)` produce the same call.
    pub(crate) fn convert_aggregate(&mut self, n: &AggregateFuncExpr) -> ConvertResult<FuncCall> {
        let mut call = FuncCall {
            func: FuncName {
                schema: None,
                name: n.name.clone(),
            },
            args: Vec::with_capacity(n.args.len()),
            agg_star: false,
            agg_distinct: n.distinct,
            location: 0,
        };
        for arg in &n.args {
            if let Node::ValueExpr(value) = arg {
                if value.datum.as_i64() == Some(1) {
                    call.agg_star = true;
                    continue;
                }
            }
            call.args.push(self.convert(arg)?);
        }
        if let Some(order) = &n.order {
            self.skip_order_by(order);
        }
        Ok(call)
    }

    /// Unwrap a query to its select. Anything else, including set
    /// operations, is kept as a placeholder.
    pub(crate) fn convert_query(&mut self, node: &Node) -> ConvertResult<Query> {
        Ok(Query::from_node(self.convert(node)?))
    }

    /// A body that is not a select collapses to an empty select.
    pub(crate) fn convert_subquery(&mut self, n: &SubqueryExpr) -> ConvertResult<SubLink> {
        let (select, unconverted) = self.convert_query(&n.query)?.or_default();
        Ok(SubLink {
            kind: SubLinkKind::Expr,
            subselect: Some(Box::new(select)),
            unconverted,
        })
    }

    /// A body that is not a select leaves the link empty. `NOT EXISTS`
    /// wraps the link in a `NOT` [`BoolExpr`].
    pub(crate) fn convert_exists(&mut self, n: &ExistsSubqueryExpr) -> ConvertResult<ast::Node> {
        let link = match self.convert_query(&n.subquery)? {
            Query::Select(stmt) => SubLink {
                kind: SubLinkKind::Exists,
                subselect: Some(Box::new(stmt)),
                unconverted: None,
            },
            Query::Other(placeholder) => SubLink {
                kind: SubLinkKind::Exists,
                subselect: None,
                unconverted: Some(placeholder),
            },
        };
        let node = ast::Node::Subquery(link);
        if !n.not {
            return Ok(node);
        }
        Ok(ast::Node::BoolExpr(BoolExpr {
            op: BoolOp::Not,
            args: vec![node],
        }))
    }

    pub(crate) fn convert_select_field(&mut self, n: &SelectField) -> ConvertResult<ResTarget> {
        let val = match &n.wildcard {
            Some(wildcard) => Some(ast::Node::ColumnRef(convert_wildcard(wildcard))),
            None => self.convert_opt(n.expr.as_deref())?,
        };
        Ok(ResTarget {
            name: non_empty(&n.as_name),
            val: val.map(Box::new),
            location: n.offset,
        })
    }

    pub(crate) fn convert_field_list(&mut self, n: &FieldList) -> ConvertResult<Vec<ResTarget>> {
        n.fields
            .iter()
            .map(|field| self.convert_select_field(field))
            .collect()
    }

    pub(crate) fn convert_assignment(&mut self, n: &Assignment) -> ConvertResult<ResTarget> {
        Ok(ResTarget {
            name: Some(n.column.name.clone()),
            val: Some(Box::new(self.convert(&n.expr)?)),
            location: 0,
        })
    }

    pub(crate) fn convert_by_item(&mut self, n: &ByItem) -> ConvertResult<SortBy> {
        Ok(SortBy {
            node: Box::new(self.convert(&n.expr)?),
            desc: n.desc,
        })
    }
}
