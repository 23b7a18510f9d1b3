//! Shorthand constructors for dialect trees.
//!
//! Front ends build nodes with struct literals; these helpers keep
//! hand-written trees (tests, fixtures, embedders) readable.

use super::*;

/// Create an integer literal
pub fn int(value: i64) -> Node {
    Node::ValueExpr(ValueExpr {
        datum: Datum::Int(value),
        offset: 0,
    })
}

/// Create a string literal
pub fn text(value: &str) -> Node {
    Node::ValueExpr(ValueExpr {
        datum: Datum::String(value.to_string()),
        offset: 0,
    })
}

/// Create a NULL literal
pub fn null() -> Node {
    Node::ValueExpr(ValueExpr {
        datum: Datum::Null,
        offset: 0,
    })
}

/// Create a `?` marker at the given byte offset
pub fn param(offset: usize) -> Node {
    Node::ParamMarkerExpr(ParamMarkerExpr { offset })
}

/// Create an unqualified column reference
pub fn col(name: &str) -> Node {
    Node::ColumnNameExpr(ColumnNameExpr {
        name: ColumnName::new(name),
    })
}

/// Create a `table.column` reference
pub fn qcol(table: &str, name: &str) -> Node {
    Node::ColumnNameExpr(ColumnNameExpr {
        name: ColumnName {
            schema: String::new(),
            table: table.to_string(),
            name: name.to_string(),
        },
    })
}

pub fn binop(op: Opcode, left: Node, right: Node) -> Node {
    Node::BinaryOperationExpr(BinaryOperationExpr {
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// `left = right`
pub fn eq(left: Node, right: Node) -> Node {
    binop(Opcode::Eq, left, right)
}

/// `left AND right`
pub fn and(left: Node, right: Node) -> Node {
    binop(Opcode::LogicAnd, left, right)
}

/// Scalar function call
pub fn func(name: &str, args: Vec<Node>) -> Node {
    Node::FuncCallExpr(FuncCallExpr {
        schema: String::new(),
        fn_name: name.to_string(),
        args,
        offset: 0,
    })
}

/// Aggregate call without `DISTINCT`
pub fn agg(name: &str, args: Vec<Node>) -> Node {
    Node::AggregateFuncExpr(AggregateFuncExpr {
        name: name.to_string(),
        args,
        distinct: false,
        order: None,
    })
}

/// `COUNT(*)` as the front end emits it
pub fn count_star() -> Node {
    agg("count", vec![int(1)])
}

pub fn subquery(select: SelectStmt) -> Node {
    Node::SubqueryExpr(SubqueryExpr {
        query: Box::new(Node::SelectStmt(select)),
    })
}

/// A select-list item with no alias
pub fn field(expr: Node) -> SelectField {
    SelectField {
        expr: Some(Box::new(expr)),
        ..Default::default()
    }
}

/// `*`, or `table.*` when `table` is non-empty
pub fn wildcard(table: &str) -> SelectField {
    SelectField {
        wildcard: Some(WildCardField {
            schema: String::new(),
            table: table.to_string(),
        }),
        ..Default::default()
    }
}

pub fn table(name: &str) -> Node {
    Node::TableName(TableName::new(name))
}

/// A table reference without an alias
pub fn table_source(name: &str) -> Node {
    Node::TableSource(TableSource {
        source: Box::new(table(name)),
        as_name: String::new(),
    })
}

/// Inner join with no condition
pub fn join(left: Node, right: Node) -> Join {
    Join {
        left: Box::new(left),
        right: Some(Box::new(right)),
        tp: JoinType::Inner,
        on: None,
        using: Vec::new(),
        natural: false,
        straight: false,
    }
}

/// A FROM clause naming one table
pub fn single_table(name: &str) -> TableRefsClause {
    TableRefsClause {
        table_refs: Join {
            left: Box::new(table_source(name)),
            right: None,
            tp: JoinType::Inner,
            on: None,
            using: Vec::new(),
            natural: false,
            straight: false,
        },
    }
}

/// A FROM clause cross-joining the given tables left to right
pub fn tables(names: &[&str]) -> Option<TableRefsClause> {
    let (first, rest) = names.split_first()?;
    let mut clause = single_table(first);
    for name in rest {
        clause = TableRefsClause {
            table_refs: join(Node::Join(clause.table_refs), table_source(name)),
        };
    }
    Some(clause)
}

pub fn by_item(expr: Node, desc: bool) -> ByItem {
    ByItem {
        expr: Box::new(expr),
        desc,
    }
}

/// `SELECT * FROM <tables>`
pub fn select_from(names: &[&str]) -> SelectStmt {
    SelectStmt {
        fields: FieldList {
            fields: vec![wildcard("")],
        },
        from: tables(names),
        ..Default::default()
    }
}

pub fn assign(column: &str, expr: Node) -> Assignment {
    Assignment {
        column: ColumnName::new(column),
        expr: Box::new(expr),
    }
}

/// `LIMIT count`
pub fn limit(count: Node) -> Limit {
    Limit {
        count: Box::new(count),
        offset: None,
        offset_first: false,
    }
}

pub fn column_def(name: &str, tp: FieldType, options: Vec<ColumnOption>) -> ColumnDef {
    ColumnDef {
        name: ColumnName::new(name),
        tp,
        options,
    }
}

/// A `COMMENT '...'` column option
pub fn comment(text_value: &str) -> ColumnOption {
    ColumnOption {
        str_value: text_value.to_string(),
        ..ColumnOption::new(ColumnOptionType::Comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_nest_left() {
        let clause = tables(&["a", "b", "c"]).unwrap();
        match *clause.table_refs.left {
            Node::Join(ref inner) => assert!(inner.right.is_some()),
            ref other => panic!("Expected nested Join, got {}", other.kind()),
        }
        assert!(tables(&[]).is_none());
    }

    #[test]
    fn test_single_table_has_no_right_side() {
        let clause = single_table("users");
        assert!(clause.table_refs.right.is_none());
    }
}
