//! SELECT, INSERT, UPDATE and DELETE conversion.

use pretty_assertions::assert_eq;

use super::pref;
use crate::ast::{self, ColumnRef, Literal, RelationRef, ResTarget, SortBy};
use crate::convert::Converter;
use crate::dialect::builders::*;
use crate::dialect::*;
use crate::error::ConvertError;

fn colref(name: &str) -> ast::Node {
    ast::Node::ColumnRef(ColumnRef::name(name))
}

fn binary(name: &str, left: ast::Node, right: ast::Node) -> ast::Node {
    ast::Node::BinaryExpr(ast::BinaryExpr {
        name: name.to_string(),
        left: Box::new(left),
        right: Box::new(right),
    })
}

#[test]
fn test_select_star_from_where() {
    // SELECT * FROM users WHERE id = ?
    let stmt = SelectStmt {
        where_clause: Some(Box::new(eq(col("id"), param(31)))),
        ..select_from(&["users"])
    };
    let out = Converter::new().convert(&Node::SelectStmt(stmt)).unwrap();

    assert_eq!(
        out,
        ast::Node::Select(ast::SelectStmt {
            target_list: vec![ResTarget {
                name: None,
                val: Some(Box::new(ast::Node::ColumnRef(ColumnRef::star(None)))),
                location: 0,
            }],
            from_clause: vec![RelationRef::new("users")],
            where_clause: Some(Box::new(binary("=", colref("id"), pref(1, 31)))),
            ..Default::default()
        })
    );
}

#[test]
fn test_select_clauses() {
    // SELECT DISTINCT dept, COUNT(*) FROM emp GROUP BY dept HAVING COUNT(*) > 1
    //   ORDER BY dept DESC LIMIT 10 OFFSET 5
    let stmt = SelectStmt {
        distinct: true,
        fields: FieldList {
            fields: vec![field(col("dept")), field(count_star())],
        },
        from: Some(single_table("emp")),
        group_by: Some(GroupByClause {
            items: vec![by_item(col("dept"), false)],
            rollup: false,
        }),
        having: Some(HavingClause {
            expr: Box::new(binop(Opcode::Gt, count_star(), int(1))),
        }),
        order_by: Some(OrderByClause {
            items: vec![by_item(col("dept"), true)],
        }),
        limit: Some(Limit {
            offset: Some(Box::new(int(5))),
            ..limit(int(10))
        }),
        ..Default::default()
    };
    let out = Converter::new()
        .convert(&Node::SelectStmt(stmt))
        .unwrap()
        .into_select()
        .unwrap();

    assert!(out.distinct);
    assert_eq!(out.target_list.len(), 2);
    assert_eq!(out.group_clause, vec![colref("dept")]);
    assert!(out.having_clause.is_some());
    assert_eq!(
        out.sort_clause,
        vec![SortBy {
            node: Box::new(colref("dept")),
            desc: true,
        }]
    );
    assert_eq!(
        out.limit_count,
        Some(Box::new(ast::Node::Literal(Literal::new("10"))))
    );
    assert_eq!(
        out.limit_offset,
        Some(Box::new(ast::Node::Literal(Literal::new("5"))))
    );
}

#[test]
fn test_select_without_from() {
    // SELECT 1
    let stmt = SelectStmt {
        fields: FieldList {
            fields: vec![field(int(1))],
        },
        ..Default::default()
    };
    let out = Converter::new()
        .convert(&Node::SelectStmt(stmt))
        .unwrap()
        .into_select()
        .unwrap();
    assert!(out.from_clause.is_empty());
    assert!(out.where_clause.is_none());
    assert!(out.limit_count.is_none());
}

#[test]
fn test_select_join_flattens() {
    let out = Converter::new()
        .convert(&Node::SelectStmt(select_from(&["a", "b", "c"])))
        .unwrap()
        .into_select()
        .unwrap();
    assert_eq!(
        out.from_clause,
        vec![
            RelationRef::new("a"),
            RelationRef::new("b"),
            RelationRef::new("c"),
        ]
    );
}

fn insert_into(table_name: &str) -> InsertStmt {
    InsertStmt {
        is_replace: false,
        ignore: false,
        table: single_table(table_name),
        columns: Vec::new(),
        lists: Vec::new(),
        setlist: Vec::new(),
        select: None,
        on_duplicate: Vec::new(),
    }
}

#[test]
fn test_insert_values() {
    // INSERT INTO users (name, email) VALUES (?, ?), ('x', NULL)
    let stmt = InsertStmt {
        columns: vec![ColumnName::new("name"), ColumnName::new("email")],
        lists: vec![vec![param(35), param(38)], vec![text("x"), null()]],
        ..insert_into("users")
    };
    let out = Converter::new().convert(&Node::InsertStmt(stmt)).unwrap();

    assert_eq!(
        out,
        ast::Node::Insert(ast::InsertStmt {
            relation: RelationRef::new("users"),
            cols: vec![ResTarget::column("name"), ResTarget::column("email")],
            select_stmt: Box::new(ast::SelectStmt {
                values_lists: vec![
                    vec![pref(1, 35), pref(2, 38)],
                    vec![
                        ast::Node::Literal(Literal::new("x")),
                        ast::Node::Literal(Literal::new("NULL")),
                    ],
                ],
                ..Default::default()
            }),
            on_duplicate: Vec::new(),
            unconverted: None,
            replace: false,
            ignore: false,
        })
    );
}

#[test]
fn test_insert_set_form() {
    // INSERT IGNORE INTO users SET name = ?, age = 3
    let stmt = InsertStmt {
        ignore: true,
        setlist: vec![assign("name", param(30)), assign("age", int(3))],
        ..insert_into("users")
    };
    let out = match Converter::new().convert(&Node::InsertStmt(stmt)).unwrap() {
        ast::Node::Insert(insert) => insert,
        other => panic!("Expected Insert, got {}", other),
    };

    assert!(out.ignore);
    assert_eq!(
        out.cols,
        vec![ResTarget::column("name"), ResTarget::column("age")]
    );
    assert_eq!(
        out.select_stmt.values_lists,
        vec![vec![pref(1, 30), ast::Node::Literal(Literal::new("3"))]]
    );
}

#[test]
fn test_insert_select() {
    // REPLACE INTO archive SELECT * FROM users
    let stmt = InsertStmt {
        is_replace: true,
        select: Some(Box::new(Node::SelectStmt(select_from(&["users"])))),
        ..insert_into("archive")
    };
    let out = match Converter::new().convert(&Node::InsertStmt(stmt)).unwrap() {
        ast::Node::Insert(insert) => insert,
        other => panic!("Expected Insert, got {}", other),
    };

    assert!(out.replace);
    assert_eq!(out.relation, RelationRef::new("archive"));
    assert_eq!(out.select_stmt.from_clause, vec![RelationRef::new("users")]);
    assert!(out.select_stmt.values_lists.is_empty());
}

#[test]
fn test_insert_on_duplicate() {
    // INSERT INTO t (a) VALUES (?) ON DUPLICATE KEY UPDATE a = ?
    let stmt = InsertStmt {
        columns: vec![ColumnName::new("a")],
        lists: vec![vec![param(26)]],
        on_duplicate: vec![assign("a", param(56))],
        ..insert_into("t")
    };
    let out = match Converter::new().convert(&Node::InsertStmt(stmt)).unwrap() {
        ast::Node::Insert(insert) => insert,
        other => panic!("Expected Insert, got {}", other),
    };
    assert_eq!(
        out.on_duplicate,
        vec![ResTarget {
            name: Some("a".to_string()),
            val: Some(Box::new(pref(2, 56))),
            location: 0,
        }]
    );
}

#[test]
fn test_update() {
    // UPDATE app.users SET name = ? WHERE id = ? LIMIT 1
    let stmt = UpdateStmt {
        table_refs: TableRefsClause {
            table_refs: Join {
                left: Box::new(Node::TableName(TableName::qualified("app", "users"))),
                right: None,
                tp: JoinType::Inner,
                on: None,
                using: Vec::new(),
                natural: false,
                straight: false,
            },
        },
        list: vec![assign("name", param(27))],
        where_clause: Some(Box::new(eq(col("id"), param(40)))),
        order: None,
        limit: Some(limit(int(1))),
        ignore: false,
        multiple_table: false,
    };
    let out = Converter::new().convert(&Node::UpdateStmt(stmt)).unwrap();

    assert_eq!(
        out,
        ast::Node::Update(ast::UpdateStmt {
            relation: RelationRef::qualified("app", "users"),
            target_list: vec![ResTarget {
                name: Some("name".to_string()),
                val: Some(Box::new(pref(1, 27))),
                location: 0,
            }],
            where_clause: Some(Box::new(binary("=", colref("id"), pref(2, 40)))),
            limit_count: Some(Box::new(ast::Node::Literal(Literal::new("1")))),
        })
    );
}

#[test]
fn test_update_join_is_fatal() {
    let stmt = UpdateStmt {
        table_refs: tables(&["a", "b"]).unwrap(),
        list: vec![assign("x", int(1))],
        where_clause: None,
        order: None,
        limit: None,
        ignore: false,
        multiple_table: true,
    };
    let err = Converter::new()
        .convert(&Node::UpdateStmt(stmt))
        .unwrap_err();
    assert!(matches!(
        err,
        ConvertError::ExpectedOneRelation {
            statement: "UPDATE",
            found: 2
        }
    ));
}

fn delete_from(clause: TableRefsClause) -> DeleteStmt {
    DeleteStmt {
        table_refs: clause,
        tables: None,
        where_clause: None,
        order: None,
        limit: None,
        ignore: false,
        is_multi_table: false,
    }
}

#[test]
fn test_delete() {
    // DELETE FROM users WHERE id = ?
    let stmt = DeleteStmt {
        where_clause: Some(Box::new(eq(col("id"), param(30)))),
        ..delete_from(single_table("users"))
    };
    let out = Converter::new().convert(&Node::DeleteStmt(stmt)).unwrap();
    assert_eq!(
        out,
        ast::Node::Delete(ast::DeleteStmt {
            relation: RelationRef::new("users"),
            where_clause: Some(Box::new(binary("=", colref("id"), pref(1, 30)))),
            limit_count: None,
        })
    );
}

#[test]
fn test_delete_zero_tables_is_fatal() {
    // A join tree whose only leaf is a derived table names no table.
    let derived = Node::TableSource(TableSource {
        source: Box::new(subquery(SelectStmt::default())),
        as_name: "d".to_string(),
    });
    let clause = TableRefsClause {
        table_refs: Join {
            left: Box::new(derived),
            right: None,
            tp: JoinType::Inner,
            on: None,
            using: Vec::new(),
            natural: false,
            straight: false,
        },
    };
    let err = Converter::new()
        .convert(&Node::DeleteStmt(delete_from(clause)))
        .unwrap_err();
    assert!(matches!(
        err,
        ConvertError::ExpectedOneRelation { found: 0, .. }
    ));
}

#[test]
fn test_subquery_in_where() {
    // SELECT * FROM a WHERE id = (SELECT * FROM b)
    let stmt = SelectStmt {
        where_clause: Some(Box::new(eq(col("id"), subquery(select_from(&["b"]))))),
        ..select_from(&["a"])
    };
    let out = Converter::new()
        .convert(&Node::SelectStmt(stmt))
        .unwrap()
        .into_select()
        .unwrap();
    // Tables in the subquery stay out of the outer FROM list.
    assert_eq!(out.from_clause, vec![RelationRef::new("a")]);
    match out.where_clause.as_deref() {
        Some(ast::Node::BinaryExpr(expr)) => match expr.right.as_ref() {
            ast::Node::Subquery(link) => {
                assert_eq!(link.kind, ast::SubLinkKind::Expr);
                let inner = link.subselect.as_deref().unwrap();
                assert_eq!(inner.from_clause, vec![RelationRef::new("b")]);
            }
            other => panic!("Expected Subquery, got {}", other),
        },
        other => panic!("Expected BinaryExpr, got {:?}", other),
    }
}

fn union_of(selects: Vec<SelectStmt>) -> Node {
    Node::SetOprStmt(SetOprStmt {
        op: SetOprType::Union,
        selects: selects.into_iter().map(Node::SelectStmt).collect(),
        order_by: None,
        limit: None,
    })
}

#[test]
fn test_subquery_over_union_is_empty_select() {
    let tree = Node::SubqueryExpr(SubqueryExpr {
        query: Box::new(union_of(vec![select_from(&["a"]), select_from(&["b"])])),
    });
    let out = Converter::new().convert(&tree).unwrap();
    assert_eq!(
        out,
        ast::Node::Subquery(ast::SubLink {
            kind: ast::SubLinkKind::Expr,
            subselect: Some(Box::new(ast::SelectStmt::default())),
            unconverted: Some(ast::Placeholder {
                kind: "SetOprStmt".to_string(),
                params: Vec::new(),
            }),
        })
    );
}

#[test]
fn test_union_subquery_keeps_params() {
    // SELECT (SELECT x FROM a UNION SELECT x FROM b WHERE c = ?) FROM t WHERE d = ?
    let second = SelectStmt {
        where_clause: Some(Box::new(eq(col("c"), param(52)))),
        ..select_from(&["b"])
    };
    let scalar = Node::SubqueryExpr(SubqueryExpr {
        query: Box::new(union_of(vec![select_from(&["a"]), second])),
    });
    let stmt = SelectStmt {
        fields: FieldList {
            fields: vec![field(scalar)],
        },
        where_clause: Some(Box::new(eq(col("d"), param(70)))),
        ..select_from(&["t"])
    };
    let out = Converter::new().convert(&Node::SelectStmt(stmt)).unwrap();

    let refs: Vec<(usize, usize)> = out
        .param_refs()
        .iter()
        .map(|p| (p.number, p.location))
        .collect();
    assert_eq!(refs, vec![(1, 52), (2, 70)]);
}

#[test]
fn test_insert_select_union_keeps_params() {
    // INSERT INTO t SELECT x FROM a WHERE y = ? UNION SELECT x FROM b
    let first = SelectStmt {
        where_clause: Some(Box::new(eq(col("y"), param(40)))),
        ..select_from(&["a"])
    };
    let stmt = InsertStmt {
        select: Some(Box::new(union_of(vec![first, select_from(&["b"])]))),
        ..insert_into("t")
    };
    let out = match Converter::new().convert(&Node::InsertStmt(stmt)).unwrap() {
        ast::Node::Insert(insert) => insert,
        other => panic!("Expected Insert, got {}", other),
    };

    assert_eq!(*out.select_stmt, ast::SelectStmt::default());
    let unconverted = out.unconverted.clone().unwrap();
    assert_eq!(unconverted.kind, "SetOprStmt");
    assert_eq!(
        ast::Node::Insert(out).param_refs(),
        vec![ast::ParamRef {
            number: 1,
            location: 40
        }]
    );
}

#[test]
fn test_not_exists_is_negated() {
    // SELECT * FROM t WHERE NOT EXISTS (SELECT * FROM s WHERE s.id = ?)
    let inner = SelectStmt {
        where_clause: Some(Box::new(eq(qcol("s", "id"), param(52)))),
        ..select_from(&["s"])
    };
    let exists = |not| {
        Node::ExistsSubqueryExpr(ExistsSubqueryExpr {
            subquery: Box::new(subquery(inner.clone())),
            not,
        })
    };

    let plain = Converter::new().convert(&exists(false)).unwrap();
    let negated = Converter::new().convert(&exists(true)).unwrap();

    assert_ne!(plain, negated);
    assert_eq!(plain.kind(), "Subquery");
    match negated {
        ast::Node::BoolExpr(expr) => {
            assert_eq!(expr.op, ast::BoolOp::Not);
            assert_eq!(expr.args, vec![plain]);
        }
        other => panic!("Expected BoolExpr, got {}", other),
    }
}
