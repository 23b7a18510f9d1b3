//! Table DDL conversion.

use pretty_assertions::assert_eq;

use crate::ast::{self, AlterCommand, AlterSubtype, RelationRef};
use crate::convert::Converter;
use crate::diagnostics::Diagnostic;
use crate::dialect::builders::*;
use crate::dialect::*;

fn int_column(name: &str) -> ColumnDef {
    column_def(name, FieldType::new(TypeCode::Long), Vec::new())
}

fn alter(specs: Vec<AlterTableSpec>) -> Node {
    Node::AlterTableStmt(AlterTableStmt {
        table: TableName::new("t"),
        specs,
    })
}

fn convert(node: &Node) -> ast::Node {
    Converter::new().convert(node).unwrap()
}

fn commands(node: ast::Node) -> Vec<AlterCommand> {
    match node {
        ast::Node::AlterTable(stmt) => stmt.cmds,
        other => panic!("Expected AlterTable, got {}", other),
    }
}

#[test]
fn test_create_table() {
    // CREATE TEMPORARY TABLE IF NOT EXISTS app.posts (
    //   id BIGINT PRIMARY KEY,
    //   body TEXT COMMENT 'markdown',
    //   state ENUM('draft', 'live')
    // ) COMMENT = 'user posts'
    let stmt = CreateTableStmt {
        if_not_exists: true,
        temporary: true,
        table: TableName::qualified("app", "posts"),
        refer_table: None,
        cols: vec![
            column_def(
                "id",
                FieldType::new(TypeCode::Longlong),
                vec![ColumnOption::new(ColumnOptionType::PrimaryKey)],
            ),
            column_def("body", FieldType::new(TypeCode::Blob), vec![comment("markdown")]),
            column_def("state", FieldType::enumeration(["draft", "live"]), Vec::new()),
        ],
        constraints: Vec::new(),
        options: vec![TableOption {
            tp: TableOptionType::Comment,
            str_value: "user posts".to_string(),
            uint_value: 0,
        }],
        select: None,
    };

    assert_eq!(
        convert(&Node::CreateTableStmt(stmt)),
        ast::Node::CreateTable(ast::CreateTableStmt {
            name: RelationRef::qualified("app", "posts"),
            if_not_exists: true,
            temporary: true,
            refer_table: None,
            cols: vec![
                ast::ColumnDef {
                    colname: "id".to_string(),
                    type_name: "bigint".to_string(),
                    is_not_null: true,
                    comment: None,
                    vals: None,
                },
                ast::ColumnDef {
                    colname: "body".to_string(),
                    type_name: "text".to_string(),
                    is_not_null: false,
                    comment: Some("markdown".to_string()),
                    vals: None,
                },
                ast::ColumnDef {
                    colname: "state".to_string(),
                    type_name: "enum".to_string(),
                    is_not_null: false,
                    comment: None,
                    vals: Some(vec!["draft".to_string(), "live".to_string()]),
                },
            ],
            comment: Some("user posts".to_string()),
        })
    );
}

#[test]
fn test_create_table_like() {
    let stmt = CreateTableStmt {
        if_not_exists: false,
        temporary: false,
        table: TableName::new("copy"),
        refer_table: Some(TableName::new("orig")),
        cols: Vec::new(),
        constraints: Vec::new(),
        options: Vec::new(),
        select: None,
    };
    match convert(&Node::CreateTableStmt(stmt)) {
        ast::Node::CreateTable(create) => {
            assert_eq!(create.refer_table, Some(RelationRef::new("orig")));
            assert!(create.cols.is_empty());
            assert_eq!(create.comment, None);
        }
        other => panic!("Expected CreateTable, got {}", other),
    }
}

#[test]
fn test_alter_add_and_drop() {
    // ALTER TABLE t ADD COLUMN (a INT, b INT), DROP COLUMN IF EXISTS c
    let node = alter(vec![
        AlterTableSpec::AddColumns {
            columns: vec![int_column("a"), int_column("b")],
            position: None,
        },
        AlterTableSpec::DropColumn {
            name: ColumnName::new("c"),
            if_exists: true,
        },
    ]);
    let cmds = commands(convert(&node));

    let names: Vec<(Option<&str>, AlterSubtype, bool)> = cmds
        .iter()
        .map(|c| (c.name.as_deref(), c.subtype, c.missing_ok))
        .collect();
    assert_eq!(
        names,
        vec![
            (Some("a"), AlterSubtype::AddColumn, false),
            (Some("b"), AlterSubtype::AddColumn, false),
            (Some("c"), AlterSubtype::DropColumn, true),
        ]
    );
    assert_eq!(cmds[0].def.as_ref().unwrap().type_name, "int");
    assert!(cmds[2].def.is_none());
}

#[test]
fn test_modify_column_is_drop_then_add() {
    // ALTER TABLE t MODIFY COLUMN c INT
    let node = alter(vec![AlterTableSpec::ModifyColumn {
        column: int_column("c"),
        position: None,
    }]);

    assert_eq!(
        commands(convert(&node)),
        vec![
            AlterCommand::drop_column("c", false),
            AlterCommand::add_column(ast::ColumnDef {
                colname: "c".to_string(),
                type_name: "int".to_string(),
                is_not_null: false,
                comment: None,
                vals: None,
            }),
        ]
    );
}

#[test]
fn test_rename_column_short_circuits() {
    // ALTER TABLE t RENAME COLUMN a TO b
    let rename = AlterTableSpec::RenameColumn {
        old_name: ColumnName::new("a"),
        new_name: ColumnName::new("b"),
    };
    let expected = ast::Node::RenameColumn(ast::RenameColumnStmt {
        table: RelationRef::new("t"),
        col: "a".to_string(),
        new_name: "b".to_string(),
    });
    assert_eq!(convert(&alter(vec![rename.clone()])), expected);

    // ALTER TABLE t ADD COLUMN x INT, RENAME COLUMN a TO b keeps only the rename.
    let combined = alter(vec![
        AlterTableSpec::AddColumns {
            columns: vec![int_column("x")],
            position: None,
        },
        rename,
    ]);
    assert_eq!(convert(&combined), expected);
}

#[test]
fn test_rename_table_via_alter() {
    let node = alter(vec![AlterTableSpec::RenameTable {
        new_table: TableName::qualified("app", "t2"),
    }]);
    assert_eq!(
        convert(&node),
        ast::Node::RenameTable(ast::RenameTableStmt {
            table: RelationRef::new("t"),
            new_name: "t2".to_string(),
        })
    );
}

#[test]
fn test_unhandled_specs_are_skipped() {
    let node = alter(vec![
        AlterTableSpec::ChangeColumn {
            old_name: ColumnName::new("a"),
            column: int_column("b"),
            position: None,
        },
        AlterTableSpec::DropColumn {
            name: ColumnName::new("c"),
            if_exists: false,
        },
        AlterTableSpec::DropPrimaryKey,
    ]);

    let mut sink: Vec<Diagnostic> = Vec::new();
    let out = Converter::with_sink(&mut sink).convert(&node).unwrap();

    assert_eq!(commands(out), vec![AlterCommand::drop_column("c", false)]);
    assert_eq!(
        sink,
        vec![
            Diagnostic::UnhandledAlterSpec("ChangeColumn"),
            Diagnostic::UnhandledAlterSpec("DropPrimaryKey"),
        ]
    );
}

#[test]
fn test_drop_table() {
    let stmt = DropTableStmt {
        if_exists: true,
        is_view: false,
        temporary: false,
        tables: vec![TableName::new("a"), TableName::qualified("s", "b")],
    };
    assert_eq!(
        convert(&Node::DropTableStmt(stmt)),
        ast::Node::DropTable(ast::DropTableStmt {
            if_exists: true,
            tables: vec![RelationRef::new("a"), RelationRef::qualified("s", "b")],
        })
    );
}

#[test]
fn test_drop_view_is_placeholder() {
    let stmt = DropTableStmt {
        if_exists: false,
        is_view: true,
        temporary: false,
        tables: vec![TableName::new("v")],
    };
    let out = convert(&Node::DropTableStmt(stmt));
    assert!(out.is_placeholder());
    assert_eq!(out.to_string(), "Placeholder(DropTableStmt)");
}

#[test]
fn test_rename_table_stmt() {
    // RENAME TABLE old TO new
    let stmt = RenameTableStmt {
        old_table: TableName::new("old"),
        new_table: TableName::new("new"),
    };
    assert_eq!(
        convert(&Node::RenameTableStmt(stmt)),
        ast::Node::RenameTable(ast::RenameTableStmt {
            table: RelationRef::new("old"),
            new_name: "new".to_string(),
        })
    );
}
