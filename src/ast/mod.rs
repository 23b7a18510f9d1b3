//! Dialect-neutral statement and expression tree.
//!
//! Every front end converges on this shape. Constructs without a mapping
//! appear as [`Node::Placeholder`], so consumers must be ready for it.

mod expr;
mod stmt;

pub use expr::*;
pub use stmt::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    // Statements
    Select(SelectStmt),
    Insert(InsertStmt),
    Update(UpdateStmt),
    Delete(DeleteStmt),
    CreateTable(CreateTableStmt),
    AlterTable(AlterTableStmt),
    DropTable(DropTableStmt),
    RenameTable(RenameTableStmt),
    RenameColumn(RenameColumnStmt),

    // Expressions
    BoolExpr(BoolExpr),
    BinaryExpr(BinaryExpr),
    FuncCall(FuncCall),
    ColumnRef(ColumnRef),
    Literal(Literal),
    ParamRef(ParamRef),
    Subquery(SubLink),

    // Clauses
    ResTarget(ResTarget),
    SortBy(SortBy),
    List(Vec<Node>),
    Relation(RelationRef),
    ColumnDef(ColumnDef),
    AlterCmd(AlterCommand),

    Placeholder(Placeholder),
}

impl Node {
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Select(_) => "Select",
            Node::Insert(_) => "Insert",
            Node::Update(_) => "Update",
            Node::Delete(_) => "Delete",
            Node::CreateTable(_) => "CreateTable",
            Node::AlterTable(_) => "AlterTable",
            Node::DropTable(_) => "DropTable",
            Node::RenameTable(_) => "RenameTable",
            Node::RenameColumn(_) => "RenameColumn",
            Node::BoolExpr(_) => "BoolExpr",
            Node::BinaryExpr(_) => "BinaryExpr",
            Node::FuncCall(_) => "FuncCall",
            Node::ColumnRef(_) => "ColumnRef",
            Node::Literal(_) => "Literal",
            Node::ParamRef(_) => "ParamRef",
            Node::Subquery(_) => "Subquery",
            Node::ResTarget(_) => "ResTarget",
            Node::SortBy(_) => "SortBy",
            Node::List(_) => "List",
            Node::Relation(_) => "Relation",
            Node::ColumnDef(_) => "ColumnDef",
            Node::AlterCmd(_) => "AlterCmd",
            Node::Placeholder(_) => "Placeholder",
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Node::Placeholder(_))
    }

    pub fn into_select(self) -> Option<SelectStmt> {
        match self {
            Node::Select(stmt) => Some(stmt),
            _ => None,
        }
    }

    /// Every parameter in this tree, in tree order.
    ///
    /// Includes parameters held by placeholders.
    pub fn param_refs(&self) -> Vec<ParamRef> {
        let mut out = Vec::new();
        collect_params(self, &mut out);
        out
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Relation(rel) => write!(f, "Relation({})", rel),
            Node::ColumnRef(col) => write!(f, "ColumnRef({})", col),
            Node::ParamRef(p) => write!(f, "${}", p.number),
            Node::Placeholder(p) => write!(f, "Placeholder({})", p.kind),
            other => write!(f, "{}", other.kind()),
        }
    }
}

fn collect_opt(node: &Option<Box<Node>>, out: &mut Vec<ParamRef>) {
    if let Some(node) = node {
        collect_params(node, out);
    }
}

fn collect_targets(targets: &[ResTarget], out: &mut Vec<ParamRef>) {
    for target in targets {
        collect_opt(&target.val, out);
    }
}

fn collect_select(stmt: &SelectStmt, out: &mut Vec<ParamRef>) {
    collect_targets(&stmt.target_list, out);
    collect_opt(&stmt.where_clause, out);
    for node in &stmt.group_clause {
        collect_params(node, out);
    }
    collect_opt(&stmt.having_clause, out);
    for sort in &stmt.sort_clause {
        collect_params(&sort.node, out);
    }
    // The comma form numbers the offset first.
    let mut limit = Vec::new();
    collect_opt(&stmt.limit_count, &mut limit);
    collect_opt(&stmt.limit_offset, &mut limit);
    limit.sort_by_key(|p| p.number);
    out.extend(limit);
    for row in &stmt.values_lists {
        for node in row {
            collect_params(node, out);
        }
    }
}

fn collect_params(node: &Node, out: &mut Vec<ParamRef>) {
    match node {
        Node::Select(stmt) => collect_select(stmt, out),
        Node::Insert(stmt) => {
            collect_select(&stmt.select_stmt, out);
            if let Some(p) = &stmt.unconverted {
                out.extend(p.params.iter().copied());
            }
            collect_targets(&stmt.on_duplicate, out);
        }
        Node::Update(stmt) => {
            collect_targets(&stmt.target_list, out);
            collect_opt(&stmt.where_clause, out);
            collect_opt(&stmt.limit_count, out);
        }
        Node::Delete(stmt) => {
            collect_opt(&stmt.where_clause, out);
            collect_opt(&stmt.limit_count, out);
        }
        Node::BoolExpr(expr) => {
            for arg in &expr.args {
                collect_params(arg, out);
            }
        }
        Node::BinaryExpr(expr) => {
            collect_params(&expr.left, out);
            collect_params(&expr.right, out);
        }
        Node::FuncCall(call) => {
            for arg in &call.args {
                collect_params(arg, out);
            }
        }
        Node::ParamRef(p) => out.push(*p),
        Node::Subquery(link) => {
            if let Some(select) = &link.subselect {
                collect_select(select, out);
            }
            if let Some(p) = &link.unconverted {
                out.extend(p.params.iter().copied());
            }
        }
        Node::ResTarget(target) => collect_opt(&target.val, out),
        Node::SortBy(sort) => collect_params(&sort.node, out),
        Node::List(items) => {
            for item in items {
                collect_params(item, out);
            }
        }
        Node::Placeholder(p) => out.extend(p.params.iter().copied()),
        Node::CreateTable(_)
        | Node::AlterTable(_)
        | Node::DropTable(_)
        | Node::RenameTable(_)
        | Node::RenameColumn(_)
        | Node::ColumnRef(_)
        | Node::Literal(_)
        | Node::Relation(_)
        | Node::ColumnDef(_)
        | Node::AlterCmd(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let rel = Node::Relation(RelationRef::qualified("app", "users"));
        assert_eq!(rel.to_string(), "Relation(app.users)");

        let star = Node::ColumnRef(ColumnRef::star(Some("u")));
        assert_eq!(star.to_string(), "ColumnRef(u.*)");

        let p = Node::ParamRef(ParamRef {
            number: 2,
            location: 0,
        });
        assert_eq!(p.to_string(), "$2");
    }

    #[test]
    fn test_param_refs_include_placeholders() {
        let param = |number| ParamRef {
            number,
            location: 0,
        };
        let tree = Node::BoolExpr(BoolExpr {
            op: BoolOp::And,
            args: vec![
                Node::ParamRef(param(1)),
                Node::Placeholder(Placeholder {
                    kind: "CaseExpr".to_string(),
                    params: vec![param(2), param(3)],
                }),
            ],
        });
        let numbers: Vec<usize> = tree.param_refs().iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_serde_shape() {
        let node = Node::Literal(Literal::new("42"));
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"Literal":{"value":"42"}}"#);
    }
}
