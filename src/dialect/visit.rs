//! Pre-order traversal of dialect trees.
//!
//! Children are visited in the order they are written in the query text.
//! Parameter numbering depends on that order, so every `walk_*` function
//! below must keep it when new fields are added.

use super::*;

/// Callbacks for a pre-order walk. Override the hooks you need; the
/// defaults keep walking.
pub trait Visitor<'ast> {
    fn visit_node(&mut self, node: &'ast Node) {
        walk_node(self, node);
    }

    fn visit_table_name(&mut self, _name: &'ast TableName) {}

    fn visit_param_marker(&mut self, _marker: &'ast ParamMarkerExpr) {}
}

fn walk_opt<'ast, V>(v: &mut V, node: Option<&'ast Node>)
where
    V: Visitor<'ast> + ?Sized,
{
    if let Some(node) = node {
        v.visit_node(node);
    }
}

fn walk_all<'ast, V>(v: &mut V, nodes: &'ast [Node])
where
    V: Visitor<'ast> + ?Sized,
{
    for node in nodes {
        v.visit_node(node);
    }
}

pub fn walk_node<'ast, V>(v: &mut V, node: &'ast Node)
where
    V: Visitor<'ast> + ?Sized,
{
    match node {
        Node::ValueExpr(_)
        | Node::ColumnNameExpr(_)
        | Node::ColumnName(_)
        | Node::DefaultExpr(_)
        | Node::TimeUnitExpr(_)
        | Node::ValuesExpr(_)
        | Node::WildCardField(_)
        | Node::BeginStmt(_)
        | Node::CommitStmt(_)
        | Node::RollbackStmt(_)
        | Node::CreateDatabaseStmt(_)
        | Node::DropDatabaseStmt(_)
        | Node::DeallocateStmt(_)
        | Node::PrepareStmt(_)
        | Node::UnlockTablesStmt(_)
        | Node::UseStmt(_) => {}

        Node::ParamMarkerExpr(n) => v.visit_param_marker(n),
        Node::TableName(n) => v.visit_table_name(n),

        Node::AggregateFuncExpr(n) => {
            walk_all(v, &n.args);
            if let Some(order) = &n.order {
                walk_order_by(v, order);
            }
        }
        Node::BetweenExpr(n) => {
            v.visit_node(&n.expr);
            v.visit_node(&n.left);
            v.visit_node(&n.right);
        }
        Node::BinaryOperationExpr(n) => {
            v.visit_node(&n.left);
            v.visit_node(&n.right);
        }
        Node::CaseExpr(n) => {
            walk_opt(v, n.value.as_deref());
            for when in &n.when_clauses {
                walk_when(v, when);
            }
            walk_opt(v, n.else_clause.as_deref());
        }
        Node::CompareSubqueryExpr(n) => {
            v.visit_node(&n.left);
            v.visit_node(&n.right);
        }
        Node::ExistsSubqueryExpr(n) => v.visit_node(&n.subquery),
        Node::FuncCallExpr(n) => walk_all(v, &n.args),
        Node::FuncCastExpr(n) => v.visit_node(&n.expr),
        Node::IsNullExpr(n) => v.visit_node(&n.expr),
        Node::IsTruthExpr(n) => v.visit_node(&n.expr),
        Node::MatchAgainst(n) => v.visit_node(&n.against),
        Node::ParenthesesExpr(n) => v.visit_node(&n.expr),
        Node::PatternInExpr(n) => {
            v.visit_node(&n.expr);
            walk_all(v, &n.list);
            walk_opt(v, n.sel.as_deref());
        }
        Node::PatternLikeExpr(n) => walk_pattern_like(v, n),
        Node::PatternRegexpExpr(n) => {
            v.visit_node(&n.expr);
            v.visit_node(&n.pattern);
        }
        Node::RowExpr(n) => walk_all(v, &n.values),
        Node::SubqueryExpr(n) => v.visit_node(&n.query),
        Node::UnaryOperationExpr(n) => v.visit_node(&n.operand),
        Node::VariableExpr(n) => walk_opt(v, n.value.as_deref()),
        Node::WindowFuncExpr(n) => {
            walk_all(v, &n.args);
            walk_window_spec(v, &n.spec);
        }

        Node::AlterTableSpec(n) => walk_alter_spec(v, n),
        Node::Assignment(n) => v.visit_node(&n.expr),
        Node::ByItem(n) => v.visit_node(&n.expr),
        Node::ColumnDef(n) => walk_column_def(v, n),
        Node::Constraint(n) => walk_constraint(v, n),
        Node::FieldList(n) => walk_field_list(v, n),
        Node::GroupByClause(n) => walk_by_items(v, &n.items),
        Node::HavingClause(n) => v.visit_node(&n.expr),
        Node::Join(n) => walk_join(v, n),
        Node::Limit(n) => walk_limit(v, n),
        Node::OnCondition(n) => v.visit_node(&n.expr),
        Node::OrderByClause(n) => walk_order_by(v, n),
        Node::SelectField(n) => walk_opt(v, n.expr.as_deref()),
        Node::TableRefsClause(n) => walk_table_refs(v, n),
        Node::TableSource(n) => v.visit_node(&n.source),
        Node::WhenClause(n) => walk_when(v, n),
        Node::WindowSpec(n) => walk_window_spec(v, n),

        Node::AlterTableStmt(n) => {
            v.visit_table_name(&n.table);
            for spec in &n.specs {
                walk_alter_spec(v, spec);
            }
        }
        Node::CreateIndexStmt(n) => {
            v.visit_table_name(&n.table);
            for part in &n.parts {
                walk_index_part(v, part);
            }
        }
        Node::CreateTableStmt(n) => walk_create_table(v, n),
        Node::CreateViewStmt(n) => {
            v.visit_table_name(&n.view_name);
            v.visit_node(&n.select);
        }
        Node::DeleteStmt(n) => walk_delete(v, n),
        Node::DropIndexStmt(n) => v.visit_table_name(&n.table),
        Node::DropTableStmt(n) => {
            for table in &n.tables {
                v.visit_table_name(table);
            }
        }
        Node::ExecuteStmt(n) => walk_all(v, &n.using_vars),
        Node::ExplainStmt(n) => v.visit_node(&n.stmt),
        Node::InsertStmt(n) => walk_insert(v, n),
        Node::LoadDataStmt(n) => v.visit_table_name(&n.table),
        Node::LockTablesStmt(n) => {
            for lock in &n.table_locks {
                v.visit_table_name(&lock.table);
            }
        }
        Node::RenameTableStmt(n) => {
            v.visit_table_name(&n.old_table);
            v.visit_table_name(&n.new_table);
        }
        Node::SelectStmt(n) => walk_select(v, n),
        Node::SetOprStmt(n) => {
            walk_all(v, &n.selects);
            if let Some(order) = &n.order_by {
                walk_order_by(v, order);
            }
            if let Some(limit) = &n.limit {
                walk_limit(v, limit);
            }
        }
        Node::SetStmt(n) => {
            for var in &n.variables {
                v.visit_node(&var.value);
            }
        }
        Node::ShowStmt(n) => {
            if let Some(table) = &n.table {
                v.visit_table_name(table);
            }
            if let Some(pattern) = &n.pattern {
                walk_pattern_like(v, pattern);
            }
            walk_opt(v, n.where_clause.as_deref());
        }
        Node::TruncateTableStmt(n) => v.visit_table_name(&n.table),
        Node::UpdateStmt(n) => walk_update(v, n),
    }
}

fn walk_when<'ast, V>(v: &mut V, when: &'ast WhenClause)
where
    V: Visitor<'ast> + ?Sized,
{
    v.visit_node(&when.expr);
    v.visit_node(&when.result);
}

fn walk_pattern_like<'ast, V>(v: &mut V, n: &'ast PatternLikeExpr)
where
    V: Visitor<'ast> + ?Sized,
{
    v.visit_node(&n.expr);
    v.visit_node(&n.pattern);
}

fn walk_window_spec<'ast, V>(v: &mut V, spec: &'ast WindowSpec)
where
    V: Visitor<'ast> + ?Sized,
{
    walk_by_items(v, &spec.partition_by);
    if let Some(order) = &spec.order_by {
        walk_order_by(v, order);
    }
}

pub fn walk_by_items<'ast, V>(v: &mut V, items: &'ast [ByItem])
where
    V: Visitor<'ast> + ?Sized,
{
    for item in items {
        v.visit_node(&item.expr);
    }
}

pub fn walk_order_by<'ast, V>(v: &mut V, order: &'ast OrderByClause)
where
    V: Visitor<'ast> + ?Sized,
{
    walk_by_items(v, &order.items);
}

pub fn walk_limit<'ast, V>(v: &mut V, limit: &'ast Limit)
where
    V: Visitor<'ast> + ?Sized,
{
    if limit.offset_first {
        walk_opt(v, limit.offset.as_deref());
        v.visit_node(&limit.count);
    } else {
        v.visit_node(&limit.count);
        walk_opt(v, limit.offset.as_deref());
    }
}

pub fn walk_field_list<'ast, V>(v: &mut V, list: &'ast FieldList)
where
    V: Visitor<'ast> + ?Sized,
{
    for field in &list.fields {
        walk_opt(v, field.expr.as_deref());
    }
}

pub fn walk_table_refs<'ast, V>(v: &mut V, clause: &'ast TableRefsClause)
where
    V: Visitor<'ast> + ?Sized,
{
    walk_join(v, &clause.table_refs);
}

pub fn walk_join<'ast, V>(v: &mut V, join: &'ast Join)
where
    V: Visitor<'ast> + ?Sized,
{
    v.visit_node(&join.left);
    walk_opt(v, join.right.as_deref());
    if let Some(on) = &join.on {
        v.visit_node(&on.expr);
    }
}

pub fn walk_select<'ast, V>(v: &mut V, n: &'ast SelectStmt)
where
    V: Visitor<'ast> + ?Sized,
{
    walk_field_list(v, &n.fields);
    if let Some(from) = &n.from {
        walk_table_refs(v, from);
    }
    walk_opt(v, n.where_clause.as_deref());
    if let Some(group) = &n.group_by {
        walk_by_items(v, &group.items);
    }
    if let Some(having) = &n.having {
        v.visit_node(&having.expr);
    }
    if let Some(order) = &n.order_by {
        walk_order_by(v, order);
    }
    if let Some(limit) = &n.limit {
        walk_limit(v, limit);
    }
}

fn walk_insert<'ast, V>(v: &mut V, n: &'ast InsertStmt)
where
    V: Visitor<'ast> + ?Sized,
{
    walk_table_refs(v, &n.table);
    for row in &n.lists {
        walk_all(v, row);
    }
    for assignment in &n.setlist {
        v.visit_node(&assignment.expr);
    }
    walk_opt(v, n.select.as_deref());
    for assignment in &n.on_duplicate {
        v.visit_node(&assignment.expr);
    }
}

fn walk_update<'ast, V>(v: &mut V, n: &'ast UpdateStmt)
where
    V: Visitor<'ast> + ?Sized,
{
    walk_table_refs(v, &n.table_refs);
    for assignment in &n.list {
        v.visit_node(&assignment.expr);
    }
    walk_opt(v, n.where_clause.as_deref());
    if let Some(order) = &n.order {
        walk_order_by(v, order);
    }
    if let Some(limit) = &n.limit {
        walk_limit(v, limit);
    }
}

fn walk_delete<'ast, V>(v: &mut V, n: &'ast DeleteStmt)
where
    V: Visitor<'ast> + ?Sized,
{
    if let Some(list) = &n.tables {
        for table in &list.tables {
            v.visit_table_name(table);
        }
    }
    walk_table_refs(v, &n.table_refs);
    walk_opt(v, n.where_clause.as_deref());
    if let Some(order) = &n.order {
        walk_order_by(v, order);
    }
    if let Some(limit) = &n.limit {
        walk_limit(v, limit);
    }
}

fn walk_index_part<'ast, V>(v: &mut V, part: &'ast IndexPartSpecification)
where
    V: Visitor<'ast> + ?Sized,
{
    walk_opt(v, part.expr.as_deref());
}

fn walk_column_def<'ast, V>(v: &mut V, def: &'ast ColumnDef)
where
    V: Visitor<'ast> + ?Sized,
{
    for option in &def.options {
        walk_opt(v, option.expr.as_deref());
    }
}

fn walk_constraint<'ast, V>(v: &mut V, constraint: &'ast Constraint)
where
    V: Visitor<'ast> + ?Sized,
{
    for key in &constraint.keys {
        walk_index_part(v, key);
    }
    if let Some(refer) = &constraint.refer {
        v.visit_table_name(&refer.table);
        for part in &refer.columns {
            walk_index_part(v, part);
        }
    }
    walk_opt(v, constraint.expr.as_deref());
}

fn walk_alter_spec<'ast, V>(v: &mut V, spec: &'ast AlterTableSpec)
where
    V: Visitor<'ast> + ?Sized,
{
    match spec {
        AlterTableSpec::AddColumns { columns, .. } => {
            for def in columns {
                walk_column_def(v, def);
            }
        }
        AlterTableSpec::ModifyColumn { column, .. } | AlterTableSpec::ChangeColumn { column, .. } => {
            walk_column_def(v, column)
        }
        AlterTableSpec::AlterColumn { default, .. } => walk_opt(v, default.as_deref()),
        AlterTableSpec::RenameTable { new_table } => v.visit_table_name(new_table),
        AlterTableSpec::AddConstraint(constraint) => walk_constraint(v, constraint),
        AlterTableSpec::DropColumn { .. }
        | AlterTableSpec::RenameColumn { .. }
        | AlterTableSpec::RenameIndex { .. }
        | AlterTableSpec::DropPrimaryKey
        | AlterTableSpec::DropIndex { .. }
        | AlterTableSpec::DropForeignKey { .. }
        | AlterTableSpec::Options(_) => {}
    }
}

fn walk_create_table<'ast, V>(v: &mut V, n: &'ast CreateTableStmt)
where
    V: Visitor<'ast> + ?Sized,
{
    v.visit_table_name(&n.table);
    if let Some(refer) = &n.refer_table {
        v.visit_table_name(refer);
    }
    for def in &n.cols {
        walk_column_def(v, def);
    }
    for constraint in &n.constraints {
        walk_constraint(v, constraint);
    }
    walk_opt(v, n.select.as_deref());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::builders::*;

    #[derive(Default)]
    struct Recorder {
        tables: Vec<String>,
        markers: Vec<usize>,
    }

    impl<'ast> Visitor<'ast> for Recorder {
        fn visit_table_name(&mut self, name: &'ast TableName) {
            self.tables.push(name.name.clone());
        }

        fn visit_param_marker(&mut self, marker: &'ast ParamMarkerExpr) {
            self.markers.push(marker.offset);
        }
    }

    #[test]
    fn test_select_walk_is_lexical() {
        // SELECT ? FROM a JOIN b ON a.id = ? WHERE x = ? GROUP BY ? HAVING ? ORDER BY ? LIMIT ?, ?
        let stmt = SelectStmt {
            fields: FieldList {
                fields: vec![field(param(7))],
            },
            from: Some(TableRefsClause {
                table_refs: Join {
                    on: Some(OnCondition {
                        expr: Box::new(binop(Opcode::Eq, col("id"), param(30))),
                    }),
                    ..join(table_source("a"), table_source("b"))
                },
            }),
            where_clause: Some(Box::new(binop(Opcode::Eq, col("x"), param(42)))),
            group_by: Some(GroupByClause {
                items: vec![by_item(param(53), false)],
                rollup: false,
            }),
            having: Some(HavingClause {
                expr: Box::new(param(62)),
            }),
            order_by: Some(OrderByClause {
                items: vec![by_item(param(73), false)],
            }),
            limit: Some(Limit {
                count: Box::new(param(84)),
                offset: Some(Box::new(param(81))),
                offset_first: true,
            }),
            ..Default::default()
        };

        let mut recorder = Recorder::default();
        recorder.visit_node(&Node::SelectStmt(stmt));

        assert_eq!(recorder.tables, vec!["a", "b"]);
        assert_eq!(recorder.markers, vec![7, 30, 42, 53, 62, 73, 81, 84]);
    }

    #[test]
    fn test_derived_table_is_walked() {
        let inner = select_from(&["inner_t"]);
        let source = Node::TableSource(TableSource {
            source: Box::new(Node::SelectStmt(inner)),
            as_name: "d".to_string(),
        });
        let clause = TableRefsClause {
            table_refs: join(source, table_source("outer_t")),
        };

        let mut recorder = Recorder::default();
        walk_table_refs(&mut recorder, &clause);
        assert_eq!(recorder.tables, vec!["inner_t", "outer_t"]);
    }
}
