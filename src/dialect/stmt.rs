use serde::{Deserialize, Serialize};

use super::Node;

/// A possibly qualified column name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnName {
    #[serde(default)]
    pub schema: String,
    #[serde(default)]
    pub table: String,
    pub name: String,
}

impl ColumnName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A possibly schema-qualified table name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableName {
    #[serde(default)]
    pub schema: String,
    pub name: String,
}

impl TableName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: String::new(),
            name: name.into(),
        }
    }

    pub fn qualified(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldList {
    pub fields: Vec<SelectField>,
}

/// One item of a select list: either a wildcard or an expression.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectField {
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub wildcard: Option<WildCardField>,
    #[serde(default)]
    pub expr: Option<Box<Node>>,
    #[serde(default)]
    pub as_name: String,
}

/// `*` or `t.*`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WildCardField {
    #[serde(default)]
    pub schema: String,
    #[serde(default)]
    pub table: String,
}

/// The FROM clause, or the target of a DML statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRefsClause {
    pub table_refs: Join,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JoinType {
    #[default]
    Inner,
    Left,
    Right,
}

/// A join tree node. A single table is a join with no right side.
///
/// Both sides are `TableSource`, `TableName` or nested `Join` nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    pub left: Box<Node>,
    #[serde(default)]
    pub right: Option<Box<Node>>,
    #[serde(default)]
    pub tp: JoinType,
    #[serde(default)]
    pub on: Option<OnCondition>,
    #[serde(default)]
    pub using: Vec<ColumnName>,
    #[serde(default)]
    pub natural: bool,
    #[serde(default)]
    pub straight: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnCondition {
    pub expr: Box<Node>,
}

/// A table, derived table, or parenthesized join with an optional alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSource {
    pub source: Box<Node>,
    #[serde(default)]
    pub as_name: String,
}

/// `col = expr` in `UPDATE ... SET`, `INSERT ... SET` and `ON DUPLICATE KEY UPDATE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub column: ColumnName,
    pub expr: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ByItem {
    pub expr: Box<Node>,
    #[serde(default)]
    pub desc: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupByClause {
    pub items: Vec<ByItem>,
    #[serde(default)]
    pub rollup: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HavingClause {
    pub expr: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderByClause {
    pub items: Vec<ByItem>,
}

/// `LIMIT count [OFFSET offset]` or `LIMIT offset, count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    pub count: Box<Node>,
    #[serde(default)]
    pub offset: Option<Box<Node>>,
    /// Set for the comma form, where the offset is written first.
    #[serde(default)]
    pub offset_first: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectStmt {
    #[serde(default)]
    pub distinct: bool,
    #[serde(default)]
    pub fields: FieldList,
    #[serde(default)]
    pub from: Option<TableRefsClause>,
    #[serde(default)]
    pub where_clause: Option<Box<Node>>,
    #[serde(default)]
    pub group_by: Option<GroupByClause>,
    #[serde(default)]
    pub having: Option<HavingClause>,
    #[serde(default)]
    pub order_by: Option<OrderByClause>,
    #[serde(default)]
    pub limit: Option<Limit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetOprType {
    Union,
    UnionAll,
    Except,
    Intersect,
}

/// `UNION` / `EXCEPT` / `INTERSECT` over two or more selects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetOprStmt {
    pub op: SetOprType,
    pub selects: Vec<Node>,
    #[serde(default)]
    pub order_by: Option<OrderByClause>,
    #[serde(default)]
    pub limit: Option<Limit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertStmt {
    #[serde(default)]
    pub is_replace: bool,
    #[serde(default)]
    pub ignore: bool,
    pub table: TableRefsClause,
    #[serde(default)]
    pub columns: Vec<ColumnName>,
    /// `VALUES (...), (...)` rows.
    #[serde(default)]
    pub lists: Vec<Vec<Node>>,
    /// `INSERT ... SET col = expr, ...`
    #[serde(default)]
    pub setlist: Vec<Assignment>,
    /// `INSERT ... SELECT`
    #[serde(default)]
    pub select: Option<Box<Node>>,
    #[serde(default)]
    pub on_duplicate: Vec<Assignment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateStmt {
    pub table_refs: TableRefsClause,
    pub list: Vec<Assignment>,
    #[serde(default)]
    pub where_clause: Option<Box<Node>>,
    #[serde(default)]
    pub order: Option<OrderByClause>,
    #[serde(default)]
    pub limit: Option<Limit>,
    #[serde(default)]
    pub ignore: bool,
    #[serde(default)]
    pub multiple_table: bool,
}

/// Target list of a multi-table delete (`DELETE t1, t2 FROM ...`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteTableList {
    pub tables: Vec<TableName>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteStmt {
    pub table_refs: TableRefsClause,
    #[serde(default)]
    pub tables: Option<DeleteTableList>,
    #[serde(default)]
    pub where_clause: Option<Box<Node>>,
    #[serde(default)]
    pub order: Option<OrderByClause>,
    #[serde(default)]
    pub limit: Option<Limit>,
    #[serde(default)]
    pub ignore: bool,
    #[serde(default)]
    pub is_multi_table: bool,
}
