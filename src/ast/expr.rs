use serde::{Deserialize, Serialize};

use super::{Node, SelectStmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoolOp {
    And,
    Or,
    /// Single operand
    Not,
}

impl std::fmt::Display for BoolOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoolOp::And => write!(f, "AND"),
            BoolOp::Or => write!(f, "OR"),
            BoolOp::Not => write!(f, "NOT"),
        }
    }
}

/// Logical connective over an ordered operand list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoolExpr {
    pub op: BoolOp,
    pub args: Vec<Node>,
}

/// Any non-logical binary operator, named by its SQL spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub name: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FuncName {
    pub schema: Option<String>,
    pub name: String,
}

impl std::fmt::Display for FuncName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{}.{}", schema, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncCall {
    pub func: FuncName,
    pub args: Vec<Node>,
    /// `COUNT(*)`, also set for `COUNT(1)`
    pub agg_star: bool,
    pub agg_distinct: bool,
    /// Byte offset of the call in the source text, 0 when unknown.
    pub location: usize,
}

impl FuncCall {
    /// Whether two calls are the same ignoring source position.
    pub fn same_call(&self, other: &FuncCall) -> bool {
        self.func == other.func
            && self.args == other.args
            && self.agg_star == other.agg_star
            && self.agg_distinct == other.agg_distinct
    }
}

/// One segment of a column reference path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnField {
    Name(String),
    Star,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRef {
    pub fields: Vec<ColumnField>,
}

impl ColumnRef {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            fields: vec![ColumnField::Name(name.into())],
        }
    }

    /// `*` or `table.*`
    pub fn star(table: Option<&str>) -> Self {
        let mut fields = Vec::with_capacity(2);
        if let Some(table) = table {
            fields.push(ColumnField::Name(table.to_string()));
        }
        fields.push(ColumnField::Star);
        Self { fields }
    }
}

impl std::fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            match field {
                ColumnField::Name(name) => write!(f, "{}", name)?,
                ColumnField::Star => write!(f, "*")?,
            }
        }
        Ok(())
    }
}

/// A constant, kept in its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Literal {
    pub value: String,
}

impl Literal {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A positional parameter. Numbers start at 1 within each statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamRef {
    pub number: usize,
    pub location: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubLinkKind {
    /// A scalar or `IN` subquery
    Expr,
    Exists,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubLink {
    pub kind: SubLinkKind,
    /// `None` when the body did not convert to a select.
    pub subselect: Option<Box<SelectStmt>>,
    /// The body when it has no select form, such as a `UNION`.
    pub unconverted: Option<Placeholder>,
}

/// An output column, assignment target, or insert column.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResTarget {
    pub name: Option<String>,
    pub val: Option<Box<Node>>,
    pub location: usize,
}

impl ResTarget {
    /// A bare column name, as in an `INSERT` column list.
    pub fn column(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortBy {
    pub node: Box<Node>,
    pub desc: bool,
}

/// A construct with no canonical mapping.
///
/// `params` holds the parameters numbered inside the unconverted subtree
/// so callers can still bind every argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    pub kind: String,
    pub params: Vec<ParamRef>,
}
