use serde::{Deserialize, Serialize};

use super::{ByItem, ColumnName, FieldType, Node, Opcode, OrderByClause};

/// A literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Datum {
    Null,
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    /// Exact decimal literal, kept as written.
    Decimal(String),
}

impl Datum {
    /// The integer held by this datum, if it is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Datum::Int(n) => Some(*n),
            Datum::Uint(n) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Datum::String(s) | Datum::Decimal(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for Datum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Datum::Null => write!(f, "NULL"),
            Datum::Int(n) => write!(f, "{}", n),
            Datum::Uint(n) => write!(f, "{}", n),
            Datum::Float(n) => write!(f, "{}", n),
            Datum::String(s) | Datum::Decimal(s) => write!(f, "{}", s),
            Datum::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueExpr {
    pub datum: Datum,
    #[serde(default)]
    pub offset: usize,
}

/// A `?` placeholder. `offset` is its byte position in the query text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamMarkerExpr {
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryOperationExpr {
    pub op: Opcode,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryOperationExpr {
    pub op: Opcode,
    pub operand: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnNameExpr {
    pub name: ColumnName,
}

/// A scalar function call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncCallExpr {
    #[serde(default)]
    pub schema: String,
    pub fn_name: String,
    #[serde(default)]
    pub args: Vec<Node>,
    #[serde(default)]
    pub offset: usize,
}

/// An aggregate call. `COUNT(*)` arrives with a single integer `1` argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateFuncExpr {
    pub name: String,
    #[serde(default)]
    pub args: Vec<Node>,
    #[serde(default)]
    pub distinct: bool,
    /// `GROUP_CONCAT(... ORDER BY ...)`
    #[serde(default)]
    pub order: Option<OrderByClause>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowFuncExpr {
    pub name: String,
    #[serde(default)]
    pub args: Vec<Node>,
    #[serde(default)]
    pub distinct: bool,
    pub spec: WindowSpec,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowSpec {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub partition_by: Vec<ByItem>,
    #[serde(default)]
    pub order_by: Option<OrderByClause>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastFunction {
    Cast,
    Convert,
    /// `BINARY expr`
    Binary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncCastExpr {
    pub expr: Box<Node>,
    pub tp: FieldType,
    pub function: CastFunction,
}

/// A parenthesized query used as an expression or table source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubqueryExpr {
    pub query: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistsSubqueryExpr {
    pub subquery: Box<Node>,
    #[serde(default)]
    pub not: bool,
}

/// `expr op ANY|ALL (subquery)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareSubqueryExpr {
    pub left: Box<Node>,
    pub op: Opcode,
    pub right: Box<Node>,
    #[serde(default)]
    pub all: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetweenExpr {
    pub expr: Box<Node>,
    pub left: Box<Node>,
    pub right: Box<Node>,
    #[serde(default)]
    pub not: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseExpr {
    #[serde(default)]
    pub value: Option<Box<Node>>,
    pub when_clauses: Vec<WhenClause>,
    #[serde(default)]
    pub else_clause: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhenClause {
    pub expr: Box<Node>,
    pub result: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsNullExpr {
    pub expr: Box<Node>,
    #[serde(default)]
    pub not: bool,
}

/// `expr IS [NOT] TRUE|FALSE`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsTruthExpr {
    pub expr: Box<Node>,
    #[serde(default)]
    pub not: bool,
    pub truth: bool,
}

/// `expr [NOT] IN (list)` or `expr [NOT] IN (subquery)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternInExpr {
    pub expr: Box<Node>,
    #[serde(default)]
    pub list: Vec<Node>,
    #[serde(default)]
    pub not: bool,
    #[serde(default)]
    pub sel: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternLikeExpr {
    pub expr: Box<Node>,
    pub pattern: Box<Node>,
    #[serde(default)]
    pub not: bool,
    #[serde(default)]
    pub escape: Option<char>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternRegexpExpr {
    pub expr: Box<Node>,
    pub pattern: Box<Node>,
    #[serde(default)]
    pub not: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenthesesExpr {
    pub expr: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowExpr {
    pub values: Vec<Node>,
}

/// `DEFAULT` or `DEFAULT(col)`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DefaultExpr {
    #[serde(default)]
    pub name: Option<ColumnName>,
}

/// `VALUES(col)` inside `ON DUPLICATE KEY UPDATE`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuesExpr {
    pub column: ColumnNameExpr,
}

/// `@var`, `@@var`, or `@var := expr`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableExpr {
    pub name: String,
    #[serde(default)]
    pub is_global: bool,
    #[serde(default)]
    pub is_system: bool,
    #[serde(default)]
    pub value: Option<Box<Node>>,
}

/// `MATCH (cols) AGAINST (expr)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchAgainst {
    pub column_names: Vec<ColumnName>,
    pub against: Box<Node>,
}

/// Unit keyword inside `INTERVAL` and date functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeUnitExpr {
    pub unit: String,
}
