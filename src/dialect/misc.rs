//! Session, transaction and utility statements.

use serde::{Deserialize, Serialize};

use super::{ColumnName, Node, PatternLikeExpr, TableName};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseStmt {
    pub db_name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BeginStmt {
    #[serde(default)]
    pub read_only: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommitStmt {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RollbackStmt {
    #[serde(default)]
    pub savepoint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableAssignment {
    pub name: String,
    pub value: Box<Node>,
    #[serde(default)]
    pub is_global: bool,
    #[serde(default)]
    pub is_system: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetStmt {
    pub variables: Vec<VariableAssignment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShowType {
    Tables,
    Columns,
    Databases,
    CreateTable,
    Index,
    Variables,
    Status,
    Warnings,
    ProcessList,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowStmt {
    pub tp: ShowType,
    #[serde(default)]
    pub table: Option<TableName>,
    #[serde(default)]
    pub pattern: Option<PatternLikeExpr>,
    #[serde(default)]
    pub where_clause: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainStmt {
    pub stmt: Box<Node>,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub analyze: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepareStmt {
    pub name: String,
    #[serde(default)]
    pub sql_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteStmt {
    pub name: String,
    #[serde(default)]
    pub using_vars: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeallocateStmt {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadDataStmt {
    pub path: String,
    pub table: TableName,
    #[serde(default)]
    pub columns: Vec<ColumnName>,
    #[serde(default)]
    pub is_local: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableLockType {
    Read,
    ReadLocal,
    Write,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableLock {
    pub table: TableName,
    pub lock_type: TableLockType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockTablesStmt {
    pub table_locks: Vec<TableLock>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UnlockTablesStmt {}
