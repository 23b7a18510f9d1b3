use serde::{Deserialize, Serialize};

use super::{ColumnName, FieldType, Node, TableName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnOptionType {
    PrimaryKey,
    NotNull,
    Null,
    AutoIncrement,
    DefaultValue,
    UniqKey,
    OnUpdate,
    Fulltext,
    Comment,
    Generated,
    Reference,
    Collate,
    Check,
    ColumnFormat,
    Storage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnOption {
    pub tp: ColumnOptionType,
    #[serde(default)]
    pub expr: Option<Box<Node>>,
    #[serde(default)]
    pub str_value: String,
}

impl ColumnOption {
    pub fn new(tp: ColumnOptionType) -> Self {
        Self {
            tp,
            expr: None,
            str_value: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: ColumnName,
    pub tp: FieldType,
    #[serde(default)]
    pub options: Vec<ColumnOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableOptionType {
    Engine,
    Charset,
    Collate,
    AutoIncrement,
    Comment,
    RowFormat,
    KeyBlockSize,
    Compression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableOption {
    pub tp: TableOptionType,
    #[serde(default)]
    pub str_value: String,
    #[serde(default)]
    pub uint_value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexPartSpecification {
    #[serde(default)]
    pub column: Option<ColumnName>,
    #[serde(default)]
    pub length: Option<u32>,
    /// Functional key part.
    #[serde(default)]
    pub expr: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDef {
    pub table: TableName,
    #[serde(default)]
    pub columns: Vec<IndexPartSpecification>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintType {
    PrimaryKey,
    Key,
    Index,
    Uniq,
    ForeignKey,
    Fulltext,
    Check,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub tp: ConstraintType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub keys: Vec<IndexPartSpecification>,
    #[serde(default)]
    pub refer: Option<ReferenceDef>,
    /// `CHECK (expr)`
    #[serde(default)]
    pub expr: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTableStmt {
    #[serde(default)]
    pub if_not_exists: bool,
    #[serde(default)]
    pub temporary: bool,
    pub table: TableName,
    /// `CREATE TABLE t LIKE other`
    #[serde(default)]
    pub refer_table: Option<TableName>,
    #[serde(default)]
    pub cols: Vec<ColumnDef>,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    #[serde(default)]
    pub options: Vec<TableOption>,
    /// `CREATE TABLE t AS SELECT ...`
    #[serde(default)]
    pub select: Option<Box<Node>>,
}

/// `FIRST` / `AFTER col` placement in `ADD` / `MODIFY` / `CHANGE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnPosition {
    First,
    After(ColumnName),
}

/// One alteration inside `ALTER TABLE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AlterTableSpec {
    AddColumns {
        columns: Vec<ColumnDef>,
        #[serde(default)]
        position: Option<ColumnPosition>,
    },
    DropColumn {
        name: ColumnName,
        #[serde(default)]
        if_exists: bool,
    },
    ModifyColumn {
        column: ColumnDef,
        #[serde(default)]
        position: Option<ColumnPosition>,
    },
    ChangeColumn {
        old_name: ColumnName,
        column: ColumnDef,
        #[serde(default)]
        position: Option<ColumnPosition>,
    },
    /// `ALTER COLUMN c SET DEFAULT x` / `DROP DEFAULT`
    AlterColumn {
        name: ColumnName,
        #[serde(default)]
        default: Option<Box<Node>>,
    },
    RenameColumn {
        old_name: ColumnName,
        new_name: ColumnName,
    },
    RenameTable {
        new_table: TableName,
    },
    RenameIndex {
        from: String,
        to: String,
    },
    AddConstraint(Constraint),
    DropPrimaryKey,
    DropIndex {
        name: String,
        #[serde(default)]
        if_exists: bool,
    },
    DropForeignKey {
        name: String,
    },
    Options(Vec<TableOption>),
}

impl AlterTableSpec {
    pub fn kind(&self) -> &'static str {
        match self {
            AlterTableSpec::AddColumns { .. } => "AddColumns",
            AlterTableSpec::DropColumn { .. } => "DropColumn",
            AlterTableSpec::ModifyColumn { .. } => "ModifyColumn",
            AlterTableSpec::ChangeColumn { .. } => "ChangeColumn",
            AlterTableSpec::AlterColumn { .. } => "AlterColumn",
            AlterTableSpec::RenameColumn { .. } => "RenameColumn",
            AlterTableSpec::RenameTable { .. } => "RenameTable",
            AlterTableSpec::RenameIndex { .. } => "RenameIndex",
            AlterTableSpec::AddConstraint(_) => "AddConstraint",
            AlterTableSpec::DropPrimaryKey => "DropPrimaryKey",
            AlterTableSpec::DropIndex { .. } => "DropIndex",
            AlterTableSpec::DropForeignKey { .. } => "DropForeignKey",
            AlterTableSpec::Options(_) => "Options",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTableStmt {
    pub table: TableName,
    pub specs: Vec<AlterTableSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropTableStmt {
    #[serde(default)]
    pub if_exists: bool,
    /// Set for `DROP VIEW`, which shares this node.
    #[serde(default)]
    pub is_view: bool,
    #[serde(default)]
    pub temporary: bool,
    pub tables: Vec<TableName>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenameTableStmt {
    pub old_table: TableName,
    pub new_table: TableName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruncateTableStmt {
    pub table: TableName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIndexStmt {
    pub index_name: String,
    pub table: TableName,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub if_not_exists: bool,
    pub parts: Vec<IndexPartSpecification>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropIndexStmt {
    pub index_name: String,
    pub table: TableName,
    #[serde(default)]
    pub if_exists: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateViewStmt {
    pub view_name: TableName,
    #[serde(default)]
    pub cols: Vec<ColumnName>,
    pub select: Box<Node>,
    #[serde(default)]
    pub or_replace: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDatabaseStmt {
    pub name: String,
    #[serde(default)]
    pub if_not_exists: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropDatabaseStmt {
    pub name: String,
    #[serde(default)]
    pub if_exists: bool,
}
