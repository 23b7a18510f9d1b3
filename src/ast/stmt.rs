use serde::{Deserialize, Serialize};

use super::{Node, Placeholder, ResTarget, SortBy};

/// A schema-qualified table reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RelationRef {
    pub schema: Option<String>,
    pub name: String,
}

impl RelationRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
        }
    }

    pub fn qualified(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: Some(schema.into()),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for RelationRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{}.{}", schema, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectStmt {
    pub distinct: bool,
    pub target_list: Vec<ResTarget>,
    pub from_clause: Vec<RelationRef>,
    pub where_clause: Option<Box<Node>>,
    pub group_clause: Vec<Node>,
    pub having_clause: Option<Box<Node>>,
    pub sort_clause: Vec<SortBy>,
    pub limit_count: Option<Box<Node>>,
    pub limit_offset: Option<Box<Node>>,
    /// Literal rows of `INSERT ... VALUES`.
    pub values_lists: Vec<Vec<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertStmt {
    pub relation: RelationRef,
    pub cols: Vec<ResTarget>,
    /// Row source: either `values_lists` or a full query.
    pub select_stmt: Box<SelectStmt>,
    /// `ON DUPLICATE KEY UPDATE` assignments
    pub on_duplicate: Vec<ResTarget>,
    /// Row source with no select form, such as `INSERT ... SELECT ... UNION ...`.
    pub unconverted: Option<Placeholder>,
    pub replace: bool,
    pub ignore: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateStmt {
    pub relation: RelationRef,
    pub target_list: Vec<ResTarget>,
    pub where_clause: Option<Box<Node>>,
    pub limit_count: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteStmt {
    pub relation: RelationRef,
    pub where_clause: Option<Box<Node>>,
    pub limit_count: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub colname: String,
    pub type_name: String,
    pub is_not_null: bool,
    pub comment: Option<String>,
    /// Declared values of `ENUM` / `SET` columns
    pub vals: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTableStmt {
    pub name: RelationRef,
    pub if_not_exists: bool,
    pub temporary: bool,
    /// Source of `CREATE TABLE ... LIKE`
    pub refer_table: Option<RelationRef>,
    pub cols: Vec<ColumnDef>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlterSubtype {
    AddColumn,
    DropColumn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlterCommand {
    pub name: Option<String>,
    pub subtype: AlterSubtype,
    pub def: Option<ColumnDef>,
    pub missing_ok: bool,
}

impl AlterCommand {
    pub fn add_column(def: ColumnDef) -> Self {
        Self {
            name: Some(def.colname.clone()),
            subtype: AlterSubtype::AddColumn,
            def: Some(def),
            missing_ok: false,
        }
    }

    pub fn drop_column(name: impl Into<String>, missing_ok: bool) -> Self {
        Self {
            name: Some(name.into()),
            subtype: AlterSubtype::DropColumn,
            def: None,
            missing_ok,
        }
    }
}

/// Commands apply in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlterTableStmt {
    pub table: RelationRef,
    pub cmds: Vec<AlterCommand>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTableStmt {
    pub if_exists: bool,
    pub tables: Vec<RelationRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameTableStmt {
    pub table: RelationRef,
    pub new_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameColumnStmt {
    pub table: RelationRef,
    pub col: String,
    pub new_name: String,
}
