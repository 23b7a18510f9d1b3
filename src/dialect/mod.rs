//! MySQL-dialect parse tree.
//!
//! This is the node taxonomy emitted by the MySQL front end. The converter
//! only reads it: every tree is owned by whoever produced it and is borrowed
//! for the duration of one conversion.
//!
//! Trees derive serde so a front end running out of process can hand them
//! over as JSON:
//!
//! ```
//! use canonsql::dialect::Node;
//!
//! let json = r#"{"ParamMarkerExpr": {"offset": 7}}"#;
//! let node: Node = serde_json::from_str(json).unwrap();
//! assert_eq!(node.kind(), "ParamMarkerExpr");
//! ```

pub mod builders;
mod ddl;
mod expr;
mod misc;
mod opcode;
mod stmt;
mod types;
pub mod visit;

pub use ddl::*;
pub use expr::*;
pub use misc::*;
pub use opcode::Opcode;
pub use stmt::*;
pub use types::{FieldType, TypeCode};

use serde::{Deserialize, Serialize};

/// Any node the MySQL front end can emit.
///
/// Variants are named after the node type they wrap, so [`Node::kind`]
/// doubles as the type tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    // Leaves
    ValueExpr(ValueExpr),
    ParamMarkerExpr(ParamMarkerExpr),

    // Expressions
    AggregateFuncExpr(AggregateFuncExpr),
    BetweenExpr(BetweenExpr),
    BinaryOperationExpr(BinaryOperationExpr),
    CaseExpr(CaseExpr),
    ColumnNameExpr(ColumnNameExpr),
    CompareSubqueryExpr(CompareSubqueryExpr),
    DefaultExpr(DefaultExpr),
    ExistsSubqueryExpr(ExistsSubqueryExpr),
    FuncCallExpr(FuncCallExpr),
    FuncCastExpr(FuncCastExpr),
    IsNullExpr(IsNullExpr),
    IsTruthExpr(IsTruthExpr),
    MatchAgainst(MatchAgainst),
    ParenthesesExpr(ParenthesesExpr),
    PatternInExpr(PatternInExpr),
    PatternLikeExpr(PatternLikeExpr),
    PatternRegexpExpr(PatternRegexpExpr),
    RowExpr(RowExpr),
    SubqueryExpr(SubqueryExpr),
    TimeUnitExpr(TimeUnitExpr),
    UnaryOperationExpr(UnaryOperationExpr),
    ValuesExpr(ValuesExpr),
    VariableExpr(VariableExpr),
    WindowFuncExpr(WindowFuncExpr),

    // Clauses
    AlterTableSpec(AlterTableSpec),
    Assignment(Assignment),
    ByItem(ByItem),
    ColumnDef(ColumnDef),
    ColumnName(ColumnName),
    Constraint(Constraint),
    FieldList(FieldList),
    GroupByClause(GroupByClause),
    HavingClause(HavingClause),
    Join(Join),
    Limit(Limit),
    OnCondition(OnCondition),
    OrderByClause(OrderByClause),
    SelectField(SelectField),
    TableName(TableName),
    TableRefsClause(TableRefsClause),
    TableSource(TableSource),
    WhenClause(WhenClause),
    WildCardField(WildCardField),
    WindowSpec(WindowSpec),

    // Statements
    AlterTableStmt(AlterTableStmt),
    BeginStmt(BeginStmt),
    CommitStmt(CommitStmt),
    CreateDatabaseStmt(CreateDatabaseStmt),
    CreateIndexStmt(CreateIndexStmt),
    CreateTableStmt(CreateTableStmt),
    CreateViewStmt(CreateViewStmt),
    DeallocateStmt(DeallocateStmt),
    DeleteStmt(DeleteStmt),
    DropDatabaseStmt(DropDatabaseStmt),
    DropIndexStmt(DropIndexStmt),
    DropTableStmt(DropTableStmt),
    ExecuteStmt(ExecuteStmt),
    ExplainStmt(ExplainStmt),
    InsertStmt(InsertStmt),
    LoadDataStmt(LoadDataStmt),
    LockTablesStmt(LockTablesStmt),
    PrepareStmt(PrepareStmt),
    RenameTableStmt(RenameTableStmt),
    RollbackStmt(RollbackStmt),
    SelectStmt(SelectStmt),
    SetOprStmt(SetOprStmt),
    SetStmt(SetStmt),
    ShowStmt(ShowStmt),
    TruncateTableStmt(TruncateTableStmt),
    UnlockTablesStmt(UnlockTablesStmt),
    UpdateStmt(UpdateStmt),
    UseStmt(UseStmt),
}

impl Node {
    /// The type tag of this node.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::ValueExpr(_) => "ValueExpr",
            Node::ParamMarkerExpr(_) => "ParamMarkerExpr",
            Node::AggregateFuncExpr(_) => "AggregateFuncExpr",
            Node::BetweenExpr(_) => "BetweenExpr",
            Node::BinaryOperationExpr(_) => "BinaryOperationExpr",
            Node::CaseExpr(_) => "CaseExpr",
            Node::ColumnNameExpr(_) => "ColumnNameExpr",
            Node::CompareSubqueryExpr(_) => "CompareSubqueryExpr",
            Node::DefaultExpr(_) => "DefaultExpr",
            Node::ExistsSubqueryExpr(_) => "ExistsSubqueryExpr",
            Node::FuncCallExpr(_) => "FuncCallExpr",
            Node::FuncCastExpr(_) => "FuncCastExpr",
            Node::IsNullExpr(_) => "IsNullExpr",
            Node::IsTruthExpr(_) => "IsTruthExpr",
            Node::MatchAgainst(_) => "MatchAgainst",
            Node::ParenthesesExpr(_) => "ParenthesesExpr",
            Node::PatternInExpr(_) => "PatternInExpr",
            Node::PatternLikeExpr(_) => "PatternLikeExpr",
            Node::PatternRegexpExpr(_) => "PatternRegexpExpr",
            Node::RowExpr(_) => "RowExpr",
            Node::SubqueryExpr(_) => "SubqueryExpr",
            Node::TimeUnitExpr(_) => "TimeUnitExpr",
            Node::UnaryOperationExpr(_) => "UnaryOperationExpr",
            Node::ValuesExpr(_) => "ValuesExpr",
            Node::VariableExpr(_) => "VariableExpr",
            Node::WindowFuncExpr(_) => "WindowFuncExpr",
            Node::AlterTableSpec(_) => "AlterTableSpec",
            Node::Assignment(_) => "Assignment",
            Node::ByItem(_) => "ByItem",
            Node::ColumnDef(_) => "ColumnDef",
            Node::ColumnName(_) => "ColumnName",
            Node::Constraint(_) => "Constraint",
            Node::FieldList(_) => "FieldList",
            Node::GroupByClause(_) => "GroupByClause",
            Node::HavingClause(_) => "HavingClause",
            Node::Join(_) => "Join",
            Node::Limit(_) => "Limit",
            Node::OnCondition(_) => "OnCondition",
            Node::OrderByClause(_) => "OrderByClause",
            Node::SelectField(_) => "SelectField",
            Node::TableName(_) => "TableName",
            Node::TableRefsClause(_) => "TableRefsClause",
            Node::TableSource(_) => "TableSource",
            Node::WhenClause(_) => "WhenClause",
            Node::WildCardField(_) => "WildCardField",
            Node::WindowSpec(_) => "WindowSpec",
            Node::AlterTableStmt(_) => "AlterTableStmt",
            Node::BeginStmt(_) => "BeginStmt",
            Node::CommitStmt(_) => "CommitStmt",
            Node::CreateDatabaseStmt(_) => "CreateDatabaseStmt",
            Node::CreateIndexStmt(_) => "CreateIndexStmt",
            Node::CreateTableStmt(_) => "CreateTableStmt",
            Node::CreateViewStmt(_) => "CreateViewStmt",
            Node::DeallocateStmt(_) => "DeallocateStmt",
            Node::DeleteStmt(_) => "DeleteStmt",
            Node::DropDatabaseStmt(_) => "DropDatabaseStmt",
            Node::DropIndexStmt(_) => "DropIndexStmt",
            Node::DropTableStmt(_) => "DropTableStmt",
            Node::ExecuteStmt(_) => "ExecuteStmt",
            Node::ExplainStmt(_) => "ExplainStmt",
            Node::InsertStmt(_) => "InsertStmt",
            Node::LoadDataStmt(_) => "LoadDataStmt",
            Node::LockTablesStmt(_) => "LockTablesStmt",
            Node::PrepareStmt(_) => "PrepareStmt",
            Node::RenameTableStmt(_) => "RenameTableStmt",
            Node::RollbackStmt(_) => "RollbackStmt",
            Node::SelectStmt(_) => "SelectStmt",
            Node::SetOprStmt(_) => "SetOprStmt",
            Node::SetStmt(_) => "SetStmt",
            Node::ShowStmt(_) => "ShowStmt",
            Node::TruncateTableStmt(_) => "TruncateTableStmt",
            Node::UnlockTablesStmt(_) => "UnlockTablesStmt",
            Node::UpdateStmt(_) => "UpdateStmt",
            Node::UseStmt(_) => "UseStmt",
        }
    }

    /// Whether this node is a complete statement.
    pub fn is_statement(&self) -> bool {
        self.kind().ends_with("Stmt")
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}
