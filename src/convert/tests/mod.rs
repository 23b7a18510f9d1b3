//! Converter test modules.
//!
//! - `dml`: SELECT, INSERT, UPDATE, DELETE
//! - `ddl`: CREATE / ALTER / DROP / RENAME TABLE
//! - `params`: parameter numbering across statement shapes
//! - `dispatch`: placeholders and diagnostics

mod ddl;
mod dml;

use crate::ast::{self, ParamRef};

/// Parameter numbers in the order they appear in the tree.
pub(super) fn numbers(node: &ast::Node) -> Vec<usize> {
    node.param_refs().iter().map(|p| p.number).collect()
}

pub(super) fn pref(number: usize, location: usize) -> ast::Node {
    ast::Node::ParamRef(ParamRef { number, location })
}
