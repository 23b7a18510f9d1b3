//! # canonsql
//!
//! Converts MySQL-dialect parse trees into a single dialect-neutral SQL
//! tree for schema modeling, type inference and code generation.
//!
//! ## Quick Example
//!
//! ```rust
//! use canonsql::prelude::*;
//! use canonsql::dialect::builders::*;
//!
//! // DELETE FROM users WHERE id = ?
//! let stmt = dialect::Node::DeleteStmt(dialect::DeleteStmt {
//!     table_refs: single_table("users"),
//!     tables: None,
//!     where_clause: Some(Box::new(eq(col("id"), param(30)))),
//!     order: None,
//!     limit: None,
//!     ignore: false,
//!     is_multi_table: false,
//! });
//!
//! let out = canonsql::convert(&stmt)?;
//! assert_eq!(out.kind(), "Delete");
//! assert_eq!(out.param_refs()[0].number, 1);
//! # Ok::<(), ConvertError>(())
//! ```
//!
//! ## Layers
//!
//! | Module        | Role                                          |
//! |---------------|-----------------------------------------------|
//! | `dialect`     | Input parse tree, as the MySQL front end emits |
//! | `ast`         | Canonical output tree                          |
//! | `convert`     | The converter and its per-statement context    |
//! | `diagnostics` | Optional notices about skipped constructs      |

pub mod ast;
pub mod config;
pub mod convert;
pub mod diagnostics;
pub mod dialect;
pub mod error;

pub mod prelude {
    pub use crate::ast;
    pub use crate::config::{Config, OutputFormat};
    pub use crate::convert::{convert, convert_with_config, ConvertContext, Converter};
    pub use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
    pub use crate::dialect;
    pub use crate::error::*;
}

pub use convert::{convert, convert_with_config};

/// Decode a dialect tree from JSON and convert it.
///
/// # Example
///
/// ```
/// let out = canonsql::convert_json(r#"{"ParamMarkerExpr": {"offset": 7}}"#).unwrap();
/// assert_eq!(out.to_string(), "$1");
/// ```
pub fn convert_json(json: &str) -> error::ConvertResult<ast::Node> {
    let node: dialect::Node = serde_json::from_str(json)?;
    convert::convert(&node)
}
