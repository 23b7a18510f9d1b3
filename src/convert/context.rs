//! Per-statement conversion state.

use crate::ast::ParamRef;
use crate::dialect::visit::Visitor;
use crate::dialect::ParamMarkerExpr;

/// Mutable state for converting one statement.
///
/// Holds the parameter counter. Use one context per statement; sharing a
/// context across statements continues their numbering.
#[derive(Debug, Default, Clone)]
pub struct ConvertContext {
    param_count: usize,
}

impl ConvertContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number the next parameter. The first call returns 1.
    pub fn next_param(&mut self) -> usize {
        self.param_count += 1;
        self.param_count
    }

    /// How many parameters have been numbered so far.
    pub fn param_count(&self) -> usize {
        self.param_count
    }
}

/// Numbers every parameter marker in a subtree that is not converted.
pub(crate) struct ParamReserver<'c> {
    ctx: &'c mut ConvertContext,
    pub(crate) params: Vec<ParamRef>,
}

impl<'c> ParamReserver<'c> {
    pub(crate) fn new(ctx: &'c mut ConvertContext) -> Self {
        Self {
            ctx,
            params: Vec::new(),
        }
    }
}

impl<'ast> Visitor<'ast> for ParamReserver<'_> {
    fn visit_param_marker(&mut self, marker: &'ast ParamMarkerExpr) {
        let number = self.ctx.next_param();
        self.params.push(ParamRef {
            number,
            location: marker.offset,
        });
    }
}
