//! Reporting channel for constructs the converter skipped.
//!
//! Purely observational: a sink sees what was degraded but never changes
//! what the converter returns.

/// A notice about an unsupported construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// A dialect node kind with no canonical mapping.
    UnhandledNode(&'static str),
    /// An `ALTER TABLE` spec that produced no command.
    UnhandledAlterSpec(&'static str),
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::UnhandledNode(kind) => write!(f, "Unknown node type {}", kind),
            Diagnostic::UnhandledAlterSpec(kind) => write!(f, "Unknown alter table cmd {}", kind),
        }
    }
}

pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics in the order they were reported.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards diagnostics to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::UnhandledNode(kind) => {
                tracing::debug!(kind, "Unknown node type");
            }
            Diagnostic::UnhandledAlterSpec(kind) => {
                tracing::debug!(kind, "Unknown alter table cmd");
            }
        }
    }
}
