use std::fmt;

use codespan_reporting::diagnostic::{Diagnostic, Severity};

#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    /// A `v-` attribute that names no directive this compiler understands.
    UnknownDirective(String),
    /// A directive whose value cannot be used: a flag where an expression is
    /// required, an unparseable `v-for`, or a slot with no owning element.
    InvalidDirective { name: String, reason: String },
    /// A `:` binding whose value is not a quoted string literal.
    InvalidBinding { name: String, value: String },
}

impl CompileError {
    pub(crate) fn invalid_directive(name: &str, reason: impl Into<String>) -> Self {
        CompileError::InvalidDirective {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Convert to a codespan-reporting Diagnostic for display.
    /// The tree carries no source positions, so there are no labels.
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        let notes = match self {
            CompileError::UnknownDirective(_) => vec![
                "supported directives: v-if, v-for, v-slot, v-model".to_string(),
            ],
            CompileError::InvalidDirective { .. } => Vec::new(),
            CompileError::InvalidBinding { .. } => {
                vec!["binding values must be quoted, e.g. :attr=\"expr\"".to_string()]
            }
        };
        Diagnostic::new(Severity::Error)
            .with_message(self.to_string())
            .with_notes(notes)
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UnknownDirective(name) => write!(f, "unknown vue directive: {}", name),
            CompileError::InvalidDirective { name, reason } => {
                write!(f, "invalid {}: {}", name, reason)
            }
            CompileError::InvalidBinding { name, value } => {
                write!(f, "invalid v-bind {}: {}", name, value)
            }
        }
    }
}

impl std::error::Error for CompileError {}
