use std::fmt;
use std::ops::Range;

use codespan_reporting::diagnostic::{Diagnostic, Label, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// The input is not valid JSON, or a field has the wrong JSON type.
    Syntax,
    /// The JSON is well-formed but a node is not a Block, Tag or Text.
    MalformedTree,
}

/// Errors raised while turning pug-parser output into a tree.
#[derive(Debug, Clone)]
pub struct LoadError {
    pub kind: LoadErrorKind,
    pub message: String,
    /// Byte span in the JSON source, when one is known.
    pub span: Option<Range<usize>>,
    pub file_id: usize,
    pub notes: Vec<String>,
}

impl LoadError {
    pub fn syntax(message: impl Into<String>, span: Range<usize>, file_id: usize) -> Self {
        LoadError {
            kind: LoadErrorKind::Syntax,
            message: message.into(),
            span: Some(span),
            file_id,
            notes: Vec::new(),
        }
    }

    pub fn malformed(message: impl Into<String>, file_id: usize) -> Self {
        LoadError {
            kind: LoadErrorKind::MalformedTree,
            message: message.into(),
            span: None,
            file_id,
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Convert to a codespan-reporting Diagnostic for display.
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        let labels = match &self.span {
            Some(span) => vec![Label::primary(self.file_id, span.clone())],
            None => Vec::new(),
        };
        Diagnostic::new(Severity::Error)
            .with_message(&self.message)
            .with_labels(labels)
            .with_notes(self.notes.clone())
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LoadErrorKind::Syntax => write!(f, "invalid AST json: {}", self.message),
            LoadErrorKind::MalformedTree => write!(f, "malformed tree: {}", self.message),
        }
    }
}

impl std::error::Error for LoadError {}
