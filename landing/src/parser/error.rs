use std::ops::Range;

use codespan_reporting::diagnostic::{Diagnostic, Label, Severity};

/// A decode error or lint warning, with the source location when one is known.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub span: Option<Range<usize>>,
    pub file_id: usize,
    pub severity: Severity,
    pub notes: Vec<String>,
}

impl ParseError {
    pub fn error(message: impl Into<String>, span: Option<Range<usize>>, file_id: usize) -> Self {
        ParseError {
            message: message.into(),
            span,
            file_id,
            severity: Severity::Error,
            notes: Vec::new(),
        }
    }

    pub fn warning(message: impl Into<String>, file_id: usize) -> Self {
        ParseError {
            message: message.into(),
            span: None,
            file_id,
            severity: Severity::Warning,
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    /// Build from a serde_json failure, mapping its line/column to a byte span in `source`.
    pub fn from_json(error: &serde_json::Error, source: &str, file_id: usize) -> Self {
        let span = byte_span(source, error.line(), error.column());
        let mut message = error.to_string();
        // serde_json appends " at line L column C"; the span carries that now.
        if let Some(pos) = message.rfind(" at line ") {
            message.truncate(pos);
        }
        ParseError::error(message, span, file_id)
    }

    /// Convert to a codespan-reporting Diagnostic for display.
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        let labels = match &self.span {
            Some(span) => vec![Label::primary(self.file_id, span.clone())],
            None => Vec::new(),
        };
        Diagnostic::new(self.severity)
            .with_message(&self.message)
            .with_labels(labels)
            .with_notes(self.notes.clone())
    }
}

/// serde_json reports 1-based lines and columns; line 0 means "no position".
fn byte_span(source: &str, line: usize, column: usize) -> Option<Range<usize>> {
    if line == 0 {
        return None;
    }
    let line_start = source
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum::<usize>();
    let start = (line_start + column.saturating_sub(1)).min(source.len());
    let end = (start + 1).min(source.len());
    Some(start..end)
}
