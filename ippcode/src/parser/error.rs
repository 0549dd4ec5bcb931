use std::fmt;
use std::ops::Range;

use codespan_reporting::diagnostic::{Diagnostic, Label};

use crate::grammar::OperandKind;

/// Why a single operand token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandError {
    InvalidVariable,
    InvalidConstant,
    InvalidType,
    InvalidLabel,
}

impl OperandError {
    /// The failure reported when a token does not fit `kind`.
    pub fn for_kind(kind: OperandKind) -> Self {
        match kind {
            OperandKind::Variable => OperandError::InvalidVariable,
            OperandKind::Symbol => OperandError::InvalidConstant,
            OperandKind::Type => OperandError::InvalidType,
            OperandKind::Label => OperandError::InvalidLabel,
        }
    }
}

impl fmt::Display for OperandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandError::InvalidVariable => write!(f, "invalid variable"),
            OperandError::InvalidConstant => write!(f, "invalid constant"),
            OperandError::InvalidType => write!(f, "invalid type"),
            OperandError::InvalidLabel => write!(f, "invalid label"),
        }
    }
}

impl std::error::Error for OperandError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input has no lines left after cleaning.
    MissingHeader,
    /// The first line is not the header token.
    InvalidHeader,
    UnknownOpcode,
    OperandCount { expected: usize, found: usize },
    InvalidOperand(OperandError),
}

impl ParseErrorKind {
    /// Short stable identifier, shown as the diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            ParseErrorKind::MissingHeader | ParseErrorKind::InvalidHeader => "header",
            ParseErrorKind::UnknownOpcode => "opcode",
            ParseErrorKind::OperandCount { .. } | ParseErrorKind::InvalidOperand(_) => "syntax",
        }
    }
}

/// The error that aborted a parse, with source location information.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub span: Range<usize>,
    pub file_id: usize,
    pub notes: Vec<String>,
}

impl ParseError {
    pub fn new(
        kind: ParseErrorKind,
        message: impl Into<String>,
        span: Range<usize>,
        file_id: usize,
    ) -> Self {
        ParseError {
            kind,
            message: message.into(),
            span,
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
        Diagnostic::error()
            .with_message(&self.message)
            .with_code(self.kind.code())
            .with_labels(vec![Label::primary(self.file_id, self.span.clone())])
            .with_notes(self.notes.clone())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ParseError {}
