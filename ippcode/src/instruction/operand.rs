use std::fmt;
use std::ops::Range;

use crate::lexical::LexicalFamily;

/// What an operand turned out to be once classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedKind {
    Family(LexicalFamily),
    Type,
    Label,
}

impl ResolvedKind {
    /// Lowercase name used as the `type` attribute of argument nodes.
    pub fn name(self) -> &'static str {
        match self {
            ResolvedKind::Family(family) => family.name(),
            ResolvedKind::Type => "type",
            ResolvedKind::Label => "label",
        }
    }

    pub fn is_literal(self) -> bool {
        matches!(self, ResolvedKind::Family(family) if family != LexicalFamily::Variable)
    }
}

impl fmt::Display for ResolvedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified instruction argument.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    pub kind: ResolvedKind,
    /// Whole token for variables, types and labels; the part after the type
    /// prefix for literals (`5` for `int@5`).
    pub value: String,
    /// Byte span of the token in source.
    pub span: Range<usize>,
}

/// Writes the operand back as a source token.
impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_literal() {
            write!(f, "{}@{}", self.kind, self.value)
        } else {
            f.write_str(&self.value)
        }
    }
}
