use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_\-$&%*!?][\w\-$&%*!?]*$").unwrap());

static INT_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[-+]?[0-9]+|0[oO]?[0-7]+|0[xX][0-9a-fA-F]+)$").unwrap()
});

/// Storage scopes a variable can live in.
pub const FRAMES: [&str; 3] = ["GF", "TF", "LF"];

/// Type names accepted as `<type>` operands and as literal prefixes.
pub const TYPES: [&str; 4] = ["int", "bool", "string", "nil"];

/// The concrete lexical family a `<symb>` operand resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalFamily {
    Variable,
    Integer,
    Boolean,
    Nil,
    String,
}

impl LexicalFamily {
    /// Family of a typed literal, keyed by its (case-sensitive) type prefix.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "int" => Some(LexicalFamily::Integer),
            "bool" => Some(LexicalFamily::Boolean),
            "nil" => Some(LexicalFamily::Nil),
            "string" => Some(LexicalFamily::String),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LexicalFamily::Variable => "var",
            LexicalFamily::Integer => "int",
            LexicalFamily::Boolean => "bool",
            LexicalFamily::Nil => "nil",
            LexicalFamily::String => "string",
        }
    }

    /// Whether `literal` is well formed for this family. Variables are not
    /// literals and never match.
    pub fn accepts(self, literal: &str) -> bool {
        match self {
            LexicalFamily::Variable => false,
            LexicalFamily::Integer => INT_LITERAL.is_match(literal),
            LexicalFamily::Boolean => matches!(literal, "true" | "false"),
            LexicalFamily::Nil => literal == "nil",
            LexicalFamily::String => is_string_literal(literal),
        }
    }
}

impl fmt::Display for LexicalFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Labels, and the name part of a variable reference.
pub fn is_label(text: &str) -> bool {
    LABEL.is_match(text)
}

pub fn is_type(text: &str) -> bool {
    TYPES.contains(&text)
}

/// `FRAME@name` with exactly one `@`.
pub fn is_variable(text: &str) -> bool {
    let Some((frame, name)) = text.split_once('@') else {
        return false;
    };
    FRAMES.contains(&frame) && !name.contains('@') && is_label(name)
}

/// A variable reference or a well-formed typed literal.
pub fn is_symbol(text: &str) -> bool {
    is_variable(text) || split_literal(text).is_some()
}

/// Split `type@literal` at the first `@` and check the literal against the
/// type's grammar. String literals may themselves contain `@`.
pub fn split_literal(text: &str) -> Option<(LexicalFamily, &str)> {
    let (type_name, literal) = text.split_once('@')?;
    let family = LexicalFamily::from_type_name(type_name)?;
    family.accepts(literal).then_some((family, literal))
}

/// Every backslash must start a `\ddd` escape sequence.
pub fn is_string_literal(literal: &str) -> bool {
    let bytes = literal.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' {
            let escape = &bytes[i + 1..];
            if escape.len() < 3 || !escape[..3].iter().all(u8::is_ascii_digit) {
                return false;
            }
            i += 4;
        } else {
            i += 1;
        }
    }
    true
}
