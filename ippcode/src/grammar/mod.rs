use std::fmt;

/// The role a token plays in an instruction, as fixed by the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    /// A frame-qualified variable reference: `GF@x`.
    Variable,
    /// A variable reference or a typed literal: `LF@y`, `int@5`.
    Symbol,
    /// A type name: `int`, `bool`, `string`, `nil`.
    Type,
    /// A jump target.
    Label,
}

impl OperandKind {
    pub fn name(self) -> &'static str {
        match self {
            OperandKind::Variable => "var",
            OperandKind::Symbol => "symb",
            OperandKind::Type => "type",
            OperandKind::Label => "label",
        }
    }
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One instruction of the language: its lowercase name and operand layout.
#[derive(Debug, PartialEq, Eq)]
pub struct GrammarEntry {
    pub name: &'static str,
    pub operands: &'static [OperandKind],
}

impl GrammarEntry {
    pub fn arity(&self) -> usize {
        self.operands.len()
    }

    /// Human-readable operand layout, e.g. `<var> <symb>`.
    pub fn signature(&self) -> String {
        self.operands
            .iter()
            .map(|kind| format!("<{}>", kind))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

use OperandKind::{Label as L, Symbol as S, Type as T, Variable as V};

const fn entry(name: &'static str, operands: &'static [OperandKind]) -> GrammarEntry {
    GrammarEntry { name, operands }
}

/// The complete IPPcode24 instruction set.
pub static INSTRUCTIONS: &[GrammarEntry] = &[
    // Frames and calls
    entry("move", &[V, S]),
    entry("createframe", &[]),
    entry("pushframe", &[]),
    entry("popframe", &[]),
    entry("defvar", &[V]),
    entry("call", &[L]),
    entry("return", &[]),
    // Data stack
    entry("pushs", &[S]),
    entry("pops", &[V]),
    // Arithmetic, relational, boolean and conversion
    entry("add", &[V, S, S]),
    entry("sub", &[V, S, S]),
    entry("mul", &[V, S, S]),
    entry("idiv", &[V, S, S]),
    entry("lt", &[V, S, S]),
    entry("gt", &[V, S, S]),
    entry("eq", &[V, S, S]),
    entry("and", &[V, S, S]),
    entry("or", &[V, S, S]),
    entry("not", &[V, S]),
    entry("int2char", &[V, S]),
    entry("stri2int", &[V, S, S]),
    // I/O
    entry("read", &[V, T]),
    entry("write", &[S]),
    // Strings
    entry("concat", &[V, S, S]),
    entry("strlen", &[V, S]),
    entry("getchar", &[V, S, S]),
    entry("setchar", &[V, S, S]),
    // Types
    entry("type", &[V, S]),
    // Control flow
    entry("label", &[L]),
    entry("jump", &[L]),
    entry("jumpifeq", &[L, S, S]),
    entry("jumpifneq", &[L, S, S]),
    entry("exit", &[S]),
    // Debugging
    entry("dprint", &[S]),
    entry("break", &[]),
];

/// Find the grammar entry for an opcode, ignoring case.
pub fn lookup(opcode: &str) -> Option<&'static GrammarEntry> {
    INSTRUCTIONS
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(opcode))
}
