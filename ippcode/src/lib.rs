pub mod grammar;
pub mod instruction;
pub mod lexical;
pub mod parser;
pub mod tree;

use std::fmt;

use crate::instruction::Instruction;

/// Mandatory first line of every source file (compared ignoring ASCII case).
pub const HEADER: &str = ".IPPcode24";

/// Value of the `language` attribute on the root of the emitted tree.
pub const LANGUAGE: &str = "IPPcode24";

/// A fully validated IPPcode24 program.
#[derive(Debug, Clone)]
pub struct Program {
    /// Instructions in source order; `order` runs from 1 without gaps.
    pub instructions: Vec<Instruction>,
    /// The source file ID (for error reporting with codespan-reporting).
    pub source_id: usize,
}

impl Program {
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// Canonical source form: header line followed by one instruction per line.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", HEADER)?;
        for instruction in &self.instructions {
            writeln!(f, "{}", instruction)?;
        }
        Ok(())
    }
}
