pub mod operand;

use std::fmt;
use std::ops::Range;

use crate::instruction::operand::Operand;

/// A single validated instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Canonical lowercase opcode from the grammar table.
    pub opcode: &'static str,
    /// One operand per grammar slot, in order.
    pub operands: Vec<Operand>,
    /// Position in the program, starting at 1.
    pub order: u32,
    /// Byte span of the whole source line.
    pub span: Range<usize>,
}

impl Instruction {
    /// Opcode as written into the output tree.
    pub fn opcode_upper(&self) -> String {
        self.opcode.to_ascii_uppercase()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.opcode_upper())?;
        for operand in &self.operands {
            write!(f, " {}", operand)?;
        }
        Ok(())
    }
}
