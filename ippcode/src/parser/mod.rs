pub mod error;
pub mod operand;
mod sequencer;
pub mod source;

pub use error::{OperandError, ParseError, ParseErrorKind};

use crate::Program;

/// Parser entry point.
pub struct Parser {
    source: String,
    file_id: usize,
}

impl Parser {
    pub fn new(source: String, file_id: usize) -> Self {
        Parser { source, file_id }
    }

    /// Validate the source into a complete Program.
    /// Each call numbers its instructions from 1 again.
    pub fn parse(&self) -> Result<Program, ParseError> {
        let instructions = sequencer::parse_instructions(&self.source, self.file_id)?;
        Ok(Program {
            instructions,
            source_id: self.file_id,
        })
    }
}
