use std::ops::Range;

use crate::grammar::{self, GrammarEntry};
use crate::instruction::Instruction;
use crate::instruction::operand::Operand;
use crate::parser::error::{ParseError, ParseErrorKind};
use crate::parser::operand::classify;
use crate::parser::source::{self, SourceLine};
use crate::HEADER;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Validate the whole source and number its instructions.
/// The first problem found aborts the run.
pub fn parse_instructions(source: &str, file_id: usize) -> Result<Vec<Instruction>, ParseError> {
    let mut state = SequenceState::new(file_id);
    for line in source::clean_lines(source) {
        state.process_line(&line)?;
    }
    state.finalize()
}

// ---------------------------------------------------------------------------
// Sequencing state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    AwaitingHeader,
    Sequencing,
}

struct SequenceState {
    file_id: usize,
    stage: Stage,
    /// Order assigned to the next accepted instruction.
    next_order: u32,
    instructions: Vec<Instruction>,
}

impl SequenceState {
    fn new(file_id: usize) -> Self {
        SequenceState {
            file_id,
            stage: Stage::AwaitingHeader,
            next_order: 1,
            instructions: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &SourceLine<'_>) -> Result<(), ParseError> {
        match self.stage {
            Stage::AwaitingHeader => {
                if !line.text.eq_ignore_ascii_case(HEADER) {
                    return Err(self
                        .error(
                            ParseErrorKind::InvalidHeader,
                            format!("expected header `{}`", HEADER),
                            line.span.clone(),
                        )
                        .with_note(format!("found `{}`", line.text)));
                }
                self.stage = Stage::Sequencing;
            }
            Stage::Sequencing => {
                let instruction = self.parse_instruction(line)?;
                self.instructions.push(instruction);
                self.next_order += 1;
            }
        }
        Ok(())
    }

    fn parse_instruction(&self, line: &SourceLine<'_>) -> Result<Instruction, ParseError> {
        let mut tokens = line.tokens().into_iter();
        let Some((opcode, opcode_span)) = tokens.next() else {
            // Cleaned lines always carry at least one token.
            unreachable!("empty line reached the sequencer");
        };

        let Some(entry) = grammar::lookup(opcode) else {
            return Err(self.error(
                ParseErrorKind::UnknownOpcode,
                format!("unknown instruction `{}`", opcode),
                opcode_span,
            ));
        };

        let arguments: Vec<(&str, Range<usize>)> = tokens.collect();
        if arguments.len() != entry.arity() {
            return Err(self.arity_error(entry, arguments.len(), line.span.clone()));
        }

        let mut operands = Vec::with_capacity(arguments.len());
        for ((token, span), &expected) in arguments.into_iter().zip(entry.operands) {
            match classify(token, expected) {
                Ok((kind, value)) => operands.push(Operand {
                    kind,
                    value: value.to_string(),
                    span,
                }),
                Err(err) => {
                    return Err(self
                        .error(
                            ParseErrorKind::InvalidOperand(err),
                            format!("{} `{}`", err, token),
                            span,
                        )
                        .with_note(format!(
                            "`{}` expects {}",
                            entry.name.to_ascii_uppercase(),
                            entry.signature()
                        )));
                }
            }
        }

        Ok(Instruction {
            opcode: entry.name,
            operands,
            order: self.next_order,
            span: line.span.clone(),
        })
    }

    fn arity_error(&self, entry: &GrammarEntry, found: usize, span: Range<usize>) -> ParseError {
        let opcode = entry.name.to_ascii_uppercase();
        let note = if entry.operands.is_empty() {
            format!("`{}` takes no operands", opcode)
        } else {
            format!("usage: {} {}", opcode, entry.signature())
        };
        self.error(
            ParseErrorKind::OperandCount {
                expected: entry.arity(),
                found,
            },
            format!(
                "invalid number of operands for `{}`: expected {}, found {}",
                opcode,
                entry.arity(),
                found
            ),
            span,
        )
        .with_note(note)
    }

    fn error(&self, kind: ParseErrorKind, message: String, span: Range<usize>) -> ParseError {
        ParseError::new(kind, message, span, self.file_id)
    }

    fn finalize(self) -> Result<Vec<Instruction>, ParseError> {
        match self.stage {
            Stage::AwaitingHeader => Err(self.error(
                ParseErrorKind::MissingHeader,
                format!("missing header `{}`", HEADER),
                0..0,
            )),
            Stage::Sequencing => Ok(self.instructions),
        }
    }
}
