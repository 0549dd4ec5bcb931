use ippcode::parser::ParseErrorKind;

/// Process exit codes shared with external test harnesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    Usage = 10,
    Input = 11,
    Output = 12,
    Header = 21,
    Opcode = 22,
    Syntax = 23,
    Internal = 99,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<&ParseErrorKind> for ExitCode {
    fn from(kind: &ParseErrorKind) -> Self {
        match kind {
            ParseErrorKind::MissingHeader | ParseErrorKind::InvalidHeader => ExitCode::Header,
            ParseErrorKind::UnknownOpcode => ExitCode::Opcode,
            ParseErrorKind::OperandCount { .. } | ParseErrorKind::InvalidOperand(_) => {
                ExitCode::Syntax
            }
        }
    }
}
